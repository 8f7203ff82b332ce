use std::sync::Arc;

use async_trait::async_trait;

use super::{DialogRun, Finish, edits_arg, parse_variant, variant_arg};
use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    dialogs::parent_choices,
    services::network_manager::ConnectionRef,
};

/// Command editing a saved connection through a dialog
///
/// When the connection is running on a device, the device is handed along
/// so the service can re-activate it.
pub struct UpdateCommand {
    context: Arc<CliContext>,
}

impl UpdateCommand {
    /// Creates a new UpdateCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for UpdateCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let variant = parse_variant(&args[0])?;
        let connection = ConnectionRef::new(args[1].as_str());

        let model = self.context.network().await?;
        let settings = model
            .load_settings(&connection, &[variant.secret_section()])
            .await?;
        let interfaces = model.list_interfaces().await?;

        let device = interfaces
            .iter()
            .find(|iface| model.is_interface_connection(iface, Some(&connection)))
            .map(|iface| iface.device_ref());
        let parent_choices = parent_choices(model.as_ref(), &interfaces, Some(&connection));

        DialogRun {
            variant,
            settings,
            connection: Some(connection),
            device,
            parent_choices,
            edits: &args[2..],
        }
        .run(Finish::Submit(model.as_ref()))
        .await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "update".to_string(),
            description: "Edit a saved connection and save it back".to_string(),
            category: "connection".to_string(),
            args: vec![
                variant_arg(),
                CommandArg {
                    name: "uuid".to_string(),
                    description: "UUID of the saved connection".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::Uuid,
                },
                edits_arg(),
            ],
            examples: vec![
                "netdialogs connection update wireguard 7f1c3a2e-52b4-4bd4-9d0a-2c1f6f0e6a11 private_key=..."
                    .to_string(),
            ],
        }
    }
}
