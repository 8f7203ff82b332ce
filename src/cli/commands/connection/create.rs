use std::sync::Arc;

use async_trait::async_trait;

use super::{DialogRun, Finish, edits_arg, parse_variant, variant_arg};
use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    dialogs::load_parent_choices,
};

/// Command creating a new connection through a dialog
pub struct CreateCommand {
    context: Arc<CliContext>,
}

impl CreateCommand {
    /// Creates a new CreateCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let variant = parse_variant(&args[0])?;
        let settings = variant.default_settings(&args[1], self.context.config().pppoe.into());

        let model = self.context.network().await?;
        let parent_choices = load_parent_choices(model.as_ref(), None).await?;

        DialogRun {
            variant,
            settings,
            connection: None,
            device: None,
            parent_choices,
            edits: &args[2..],
        }
        .run(Finish::Submit(model.as_ref()))
        .await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "create".to_string(),
            description: "Create a connection from defaults plus form edits".to_string(),
            category: "connection".to_string(),
            args: vec![
                variant_arg(),
                CommandArg {
                    name: "iface".to_string(),
                    description: "Interface name of the new connection".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::String,
                },
                edits_arg(),
            ],
            examples: vec![
                "netdialogs connection create pppoe ppp0 parent=eth0 username=alice password=secret"
                    .to_string(),
            ],
        }
    }
}
