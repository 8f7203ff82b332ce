use std::sync::Arc;

use async_trait::async_trait;

use super::{parse_variant, variant_arg};
use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::network_manager::ConnectionRef,
};

/// Command printing a saved connection, secrets included
pub struct ShowCommand {
    context: Arc<CliContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let variant = parse_variant(&args[0])?;
        let connection = ConnectionRef::new(args[1].as_str());

        let model = self.context.network().await?;
        let settings = model
            .load_settings(&connection, &[variant.secret_section()])
            .await?;

        Ok(settings.to_json_pretty()?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the settings of a saved connection".to_string(),
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
            ],
            examples: vec![
                "netdialogs connection show wireguard 7f1c3a2e-52b4-4bd4-9d0a-2c1f6f0e6a11"
                    .to_string(),
            ],
        }
    }
}
