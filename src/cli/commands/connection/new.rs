use std::sync::Arc;

use async_trait::async_trait;

use super::{parse_variant, variant_arg};
use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command printing the default profile of a dialog
pub struct NewCommand {
    context: Arc<CliContext>,
}

impl NewCommand {
    /// Creates a new NewCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for NewCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let variant = parse_variant(&args[0])?;
        let ppp = self.context.config().pppoe.into();

        Ok(variant.default_settings(&args[1], ppp).to_json_pretty()?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "new".to_string(),
            description: "Print the default settings for a new connection".to_string(),
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
            ],
            examples: vec![
                "netdialogs connection new wireguard wg0".to_string(),
                "netdialogs connection new pppoe ppp0 > ppp0.json".to_string(),
            ],
        }
    }
}
