use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    dialogs::load_parent_choices,
    services::network_manager::ConnectionRef,
};

/// Command printing the parent choices a PPPoE dialog would offer
pub struct ParentsCommand {
    context: Arc<CliContext>,
}

impl ParentsCommand {
    /// Creates a new ParentsCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ParentsCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let connection = args.first().map(|uuid| ConnectionRef::new(uuid.as_str()));

        let model = self.context.network().await?;
        let choices = load_parent_choices(model.as_ref(), connection.as_ref()).await?;

        Ok(choices.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "parents".to_string(),
            description: "List interfaces offered as parent of a connection".to_string(),
            category: "interfaces".to_string(),
            args: vec![CommandArg {
                name: "uuid".to_string(),
                description: "Connection being edited; omit for a new one".to_string(),
                required: false,
                variadic: false,
                value_type: ArgType::Uuid,
            }],
            examples: vec![
                "netdialogs interfaces parents".to_string(),
                "netdialogs interfaces parents 7f1c3a2e-52b4-4bd4-9d0a-2c1f6f0e6a11".to_string(),
            ],
        }
    }
}
