use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
    core::NetDialogsError,
};

/// Command printing the JSON schema of the configuration file
pub struct SchemaCommand;

impl SchemaCommand {
    /// Creates a new SchemaCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchemaCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);

        let text = serde_json::to_string_pretty(&schema).map_err(NetDialogsError::from)?;

        Ok(text)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the configuration file".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["netdialogs config schema > netdialogs.schema.json".to_string()],
        }
    }
}
