use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Command generating a tunnel key pair
///
/// Prints the public key on the first line and the private key on the
/// second, the same layout the `wg` pipeline produces.
pub struct GenerateCommand {
    context: Arc<CliContext>,
}

impl GenerateCommand {
    /// Creates a new GenerateCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for GenerateCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let pair = self.context.key_generator().generate_key_pair().await?;

        Ok(format!("{}\n{}", pair.public_key, pair.private_key))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "generate".to_string(),
            description: "Generate a tunnel key pair (public, then private)".to_string(),
            category: "keys".to_string(),
            args: vec![],
            examples: vec!["netdialogs keys generate".to_string()],
        }
    }
}
