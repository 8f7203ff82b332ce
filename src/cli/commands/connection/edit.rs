use async_trait::async_trait;

use super::{DialogRun, Finish, edits_arg, parse_variant, variant_arg};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::Settings,
};

/// Command merging edits into a settings file without saving anything
///
/// No network access: the PPPoE parent keeps the value stored in the file.
pub struct EditCommand;

impl EditCommand {
    /// Creates a new EditCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for EditCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for EditCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let variant = parse_variant(&args[0])?;
        let path = &args[1];
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CliError::InvalidArgument {
                arg: path.clone(),
                reason: e.to_string(),
            })?;

        DialogRun {
            variant,
            settings: Settings::from_json(&text)?,
            connection: None,
            device: None,
            parent_choices: Vec::new(),
            edits: &args[2..],
        }
        .run(Finish::Preview)
        .await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "edit".to_string(),
            description: "Apply form edits to a settings file and print the merged settings"
                .to_string(),
            category: "connection".to_string(),
            args: vec![
                variant_arg(),
                CommandArg {
                    name: "file".to_string(),
                    description: "JSON settings file".to_string(),
                    required: true,
                    variadic: false,
                    value_type: ArgType::Path,
                },
                edits_arg(),
            ],
            examples: vec![
                "netdialogs connection edit wireguard wg0.json peer+ peer.0.endpoint=vpn.example.org:51820"
                    .to_string(),
                "netdialogs connection edit pppoe ppp0.json parent=eth0 username=alice".to_string(),
            ],
        }
    }
}
