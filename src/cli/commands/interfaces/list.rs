use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Command listing network interfaces in enumeration order
pub struct ListCommand {
    context: Arc<CliContext>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let model = self.context.network().await?;
        let interfaces = model.list_interfaces().await?;

        let lines: Vec<String> = interfaces
            .iter()
            .map(|iface| {
                let mut line = format!("{}\t{}", iface.name, iface.device_type);
                if !iface.managed {
                    line.push_str("\tunmanaged");
                }
                if !iface.connection_uuids.is_empty() {
                    line.push('\t');
                    line.push_str(&iface.connection_uuids.join(","));
                }
                line
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List interfaces with their type and saved connections".to_string(),
            category: "interfaces".to_string(),
            args: vec![],
            examples: vec!["netdialogs interfaces list".to_string()],
        }
    }
}
