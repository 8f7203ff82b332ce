use std::sync::Arc;

use super::{
    CliContext, CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// The context is shared by every command.
    pub fn new(context: CliContext) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(context));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Help text for every command, or for one category.
    pub fn help(&self, category: Option<&str>) -> String {
        let mut out = vec![
            format_header("netdialogs - network connection dialogs"),
            String::new(),
            format_subheader("USAGE:"),
        ];
        out.push(format!(
            "  {}",
            format_usage("netdialogs [--dry-run] <category> <command> [args...]")
        ));

        for (name, commands) in self.list_all() {
            if category.is_some_and(|wanted| wanted != name) {
                continue;
            }

            out.push(String::new());
            out.push(format_category(&name));
            for command in commands {
                let Some(metadata) = self.registry.metadata(&name, &command) else {
                    continue;
                };

                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| match (arg.required, arg.variadic) {
                        (_, true) => format!("[{}...]", arg.name),
                        (true, false) => format!("<{}>", arg.name),
                        (false, false) => format!("[{}]", arg.name),
                    })
                    .collect();

                out.push(format!(
                    "  {} {}  {}",
                    format_command(&metadata.name),
                    args.join(" "),
                    format_description(&metadata.description)
                ));
                for example in &metadata.examples {
                    out.push(format!("      {}", format_usage(example)));
                }
            }
        }

        out.join("\n")
    }
}
