use std::{collections::HashMap, sync::Arc};

use super::{
    CliContext, CliError, Command,
    commands::{config, connection, interfaces, keys},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by logical category so each module registers its
/// own commands instead of growing one big match.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── connection
/// │   ├── new
/// │   ├── edit
/// │   ├── show
/// │   ├── create
/// │   └── update
/// ├── interfaces
/// │   ├── list
/// │   └── parents
/// ├── keys
/// │   └── generate
/// └── config
///     ├── get
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands must be added with `register_command` or
    /// `register_all_commands`.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category. A command
    /// with the same name replaces the previous one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// does not exist, and `CliError::InvalidArguments` if the argument count
    /// does not match the command's metadata. Other errors come from the
    /// command itself.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Metadata of one command, if registered.
    pub fn metadata(&self, category: &str, command_name: &str) -> Option<CommandMetadata> {
        self.categories
            .get(category)?
            .get(command_name)
            .map(|command| command.metadata())
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();
        let variadic = metadata.args.last().is_some_and(|arg| arg.variadic);

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if !variadic && args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = self.context.clone();

        connection::register_commands(self, &context);
        interfaces::register_commands(self, &context);
        keys::register_commands(self, &context);
        config::register_commands(self, &context);
    }
}
