//! Configuration inspection commands.
mod get;
mod schema;

use std::sync::Arc;

pub use get::GetCommand;
pub use schema::SchemaCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers all configuration-related commands with the command registry.
///
/// Registers commands in the "config" category for reading the loaded
/// configuration and printing its schema.
pub fn register_commands(registry: &mut CommandRegistry, context: &Arc<CliContext>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand::new()));
}
