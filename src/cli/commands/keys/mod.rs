//! Tunnel key commands.
mod generate;

use std::sync::Arc;

pub use generate::GenerateCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the `keys` commands.
pub fn register_commands(registry: &mut CommandRegistry, context: &Arc<CliContext>) {
    registry.register_command("keys", Box::new(GenerateCommand::new(context.clone())));
}
