//! Interface enumeration commands.
mod list;
mod parents;

use std::sync::Arc;

pub use list::ListCommand;
pub use parents::ParentsCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the `interfaces` commands.
pub fn register_commands(registry: &mut CommandRegistry, context: &Arc<CliContext>) {
    const CATEGORY_NAME: &str = "interfaces";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ParentsCommand::new(context.clone())));
}
