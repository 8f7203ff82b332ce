//! Command-line interface for the connection dialogs.
//!
//! Drives the dialogs headlessly: every form field is reachable as an edit
//! argument, and submitting goes through the same flow a graphical dialog
//! uses. Commands are organized by category and generate their help text
//! from metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::connection::edits::{Edit, EditableForm, parse_edits};
pub use context::CliContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
