use async_trait::async_trait;
use thiserror::Error;

use crate::{NetDialogsError, services::network_manager::NetworkError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Wrong number of arguments for a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// One argument could not be understood.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name or the offending text
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// Settings or configuration could not be processed.
    #[error("Settings error: {0}")]
    Settings(#[from] NetDialogsError),

    /// The network service failed.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Service that failed
        service: String,
        /// Failure details
        details: String,
    },

    /// A submit was rejected; the dialog would still be open.
    #[error("Settings not applied: {0}")]
    Rejected(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<NetworkError> for CliError {
    fn from(error: NetworkError) -> Self {
        CliError::ServiceError {
            service: "NetworkManager".to_string(),
            details: error.to_string(),
        }
    }
}

/// Type alias for command execution results.
///
/// Success carries the text to print.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "variant", "file").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// Whether the argument soaks up every remaining value. Only the last
    /// argument may be variadic.
    pub variadic: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// One of `openvpn`, `wireguard`, `pppoe`.
    Variant,

    /// A connection UUID.
    Uuid,

    /// A file system path or configuration path.
    Path,

    /// A form edit such as `name=wg1` or `peer.0.endpoint=host:51820`.
    Edit,
}

/// Complete metadata for a CLI command.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "new", "parents").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "connection").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`].
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, settings errors,
    /// service failures and rejected submits.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
