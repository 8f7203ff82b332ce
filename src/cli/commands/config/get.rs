use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, CliError, Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    core::NetDialogsError,
};

/// Command for reading values from the loaded configuration.
///
/// # Example Usage
///
/// ```bash
/// netdialogs config get keygen.wg_binary
/// netdialogs config get pppoe.lcp_echo_interval
/// ```
pub struct GetCommand {
    context: Arc<CliContext>,
}

impl GetCommand {
    /// Creates a new GetCommand reading from the context's configuration.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for GetCommand {
    /// Retrieves and formats a configuration value from the dotted path.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArgument` - If the path does not name a value
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = &args[0];

        let root = toml::Value::try_from(self.context.config()).map_err(|e| {
            NetDialogsError::ConfigValidation {
                component: "config".to_string(),
                details: e.to_string(),
            }
        })?;

        let value = path
            .split('.')
            .try_fold(&root, |value, segment| value.get(segment))
            .ok_or_else(|| CliError::InvalidArgument {
                arg: path.clone(),
                reason: "no such configuration path".to_string(),
            })?;

        Ok(format!("{}: {}", path, format_toml_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration value".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Configuration path (e.g., keygen.wg_binary)".to_string(),
                required: true,
                variadic: false,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "netdialogs config get general.log_level".to_string(),
                "netdialogs config get pppoe.lcp_echo_failure".to_string(),
            ],
        }
    }
}
