mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings that apply to every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GeneralConfig {
    /// Log verbosity used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}
