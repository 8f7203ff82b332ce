use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures only.
    Error,

    /// Rejected submits and failed key generation.
    Warn,

    /// Applied settings (default).
    #[default]
    Info,

    /// Every form edit and D-Bus round trip.
    Debug,

    /// Everything, including span entry and exit.
    Trace,
}

impl LogLevel {
    /// Directive for an `EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}
