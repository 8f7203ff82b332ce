//! Configuration schema definitions and validation.
//!
//! The configuration file tunes the ambient behaviour of the dialogs: log
//! verbosity, where the `wg` tool lives, and the LCP echo counters new
//! PPPoE profiles start with. Every field has a default, so an empty or
//! missing file is valid.

mod general;
mod keygen;
mod loading;
mod paths;
mod pppoe;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use keygen::KeygenConfig;
pub use paths::ConfigPaths;
pub use pppoe::PppoeConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Key pair generation.
    #[serde(default)]
    pub keygen: KeygenConfig,

    /// Defaults for new PPPoE profiles.
    #[serde(default)]
    pub pppoe: PppoeConfig,
}
