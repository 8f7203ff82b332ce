use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dialogs::{DEFAULT_WG_BINARY, WgKeyGenerator};

/// Tunnel key generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KeygenConfig {
    /// Absolute path of the `wg` tool.
    pub wg_binary: PathBuf,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            wg_binary: PathBuf::from(DEFAULT_WG_BINARY),
        }
    }
}

impl KeygenConfig {
    /// Key generator using the configured binary.
    pub fn generator(&self) -> WgKeyGenerator {
        WgKeyGenerator::new(self.wg_binary.clone())
    }
}
