mod file_creation;

use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{NetDialogsError, Result};
use file_creation::create_default_config_file;

impl Config {
    /// Loads the configuration file at `path`, creating a default one first
    /// when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default file cannot be written
    /// - The file cannot be read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("creating default configuration file");
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| NetDialogsError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let config = Self::from_toml(&content, Some(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at [`ConfigPaths::main_config`].
    ///
    /// # Errors
    /// See [`Config::load`]; also fails when no configuration directory can
    /// be determined.
    pub fn load_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load(&path)
    }

    /// Parses configuration text.
    ///
    /// # Errors
    /// Returns `NetDialogsError::TomlParseError` for invalid TOML or values of
    /// the wrong type.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| NetDialogsError::toml_parse(e, path))
    }

    /// Checks values TOML typing cannot rule out.
    ///
    /// # Errors
    /// Returns `NetDialogsError::ConfigValidation` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if !self.keygen.wg_binary.is_absolute() {
            return Err(NetDialogsError::ConfigValidation {
                component: "keygen.wg_binary".to_string(),
                details: format!(
                    "'{}' must be an absolute path",
                    self.keygen.wg_binary.display()
                ),
            });
        }

        if self.pppoe.lcp_echo_failure > 0 && self.pppoe.lcp_echo_interval == 0 {
            return Err(NetDialogsError::ConfigValidation {
                component: "pppoe.lcp_echo_interval".to_string(),
                details: "must be positive when lcp_echo_failure is set".to_string(),
            });
        }

        Ok(())
    }
}
