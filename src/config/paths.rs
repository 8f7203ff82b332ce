use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "netdialogs";

/// Locates configuration and log directories.
///
/// Follows the XDG Base Directory layout for configuration.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Configuration directory: `$XDG_CONFIG_HOME/netdialogs`, falling back
    /// to `$HOME/.config/netdialogs`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_DIR))
    }

    /// Application data directory, created on demand.
    ///
    /// # Errors
    /// Returns an error if HOME is not set or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let app_dir = env::var("HOME")
            .map(|home| PathBuf::from(home).join(format!(".{APP_DIR}")))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Log directory inside the data directory, created on demand.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Path of the main configuration file.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
