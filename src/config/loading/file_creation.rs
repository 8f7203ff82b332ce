use crate::{NetDialogsError, Result, config::Config};
use std::{fs, path::Path};

const HEADER: &str = "# netdialogs configuration file\n\n";

/// Writes the default configuration to `path`, creating parent directories.
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| NetDialogsError::IoError {
            path: parent.to_path_buf(),
            details: format!("failed to create config directory: {e}"),
        })?;
    }

    let defaults = toml::to_string(&Config::default()).map_err(|e| {
        NetDialogsError::ConfigValidation {
            component: "default configuration".to_string(),
            details: e.to_string(),
        }
    })?;

    fs::write(path, format!("{HEADER}{defaults}")).map_err(|e| NetDialogsError::IoError {
        path: path.to_path_buf(),
        details: format!("failed to create config file: {e}"),
    })?;

    Ok(())
}
