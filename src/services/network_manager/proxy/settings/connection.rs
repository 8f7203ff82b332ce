//! NetworkManager Settings Connection interface.

use std::collections::HashMap;
use zbus::{proxy, zvariant::OwnedValue};

/// Connection Settings Profile.
///
/// Represents an individual saved network connection.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager.Settings.Connection"
)]
pub trait SettingsConnection {
    /// Update the connection with new settings and properties and save it to disk.
    ///
    /// # Arguments
    /// * `properties` - New connection settings, replacing all previous ones
    fn update(&self, properties: HashMap<String, HashMap<String, OwnedValue>>) -> zbus::Result<()>;

    /// Get the settings maps describing this network configuration.
    ///
    /// # Returns
    /// Connection settings (without secrets)
    fn get_settings(&self) -> zbus::Result<HashMap<String, HashMap<String, OwnedValue>>>;

    /// Get the secrets belonging to this network configuration.
    ///
    /// # Arguments
    /// * `setting_name` - Name of the setting to get secrets for
    ///
    /// # Returns
    /// Nested settings maps containing secrets
    fn get_secrets(
        &self,
        setting_name: &str,
    ) -> zbus::Result<HashMap<String, HashMap<String, OwnedValue>>>;
}
