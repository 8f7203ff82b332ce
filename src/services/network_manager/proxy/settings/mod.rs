//! NetworkManager Settings interface.

use std::collections::HashMap;
use zbus::{
    proxy,
    zvariant::{OwnedObjectPath, OwnedValue},
};

pub mod connection;

/// Connection Settings Profile Manager.
///
/// Manages saved network connection profiles.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager.Settings",
    default_path = "/org/freedesktop/NetworkManager/Settings"
)]
pub trait Settings {
    /// Retrieve the object path of a connection, given that connection's UUID.
    ///
    /// # Arguments
    /// * `uuid` - The UUID to find the connection object path for
    ///
    /// # Returns
    /// The connection object path
    fn get_connection_by_uuid(&self, uuid: &str) -> zbus::Result<OwnedObjectPath>;

    /// Add new connection and save it to disk.
    ///
    /// # Arguments
    /// * `connection` - Connection settings and properties
    ///
    /// # Returns
    /// Object path of the new connection that was just added
    fn add_connection(
        &self,
        connection: HashMap<String, HashMap<String, OwnedValue>>,
    ) -> zbus::Result<OwnedObjectPath>;
}
