//! NetworkManager main D-Bus interface.

use zbus::{proxy, zvariant::OwnedObjectPath};

/// Connection Manager.
///
/// The main NetworkManager D-Bus interface for managing network connections.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager"
)]
pub trait NetworkManager {
    /// Get the list of realized network devices.
    ///
    /// # Returns
    /// List of object paths of network devices known to the system. This list does not include device placeholders.
    fn get_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Activate a connection using the supplied device.
    ///
    /// # Arguments
    /// * `connection` - The connection to activate.
    /// * `device` - The object path of device to be activated for physical connections.
    /// * `specific_object` - Connection-type-specific object, "/" for none.
    ///
    /// # Returns
    /// The path of the active connection object representing this active connection.
    fn activate_connection(
        &self,
        connection: &OwnedObjectPath,
        device: &OwnedObjectPath,
        specific_object: &OwnedObjectPath,
    ) -> zbus::Result<OwnedObjectPath>;
}
