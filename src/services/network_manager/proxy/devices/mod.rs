//! NetworkManager Device interface.

use zbus::{proxy, zvariant::OwnedObjectPath};

/// Base network device interface.
///
/// Common interface for all network device types.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager.Device"
)]
pub trait Device {
    /// The name of the device's control (and often data) interface.
    #[zbus(property)]
    fn interface(&self) -> zbus::Result<String>;

    /// Object path of an ActiveConnection object that "owns" this device during activation.
    #[zbus(property)]
    fn active_connection(&self) -> zbus::Result<OwnedObjectPath>;

    /// Whether or not this device is managed by NetworkManager.
    #[zbus(property)]
    fn managed(&self) -> zbus::Result<bool>;

    /// The general type of the network device.
    #[zbus(property)]
    fn device_type(&self) -> zbus::Result<u32>;

    /// An array of object paths of every configured connection that is currently 'available' through this device.
    #[zbus(property)]
    fn available_connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}
