//! NetworkManager Active Connection interface.

use zbus::proxy;

/// Active Connection.
///
/// Represents an attempt to connect to a network using a connection profile.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager.Connection.Active"
)]
pub trait ConnectionActive {
    /// The UUID of the connection profile.
    #[zbus(property)]
    fn uuid(&self) -> zbus::Result<String>;
}
