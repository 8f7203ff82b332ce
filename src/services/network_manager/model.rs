use async_trait::async_trait;

use super::{NMDeviceType, NetworkError};
use crate::settings::Settings;

/// A network interface as seen by the dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iface {
    /// Kernel interface name.
    pub name: String,
    /// Kind of device backing the interface.
    pub device_type: NMDeviceType,
    /// Whether NetworkManager manages the device.
    pub managed: bool,
    /// UUIDs of the saved connections that can run on this interface.
    pub connection_uuids: Vec<String>,
    /// D-Bus object path of the device, when it has one.
    pub device_path: Option<String>,
}

impl Iface {
    /// A managed interface with no connections attached.
    pub fn new(name: impl Into<String>, device_type: NMDeviceType) -> Self {
        Self {
            name: name.into(),
            device_type,
            managed: true,
            connection_uuids: Vec::new(),
            device_path: None,
        }
    }

    /// Builder: attaches a saved connection to the interface.
    pub fn with_connection(mut self, uuid: impl Into<String>) -> Self {
        self.connection_uuids.push(uuid.into());
        self
    }

    /// Builder: sets the managed flag.
    pub fn managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }

    /// Device reference for handing to [`NetworkModel::apply_settings`].
    pub fn device_ref(&self) -> DeviceRef {
        DeviceRef {
            interface: self.name.clone(),
            path: self.device_path.clone(),
        }
    }
}

/// Identity of an existing saved connection being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRef {
    /// Connection UUID.
    pub uuid: String,
}

impl ConnectionRef {
    /// Reference by UUID.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

/// Identity of the device the dialog was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRef {
    /// Interface name of the device.
    pub interface: String,
    /// D-Bus object path, when known.
    pub path: Option<String>,
}

/// Everything the service needs to save a submitted profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyRequest {
    /// Connection being edited; `None` creates a new one.
    pub connection: Option<ConnectionRef>,
    /// Device the dialog belongs to, if any.
    pub device: Option<DeviceRef>,
    /// Merged profile to persist.
    pub settings: Settings,
}

/// The network configuration service the dialogs talk to.
///
/// Enumerates interfaces, classifies them for parent selection, reads saved
/// profiles and applies submitted ones.
#[async_trait]
pub trait NetworkModel: Send + Sync {
    /// Current interfaces in enumeration order.
    ///
    /// # Errors
    /// Returns `NetworkError` if the service cannot be queried.
    async fn list_interfaces(&self) -> Result<Vec<Iface>, NetworkError>;

    /// Whether `iface` is already the interface of `connection`.
    fn is_interface_connection(&self, iface: &Iface, connection: Option<&ConnectionRef>) -> bool {
        connection.is_some_and(|connection| iface.connection_uuids.contains(&connection.uuid))
    }

    /// Whether `iface` is worth offering as a parent.
    fn is_interesting_interface(&self, iface: &Iface) -> bool {
        iface.managed && iface.device_type != NMDeviceType::Loopback && iface.name != "lo"
    }

    /// Reads a saved profile, including the secrets of `secret_sections`.
    ///
    /// # Errors
    /// Returns `NetworkError::ConnectionNotFound` for an unknown UUID.
    async fn load_settings(
        &self,
        connection: &ConnectionRef,
        secret_sections: &[&str],
    ) -> Result<Settings, NetworkError>;

    /// Saves a merged profile.
    ///
    /// # Errors
    /// Returns `NetworkError` describing why the service rejected the profile;
    /// the message is shown to the operator verbatim.
    async fn apply_settings(&self, request: ApplyRequest) -> Result<(), NetworkError>;
}
