use futures::future::join_all;
use tracing::{debug, instrument, warn};
use zbus::{
    Connection,
    zvariant::{OwnedObjectPath, OwnedValue, Value},
};

use super::{
    ConnectionActiveProxy, DeviceProxy, NMDeviceType, NetworkError, NetworkManagerProxy,
    SettingsConnectionProxy, SettingsProxy,
    convert::{merge_secrets, settings_from_dbus, settings_to_dbus},
    model::{ApplyRequest, ConnectionRef, DeviceRef, Iface, NetworkModel},
};
use crate::settings::{CONNECTION, Settings};

const NO_OBJECT: &str = "/";

/// [`NetworkModel`] backed by NetworkManager on the system bus.
#[derive(Debug, Clone)]
pub struct NmNetworkModel {
    zbus_connection: Connection,
}

impl NmNetworkModel {
    /// Wraps an existing bus connection.
    pub fn new(zbus_connection: Connection) -> Self {
        Self { zbus_connection }
    }

    /// Connects to the system bus.
    ///
    /// # Errors
    /// Returns `NetworkError::ServiceInitializationFailed` if the bus is unreachable.
    #[instrument]
    pub async fn connect() -> Result<Self, NetworkError> {
        let connection = Connection::system().await.map_err(|err| {
            NetworkError::ServiceInitializationFailed(format!("D-Bus connection failed: {err}"))
        })?;

        Ok(Self::new(connection))
    }

    async fn connection_path(&self, uuid: &str) -> Result<OwnedObjectPath, NetworkError> {
        let settings_proxy = SettingsProxy::new(&self.zbus_connection).await?;
        settings_proxy
            .get_connection_by_uuid(uuid)
            .await
            .map_err(|_| NetworkError::ConnectionNotFound(uuid.to_string()))
    }

    async fn describe_device(&self, path: OwnedObjectPath) -> Result<Iface, NetworkError> {
        let device = DeviceProxy::new(&self.zbus_connection, path.clone()).await?;

        let (name, device_type, managed, available) = tokio::join!(
            device.interface(),
            device.device_type(),
            device.managed(),
            device.available_connections(),
        );

        let mut iface = Iface::new(name?, NMDeviceType::from_u32(device_type?)).managed(managed?);
        iface.device_path = Some(path.to_string());

        let uuids = join_all(
            available?
                .into_iter()
                .map(|connection| self.connection_uuid(connection)),
        )
        .await;
        iface.connection_uuids = uuids.into_iter().flatten().collect();

        Ok(iface)
    }

    async fn connection_uuid(&self, path: OwnedObjectPath) -> Option<String> {
        let proxy = SettingsConnectionProxy::new(&self.zbus_connection, path.clone())
            .await
            .ok()?;
        let settings = proxy.get_settings().await.ok()?;

        settings
            .get(CONNECTION)
            .and_then(|section| section.get("uuid"))
            .and_then(string_value)
    }

    async fn save(&self, request: &ApplyRequest) -> Result<OwnedObjectPath, NetworkError> {
        let Some(connection) = &request.connection else {
            let payload = settings_to_dbus(&request.settings, None)?;
            let settings_proxy = SettingsProxy::new(&self.zbus_connection).await?;

            return settings_proxy.add_connection(payload).await.map_err(|e| {
                NetworkError::OperationFailed {
                    operation: "add_connection",
                    reason: service_reason(e),
                }
            });
        };

        let path = self.connection_path(&connection.uuid).await?;
        let proxy = SettingsConnectionProxy::new(&self.zbus_connection, path.clone()).await?;
        let current = proxy.get_settings().await?;
        let payload = settings_to_dbus(&request.settings, Some(&current))?;

        proxy
            .update(payload)
            .await
            .map_err(|e| NetworkError::OperationFailed {
                operation: "update_connection",
                reason: service_reason(e),
            })?;

        Ok(path)
    }

    /// Re-activates the saved connection when it is the one running on `device`.
    async fn reactivate(
        &self,
        connection_path: &OwnedObjectPath,
        device: &DeviceRef,
        uuid: Option<&str>,
    ) -> Result<(), NetworkError> {
        let Some(device_path) = &device.path else {
            debug!(interface = %device.interface, "device has no object path");
            return Ok(());
        };

        let device_path = OwnedObjectPath::try_from(device_path.as_str())
            .map_err(|e| NetworkError::DbusError(e.into()))?;
        let device_proxy = DeviceProxy::new(&self.zbus_connection, device_path.clone()).await?;
        let active = device_proxy.active_connection().await?;

        if active.as_str() == NO_OBJECT {
            return Ok(());
        }

        let active_proxy = ConnectionActiveProxy::new(&self.zbus_connection, active).await?;
        let active_uuid = active_proxy.uuid().await?;
        if uuid != Some(active_uuid.as_str()) {
            return Ok(());
        }

        let no_object = OwnedObjectPath::try_from(NO_OBJECT)
            .map_err(|e| NetworkError::DbusError(e.into()))?;
        let manager = NetworkManagerProxy::new(&self.zbus_connection).await?;
        manager
            .activate_connection(connection_path, &device_path, &no_object)
            .await
            .map_err(|e| NetworkError::OperationFailed {
                operation: "activate_connection",
                reason: service_reason(e),
            })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl NetworkModel for NmNetworkModel {
    #[instrument(skip(self))]
    async fn list_interfaces(&self) -> Result<Vec<Iface>, NetworkError> {
        let manager = NetworkManagerProxy::new(&self.zbus_connection).await?;
        let devices = manager.get_devices().await?;

        let described = join_all(
            devices
                .into_iter()
                .map(|path| async move { (path.clone(), self.describe_device(path).await) }),
        )
        .await;

        let interfaces = described
            .into_iter()
            .filter_map(|(path, result)| match result {
                Ok(iface) => Some(iface),
                Err(e) => {
                    warn!(device = %path, error = %e, "skipping device");
                    None
                }
            })
            .collect();

        Ok(interfaces)
    }

    #[instrument(skip(self), fields(uuid = %connection.uuid))]
    async fn load_settings(
        &self,
        connection: &ConnectionRef,
        secret_sections: &[&str],
    ) -> Result<Settings, NetworkError> {
        let path = self.connection_path(&connection.uuid).await?;
        let proxy = SettingsConnectionProxy::new(&self.zbus_connection, path).await?;

        let mut settings = settings_from_dbus(&proxy.get_settings().await?);
        for section in secret_sections {
            match proxy.get_secrets(section).await {
                Ok(secrets) => merge_secrets(&mut settings, &settings_from_dbus(&secrets)),
                Err(e) => debug!(section = %section, error = %e, "no secrets available"),
            }
        }

        Ok(settings)
    }

    #[instrument(skip(self, request), fields(existing = request.connection.is_some()))]
    async fn apply_settings(&self, request: ApplyRequest) -> Result<(), NetworkError> {
        let path = self.save(&request).await?;

        if let Some(device) = &request.device {
            let uuid = request
                .settings
                .section(CONNECTION)
                .and_then(|section| section.get("uuid"))
                .and_then(serde_json::Value::as_str);
            self.reactivate(&path, device, uuid).await?;
        }

        Ok(())
    }
}

fn service_reason(error: zbus::Error) -> String {
    NetworkError::DbusError(error).operator_message()
}

fn string_value(value: &OwnedValue) -> Option<String> {
    match &**value {
        Value::Str(text) => Some(text.to_string()),
        _ => None,
    }
}
