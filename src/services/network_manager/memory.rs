use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    NetworkError,
    model::{ApplyRequest, ConnectionRef, Iface, NetworkModel},
};
use crate::settings::{CONNECTION, Settings};

/// In-process [`NetworkModel`] with a fixed interface list.
///
/// Records every accepted [`ApplyRequest`] and can be told to reject the next
/// submissions. Used by tests and by CLI dry runs.
#[derive(Debug, Default)]
pub struct StaticNetworkModel {
    interfaces: Vec<Iface>,
    profiles: HashMap<String, Settings>,
    applied: Mutex<Vec<ApplyRequest>>,
    failures: Mutex<VecDeque<String>>,
}

impl StaticNetworkModel {
    /// Model exposing `interfaces` in the given order.
    pub fn new(interfaces: Vec<Iface>) -> Self {
        Self {
            interfaces,
            ..Self::default()
        }
    }

    /// Builder: stores a saved profile, keyed by its `connection.uuid`.
    pub fn with_profile(mut self, settings: Settings) -> Self {
        let uuid = settings
            .section(CONNECTION)
            .and_then(|section| section.get("uuid"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();
        self.profiles.insert(uuid, settings);
        self
    }

    /// Queues a rejection for the next `apply_settings` call.
    pub async fn fail_next(&self, reason: impl Into<String>) {
        self.failures.lock().await.push_back(reason.into());
    }

    /// Requests accepted so far, oldest first.
    pub async fn applied(&self) -> Vec<ApplyRequest> {
        self.applied.lock().await.clone()
    }
}

#[async_trait]
impl NetworkModel for StaticNetworkModel {
    async fn list_interfaces(&self) -> Result<Vec<Iface>, NetworkError> {
        Ok(self.interfaces.clone())
    }

    async fn load_settings(
        &self,
        connection: &ConnectionRef,
        _secret_sections: &[&str],
    ) -> Result<Settings, NetworkError> {
        self.profiles
            .get(&connection.uuid)
            .cloned()
            .ok_or_else(|| NetworkError::ConnectionNotFound(connection.uuid.clone()))
    }

    async fn apply_settings(&self, request: ApplyRequest) -> Result<(), NetworkError> {
        if let Some(reason) = self.failures.lock().await.pop_front() {
            return Err(NetworkError::OperationFailed {
                operation: "apply_settings",
                reason,
            });
        }

        self.applied.lock().await.push(request);
        Ok(())
    }
}
