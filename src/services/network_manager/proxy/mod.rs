//! NetworkManager D-Bus proxy definitions.
//!
//! Only the calls and properties the dialogs need are declared.

#![allow(missing_docs)]
pub mod active_connection;
pub mod devices;
pub mod manager;
pub mod settings;

pub use active_connection::ConnectionActiveProxy;
pub use devices::DeviceProxy;
pub use manager::NetworkManagerProxy;
pub use settings::{SettingsProxy, connection::SettingsConnectionProxy};
