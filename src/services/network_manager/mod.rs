/// Conversion between settings profiles and NetworkManager maps
pub mod convert;
/// Network service errors
mod error;
/// In-memory network model
mod memory;
/// Abstract network model the dialogs depend on
mod model;
/// D-Bus proxy implementations for NetworkManager interfaces.
mod proxy;
/// NetworkManager-backed network model.
mod service;
/// Type definitions for NetworkManager enums.
mod types;

pub use error::NetworkError;
pub use memory::StaticNetworkModel;
pub use model::{ApplyRequest, ConnectionRef, DeviceRef, Iface, NetworkModel};
pub use proxy::*;
pub use service::NmNetworkModel;
pub use types::*;
