/// NetworkManager connection settings service
pub mod network_manager;
