/// `config` commands
pub mod config;
/// `connection` commands
pub mod connection;
/// `interfaces` commands
pub mod interfaces;
/// `keys` commands
pub mod keys;
