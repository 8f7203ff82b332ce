//! netdialogs - headless settings dialogs for VPN and PPPoE connections.
//!
//! Each dialog edits one kind of NetworkManager connection profile:
//!
//! - a wireguard tunnel (offered as both the "OpenVPN" and the VPN dialog)
//! - a PPPoE link over a parent interface
//!
//! A dialog is opened on a settings profile, edited through messages, and
//! submitted to a [`services::network_manager::NetworkModel`]. Only the
//! fields the dialog shows are touched; every other section and key of the
//! profile is carried through unchanged.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use netdialogs::{
//!     dialogs::{Dialog, WireguardForm, WireguardMessage},
//!     services::network_manager::NmNetworkModel,
//!     settings::wireguard_settings,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let model = NmNetworkModel::connect().await?;
//! let mut dialog = Dialog::<WireguardForm>::open(wireguard_settings("wg0"), None, None, vec![])?;
//! dialog.send(WireguardMessage::PeerAdded);
//!
//! let outcome = dialog.submit(&model).await;
//! println!("saved: {}", outcome.closed);
//! # Ok(())
//! # }
//! ```

/// Command-line interface driving the dialogs.
pub mod cli;

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Connection settings dialogs.
pub mod dialogs;

/// Network configuration service integration.
pub mod services;

/// Connection settings profiles.
pub mod settings;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{NetDialogsError, Result};
