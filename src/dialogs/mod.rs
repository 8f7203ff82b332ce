//! Headless connection settings dialogs.
//!
//! Each dialog variant is a [`ConnectionForm`]: a plain state value, a
//! message type describing one field edit, and a pure `update`. A
//! [`Dialog`] wraps a form with the profile it was opened on and drives the
//! submit flow against a [`NetworkModel`].
//!
//! Nothing reaches the profile until submit. Submitting merges the form
//! into a copy of the original profile, so a rejected submit can simply be
//! retried.

/// Single-open expand/collapse panels
pub mod panels;
/// Peer list editing
pub mod peers;

mod keygen;
mod openvpn;
mod parent;
mod pppoe;
mod wireguard;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

use tracing::{debug, info, instrument, warn};

pub use keygen::{
    DEFAULT_WG_BINARY, KeyGenerator, KeyPair, WgKeyGenerator, parse_key_output,
    spawn_key_generation,
};
pub use openvpn::{OpenVpnForm, OpenVpnMessage};
pub use parent::{load_parent_choices, parent_choices};
pub use pppoe::{ADVANCED_PANEL, PppoeForm, PppoeMessage};
pub use wireguard::{WireguardForm, WireguardMessage};

use crate::{
    NetDialogsError, Result,
    services::network_manager::{ApplyRequest, ConnectionRef, DeviceRef, NetworkModel},
    settings::{
        CONNECTION, ConnectionIdentity, PPPOE, PppSection, Settings, WIREGUARD, openvpn_settings,
        pppoe_settings_with, wireguard_settings,
    },
};

/// The editable projection of a profile behind one dialog variant.
pub trait ConnectionForm: Sized {
    /// One field edit.
    type Message: fmt::Debug;

    /// Dialog title.
    const TITLE: &'static str;

    /// Prefix of every element id in the dialog.
    const ID_PREFIX: &'static str;

    /// Projects the fields this variant edits out of `settings`.
    ///
    /// # Errors
    /// Returns `NetDialogsError::MissingSection` or
    /// `NetDialogsError::InvalidSection` when a required section is absent
    /// or malformed.
    fn from_settings(settings: &Settings, parent_choices: &[String]) -> Result<Self>;

    /// Applies one edit, returning the next state.
    fn update(&self, message: Self::Message) -> Self;

    /// Builds the profile to submit from `settings` and this state.
    ///
    /// `settings` is left untouched.
    ///
    /// # Errors
    /// Returns `NetDialogsError::InvalidSection` if an edited section cannot
    /// be encoded.
    fn merge_into(&self, settings: &Settings) -> Result<Settings>;

    /// Interface name currently entered.
    fn interface_name(&self) -> &str;
}

/// Rewrites the profile name and interface name to `iface_name`.
pub(crate) fn with_identity(settings: &Settings, iface_name: &str) -> Result<Settings> {
    settings.overlaid_with(CONNECTION, &ConnectionIdentity::named(iface_name))
}

/// Result of [`Dialog::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the host form's own submit navigation must be suppressed.
    /// Always true.
    pub prevent_default: bool,
    /// Whether the dialog closed because the profile was saved.
    pub closed: bool,
}

/// One open settings dialog.
#[derive(Debug, Clone)]
pub struct Dialog<F: ConnectionForm> {
    settings: Settings,
    form: F,
    connection: Option<ConnectionRef>,
    device: Option<DeviceRef>,
    parent_choices: Vec<String>,
    error: Option<String>,
    open: bool,
}

impl<F: ConnectionForm> Dialog<F> {
    /// Opens a dialog on `settings` with precomputed parent choices.
    ///
    /// # Errors
    /// Fails when `settings` lacks a section the variant needs or has one in
    /// the wrong shape.
    pub fn open(
        settings: Settings,
        connection: Option<ConnectionRef>,
        device: Option<DeviceRef>,
        parent_choices: Vec<String>,
    ) -> Result<Self> {
        let form = F::from_settings(&settings, &parent_choices)?;
        debug!(dialog = F::ID_PREFIX, existing = connection.is_some(), "dialog opened");

        Ok(Self {
            settings,
            form,
            connection,
            device,
            parent_choices,
            error: None,
            open: true,
        })
    }

    /// Opens a dialog, deriving parent choices from `model`.
    ///
    /// # Errors
    /// Fails when the interfaces cannot be listed or `settings` is malformed.
    pub async fn open_with(
        model: &dyn NetworkModel,
        settings: Settings,
        connection: Option<ConnectionRef>,
        device: Option<DeviceRef>,
    ) -> Result<Self> {
        let choices = load_parent_choices(model, connection.as_ref()).await?;
        Self::open(settings, connection, device, choices)
    }

    /// Handles one field edit.
    pub fn send(&mut self, message: F::Message) {
        debug!(dialog = F::ID_PREFIX, ?message, "form edit");
        self.form = self.form.update(message);
    }

    /// Current form state.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// The profile the dialog was opened on.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parent interface candidates from the latest listing.
    ///
    /// Interfaces come and go while a dialog is open; front ends call
    /// [`Dialog::refresh_parent_choices`] before each render.
    pub fn parent_choices(&self) -> &[String] {
        &self.parent_choices
    }

    /// Re-enumerates interfaces and replaces the parent choices.
    ///
    /// The selected parent is left alone even if it disappeared.
    ///
    /// # Errors
    /// Fails when the interfaces cannot be listed.
    pub async fn refresh_parent_choices(&mut self, model: &dyn NetworkModel) -> Result<&[String]> {
        self.parent_choices = load_parent_choices(model, self.connection.as_ref()).await?;
        Ok(&self.parent_choices)
    }

    /// Error banner text from the last failed submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the dialog is still shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        F::TITLE
    }

    /// Element id prefix.
    pub fn id_prefix(&self) -> &'static str {
        F::ID_PREFIX
    }

    /// The profile a submit would send right now.
    ///
    /// # Errors
    /// See [`ConnectionForm::merge_into`].
    pub fn merged(&self) -> Result<Settings> {
        self.form.merge_into(&self.settings)
    }

    /// Closes without saving.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Merges the form and hands the profile to `model`.
    ///
    /// On success the banner clears and the dialog closes. On failure the
    /// banner shows the service's message as given and the dialog stays open
    /// with the form untouched, ready for another attempt.
    #[instrument(skip_all, fields(dialog = F::ID_PREFIX))]
    pub async fn submit(&mut self, model: &dyn NetworkModel) -> SubmitOutcome {
        match self.try_submit(model).await {
            Ok(()) => {
                info!(interface = %self.form.interface_name(), "settings applied");
                self.error = None;
                self.open = false;
            }
            Err(e) => {
                warn!(error = %e, "settings rejected");
                self.error = Some(match e {
                    NetDialogsError::Network(network) => network.operator_message(),
                    other => other.to_string(),
                });
            }
        }

        SubmitOutcome {
            prevent_default: true,
            closed: !self.open,
        }
    }

    async fn try_submit(&self, model: &dyn NetworkModel) -> Result<()> {
        let request = ApplyRequest {
            connection: self.connection.clone(),
            device: self.device.clone(),
            settings: self.merged()?,
        };

        model.apply_settings(request).await?;
        Ok(())
    }
}

/// The three dialog variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogVariant {
    /// Tunnel dialog reached from the OpenVPN entry
    OpenVpn,
    /// Wireguard tunnel dialog
    Wireguard,
    /// PPP over Ethernet dialog
    Pppoe,
}

impl DialogVariant {
    /// Every variant.
    pub const ALL: [DialogVariant; 3] = [
        DialogVariant::OpenVpn,
        DialogVariant::Wireguard,
        DialogVariant::Pppoe,
    ];

    /// Command line name.
    pub fn name(self) -> &'static str {
        match self {
            DialogVariant::OpenVpn => "openvpn",
            DialogVariant::Wireguard => "wireguard",
            DialogVariant::Pppoe => "pppoe",
        }
    }

    /// Dialog title.
    pub fn title(self) -> &'static str {
        match self {
            DialogVariant::OpenVpn => OpenVpnForm::TITLE,
            DialogVariant::Wireguard => WireguardForm::TITLE,
            DialogVariant::Pppoe => PppoeForm::TITLE,
        }
    }

    /// Section holding this variant's secrets.
    pub fn secret_section(self) -> &'static str {
        match self {
            DialogVariant::OpenVpn | DialogVariant::Wireguard => WIREGUARD,
            DialogVariant::Pppoe => PPPOE,
        }
    }

    /// Default profile for a new connection on `iface_name`.
    pub fn default_settings(self, iface_name: &str, ppp: PppSection) -> Settings {
        match self {
            DialogVariant::OpenVpn => openvpn_settings(iface_name),
            DialogVariant::Wireguard => wireguard_settings(iface_name),
            DialogVariant::Pppoe => pppoe_settings_with(iface_name, ppp),
        }
    }
}

impl fmt::Display for DialogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DialogVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DialogVariant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown dialog '{s}', expected openvpn, wireguard or pppoe"))
    }
}
