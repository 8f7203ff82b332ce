use super::{
    ConnectionForm,
    peers::{PeerField, PeerList},
    with_identity,
};
use crate::{
    Result,
    settings::{CONNECTION, ConnectionSection, Settings, WIREGUARD, WireguardSection},
};

/// Edits accepted by [`OpenVpnForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenVpnMessage {
    /// Interface name field changed
    NameChanged(String),
    /// Private key field changed
    PrivateKeyChanged(String),
    /// Add-peer control pressed
    PeerAdded,
    /// One peer field changed
    PeerEdited {
        /// Row index
        index: usize,
        /// Edited column
        field: PeerField,
        /// New text
        value: String,
    },
    /// Remove control of a row pressed
    PeerRemoved(usize),
}

/// Form state of the tunnel dialog opened from the OpenVPN entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenVpnForm {
    /// Interface name; also becomes the profile name.
    pub iface_name: String,
    /// Tunnel private key.
    pub private_key: String,
    /// Peer rows.
    pub peers: PeerList,
}

impl ConnectionForm for OpenVpnForm {
    type Message = OpenVpnMessage;

    const TITLE: &'static str = "Wireguard settings";
    const ID_PREFIX: &'static str = "network-openvpn-settings";

    fn from_settings(settings: &Settings, _parent_choices: &[String]) -> Result<Self> {
        let connection: ConnectionSection = settings.typed(CONNECTION)?;
        let tunnel: WireguardSection = settings.typed(WIREGUARD)?;

        Ok(Self {
            iface_name: connection.interface_name,
            private_key: tunnel.private_key,
            peers: PeerList::new(tunnel.peers),
        })
    }

    fn update(&self, message: OpenVpnMessage) -> Self {
        let mut next = self.clone();
        match message {
            OpenVpnMessage::NameChanged(name) => next.iface_name = name,
            OpenVpnMessage::PrivateKeyChanged(key) => next.private_key = key,
            OpenVpnMessage::PeerAdded => next.peers = self.peers.add(),
            OpenVpnMessage::PeerEdited {
                index,
                field,
                value,
            } => next.peers = self.peers.update(index, field, value),
            OpenVpnMessage::PeerRemoved(index) => next.peers = self.peers.remove(index),
        }
        next
    }

    fn merge_into(&self, settings: &Settings) -> Result<Settings> {
        let edits = WireguardSection {
            peers: self.peers.as_slice().to_vec(),
            private_key: self.private_key.clone(),
        };

        with_identity(settings, &self.iface_name)?.overlaid_with(WIREGUARD, &edits)
    }

    fn interface_name(&self) -> &str {
        &self.iface_name
    }
}
