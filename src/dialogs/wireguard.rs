use super::{
    ConnectionForm, KeyPair,
    peers::{PeerField, PeerList},
    with_identity,
};
use crate::{
    Result,
    settings::{CONNECTION, ConnectionSection, Settings, WIREGUARD, WireguardSection},
};

/// Edits accepted by [`WireguardForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireguardMessage {
    /// Interface name field changed
    NameChanged(String),
    /// Private key field changed
    PrivateKeyChanged(String),
    /// A generated key pair arrived
    KeysGenerated(KeyPair),
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

impl From<KeyPair> for WireguardMessage {
    fn from(pair: KeyPair) -> Self {
        WireguardMessage::KeysGenerated(pair)
    }
}

/// Form state of the wireguard tunnel dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct WireguardForm {
    /// Interface name; also becomes the profile name.
    pub iface_name: String,
    /// Tunnel private key.
    pub private_key: String,
    /// Public key of the last generated pair. Display only, never saved.
    pub public_key: String,
    /// Peer rows.
    pub peers: PeerList,
}

impl ConnectionForm for WireguardForm {
    type Message = WireguardMessage;

    const TITLE: &'static str = "Wireguard settings";
    const ID_PREFIX: &'static str = "network-vpn-settings";

    fn from_settings(settings: &Settings, _parent_choices: &[String]) -> Result<Self> {
        let connection: ConnectionSection = settings.typed(CONNECTION)?;
        let tunnel: WireguardSection = settings.typed(WIREGUARD)?;

        Ok(Self {
            iface_name: connection.interface_name,
            private_key: tunnel.private_key,
            public_key: String::new(),
            peers: PeerList::new(tunnel.peers),
        })
    }

    fn update(&self, message: WireguardMessage) -> Self {
        let mut next = self.clone();
        match message {
            WireguardMessage::NameChanged(name) => next.iface_name = name,
            WireguardMessage::PrivateKeyChanged(key) => next.private_key = key,
            // Last writer wins, even over a manual edit made meanwhile.
            WireguardMessage::KeysGenerated(pair) => {
                next.private_key = pair.private_key;
                next.public_key = pair.public_key;
            }
            WireguardMessage::PeerAdded => next.peers = self.peers.add(),
            WireguardMessage::PeerEdited {
                index,
                field,
                value,
            } => next.peers = self.peers.update(index, field, value),
            WireguardMessage::PeerRemoved(index) => next.peers = self.peers.remove(index),
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
