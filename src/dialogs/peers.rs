//! Ordered, positionally addressed peer list editing.

use std::fmt;

use crate::settings::Peer;

/// One editable column of a peer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerField {
    /// The peer's public key
    PublicKey,
    /// The peer's `host:port` endpoint
    Endpoint,
    /// The peer's allowed IP ranges
    AllowedIps,
}

impl PeerField {
    /// All columns in display order.
    pub const ALL: [PeerField; 3] = [
        PeerField::PublicKey,
        PeerField::Endpoint,
        PeerField::AllowedIps,
    ];

    /// Element id fragment used for this column's input.
    pub fn id_fragment(self) -> &'static str {
        match self {
            PeerField::PublicKey => "publicKey",
            PeerField::Endpoint => "endpoint",
            PeerField::AllowedIps => "allowedIps",
        }
    }

    /// Field label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            PeerField::PublicKey => "Peer",
            PeerField::Endpoint => "Endpoint",
            PeerField::AllowedIps => "Allowed Ips",
        }
    }

    /// Reads this column from a peer.
    pub fn get(self, peer: &Peer) -> &str {
        match self {
            PeerField::PublicKey => &peer.public_key,
            PeerField::Endpoint => &peer.endpoint,
            PeerField::AllowedIps => &peer.allowed_ips,
        }
    }

    fn set(self, peer: &mut Peer, value: String) {
        match self {
            PeerField::PublicKey => peer.public_key = value,
            PeerField::Endpoint => peer.endpoint = value,
            PeerField::AllowedIps => peer.allowed_ips = value,
        }
    }
}

impl fmt::Display for PeerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerField::PublicKey => write!(f, "public_key"),
            PeerField::Endpoint => write!(f, "endpoint"),
            PeerField::AllowedIps => write!(f, "allowed_ips"),
        }
    }
}

impl TryFrom<&str> for PeerField {
    type Error = String;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "public_key" | "publicKey" => Ok(PeerField::PublicKey),
            "endpoint" => Ok(PeerField::Endpoint),
            "allowed_ips" | "allowedIps" => Ok(PeerField::AllowedIps),
            other => Err(format!("unknown peer field '{other}'")),
        }
    }
}

/// Immutable peer sequence.
///
/// Every edit yields a new list; earlier snapshots stay valid. Peers are
/// identified by index only, so removing a row shifts the identity of every
/// row after it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeerList {
    peers: Vec<Peer>,
}

impl PeerList {
    /// Wraps an existing sequence, keeping its order.
    pub fn new(peers: Vec<Peer>) -> Self {
        Self { peers }
    }

    /// Appends an all-empty peer.
    pub fn add(&self) -> Self {
        let mut peers = self.peers.clone();
        peers.push(Peer::empty());
        Self { peers }
    }

    /// Replaces one field of the peer at `index`.
    ///
    /// An out-of-range index leaves the list as it was.
    pub fn update(&self, index: usize, field: PeerField, value: impl Into<String>) -> Self {
        if index >= self.peers.len() {
            tracing::debug!(index, len = self.peers.len(), "ignoring peer update out of range");
            return self.clone();
        }

        let mut peers = self.peers.clone();
        field.set(&mut peers[index], value.into());
        Self { peers }
    }

    /// Drops the peer at `index`, keeping the relative order of the rest.
    ///
    /// An out-of-range index leaves the list as it was.
    pub fn remove(&self, index: usize) -> Self {
        let peers = self
            .peers
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, peer)| peer.clone())
            .collect();
        Self { peers }
    }

    /// Peer at `index`.
    pub fn get(&self, index: usize) -> Option<&Peer> {
        self.peers.get(index)
    }

    /// Number of peers.
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Whether the list has no peers.
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Peers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.iter()
    }

    /// Borrowed view of the sequence.
    pub fn as_slice(&self) -> &[Peer] {
        &self.peers
    }

    /// Element id of the input for `field` on row `index`.
    pub fn field_id(id_prefix: &str, field: PeerField, index: usize) -> String {
        format!("{id_prefix}-{}-{index}", field.id_fragment())
    }

    /// Element id of the add control.
    pub fn add_id(id_prefix: &str) -> String {
        format!("{id_prefix}-peer-add")
    }
}

impl From<PeerList> for Vec<Peer> {
    fn from(list: PeerList) -> Self {
        list.peers
    }
}
