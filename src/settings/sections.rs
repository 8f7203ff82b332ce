use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `connection` section shared by every profile type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSection {
    /// Human-visible profile name. Dialogs keep it equal to `interface_name`.
    pub id: String,

    /// Profile type tag, e.g. `wireguard` or `pppoe`.
    #[serde(rename = "type")]
    pub connection_type: String,

    /// Kernel interface name the profile binds to.
    pub interface_name: String,

    /// Whether the profile activates on its own when possible.
    pub autoconnect: bool,

    /// RFC 4122 identifier of the profile.
    pub uuid: String,
}

/// The two `connection` keys a dialog rewrites on submit.
///
/// Both carry the edited interface name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionIdentity {
    /// Profile name
    pub id: String,
    /// Interface name
    pub interface_name: String,
}

impl ConnectionIdentity {
    /// Identity where the profile name follows the interface name.
    pub fn named(interface_name: &str) -> Self {
        Self {
            id: interface_name.to_string(),
            interface_name: interface_name.to_string(),
        }
    }
}

/// One remote endpoint of a tunnel.
///
/// Peers have no identity of their own; they are addressed by position.
/// Keys the dialogs do not edit (preshared keys, keepalive, ...) are kept
/// in `extra` so they survive an edit of the visible fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Peer {
    /// Base64 public key of the remote side.
    #[serde(default)]
    pub public_key: String,

    /// `IP-OR-HOST:PORT` of the remote side.
    #[serde(default)]
    pub endpoint: String,

    /// Comma separated CIDR ranges routed through this peer.
    #[serde(default)]
    pub allowed_ips: String,

    /// Peer keys not edited by the dialogs.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Peer {
    /// A peer with every field empty, as appended by the peer list editor.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The `wireguard` section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireguardSection {
    /// Ordered peer list.
    pub peers: Vec<Peer>,

    /// Local private key.
    pub private_key: String,
}

/// The `ppp` section counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PppSection {
    /// Unanswered LCP echo requests before the link is considered dead.
    pub lcp_echo_failure: u32,

    /// Seconds between LCP echo requests.
    pub lcp_echo_interval: u32,
}

impl Default for PppSection {
    fn default() -> Self {
        Self {
            lcp_echo_failure: 5,
            lcp_echo_interval: 30,
        }
    }
}

/// The `pppoe` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PppoeSection {
    /// Account name.
    pub username: String,

    /// Account password.
    pub password: String,

    /// Underlying interface the PPPoE session runs over.
    pub parent: String,

    /// Access concentrator service name; empty means any.
    pub service: String,
}
