//! NetworkManager device types.

use std::fmt;

/// NMDeviceType values indicate the type of hardware represented by a device object.
///
/// Only the kinds the dialogs distinguish are named; every other value is
/// carried as [`NMDeviceType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NMDeviceType {
    /// unknown device
    Unknown,
    /// a wired ethernet device
    Ethernet,
    /// an 802.11 Wi-Fi device
    Wifi,
    /// a bond master interface
    Bond,
    /// an 802.1Q VLAN interface
    Vlan,
    /// a bridge master interface
    Bridge,
    /// a team master interface
    Team,
    /// a PPP interface
    Ppp,
    /// a WireGuard interface
    Wireguard,
    /// the loopback interface. Since: 1.42.
    Loopback,
    /// any other device type, by its raw value
    Other(u32),
}

impl NMDeviceType {
    /// Maps the raw `DeviceType` property value.
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Ethernet,
            2 => Self::Wifi,
            10 => Self::Bond,
            11 => Self::Vlan,
            13 => Self::Bridge,
            15 => Self::Team,
            23 => Self::Ppp,
            29 => Self::Wireguard,
            32 => Self::Loopback,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for NMDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Ethernet => write!(f, "ethernet"),
            Self::Wifi => write!(f, "wifi"),
            Self::Bond => write!(f, "bond"),
            Self::Vlan => write!(f, "vlan"),
            Self::Bridge => write!(f, "bridge"),
            Self::Team => write!(f, "team"),
            Self::Ppp => write!(f, "ppp"),
            Self::Wireguard => write!(f, "wireguard"),
            Self::Loopback => write!(f, "loopback"),
            Self::Other(value) => write!(f, "type-{value}"),
        }
    }
}
