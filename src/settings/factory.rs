use serde_json::Value;
use uuid::Uuid;

use super::{CONNECTION, PPP, PPPOE, PppSection, Section, Settings, WIREGUARD};

const WIREGUARD_TYPE: &str = "wireguard";
const PPPOE_TYPE: &str = "pppoe";

fn connection_section(connection_type: &str, new_iface_name: &str) -> Section {
    let mut section = Section::new();
    section.insert("id".into(), Value::from(""));
    section.insert("type".into(), Value::from(connection_type));
    section.insert("interface_name".into(), Value::from(new_iface_name));
    section.insert("autoconnect".into(), Value::from(true));
    section.insert("uuid".into(), Value::from(Uuid::new_v4().to_string()));
    section
}

fn empty_tunnel_section() -> Section {
    let mut section = Section::new();
    section.insert("peers".into(), Value::Array(Vec::new()));
    section.insert("private_key".into(), Value::from(""));
    section
}

/// Defaults for a new profile created from the OpenVPN dialog.
///
/// That dialog edits a wireguard tunnel, so the profile is typed `wireguard`.
pub fn openvpn_settings(new_iface_name: &str) -> Settings {
    wireguard_settings(new_iface_name)
}

/// Defaults for a new wireguard tunnel named `new_iface_name`.
///
/// Every call draws a fresh connection UUID.
pub fn wireguard_settings(new_iface_name: &str) -> Settings {
    Settings::new()
        .with_section(CONNECTION, connection_section(WIREGUARD_TYPE, new_iface_name))
        .with_section(WIREGUARD, empty_tunnel_section())
}

/// Defaults for a new PPPoE link named `new_iface_name`.
pub fn pppoe_settings(new_iface_name: &str) -> Settings {
    pppoe_settings_with(new_iface_name, PppSection::default())
}

/// PPPoE defaults with the LCP echo counters taken from `ppp`.
pub fn pppoe_settings_with(new_iface_name: &str, ppp: PppSection) -> Settings {
    let mut ppp_section = Section::new();
    ppp_section.insert("lcp_echo_failure".into(), Value::from(ppp.lcp_echo_failure));
    ppp_section.insert("lcp_echo_interval".into(), Value::from(ppp.lcp_echo_interval));

    let mut pppoe_section = Section::new();
    for key in ["password", "username", "parent", "service"] {
        pppoe_section.insert(key.into(), Value::from(""));
    }

    Settings::new()
        .with_section(CONNECTION, connection_section(PPPOE_TYPE, new_iface_name))
        .with_section(PPP, ppp_section)
        .with_section(PPPOE, pppoe_section)
}
