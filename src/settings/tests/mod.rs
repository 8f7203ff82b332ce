//! Unit tests for the settings module
//! No D-Bus or filesystem dependencies.

#![allow(clippy::panic)]

use serde_json::{Value, json};

use crate::{
    NetDialogsError,
    settings::{
        CONNECTION, ConnectionIdentity, ConnectionSection, PPP, PPPOE, PppSection, PppoeSection,
        Section, Settings, WIREGUARD, WireguardSection, pppoe_settings, pppoe_settings_with,
        wireguard_settings,
    },
};

fn section(value: Value) -> Section {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn wireguard_factory_defaults() {
    let settings = wireguard_settings("wg0");

    let connection: ConnectionSection = settings.typed(CONNECTION).unwrap();
    assert_eq!(connection.connection_type, "wireguard");
    assert_eq!(connection.interface_name, "wg0");
    assert!(connection.autoconnect);
    assert!(!connection.uuid.is_empty());
    assert_eq!(connection.id, "");

    let wireguard: WireguardSection = settings.typed(WIREGUARD).unwrap();
    assert!(wireguard.peers.is_empty());
    assert_eq!(wireguard.private_key, "");
}

#[test]
fn factory_uuid_is_a_v4_uuid() {
    let settings = wireguard_settings("wg0");
    let connection: ConnectionSection = settings.typed(CONNECTION).unwrap();

    let parsed = uuid::Uuid::parse_str(&connection.uuid).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn factory_calls_never_share_a_uuid() {
    let first: ConnectionSection = wireguard_settings("wg0").typed(CONNECTION).unwrap();
    let second: ConnectionSection = wireguard_settings("wg0").typed(CONNECTION).unwrap();
    assert_ne!(first.uuid, second.uuid);

    let first: ConnectionSection = pppoe_settings("ppp0").typed(CONNECTION).unwrap();
    let second: ConnectionSection = pppoe_settings("ppp0").typed(CONNECTION).unwrap();
    assert_ne!(first.uuid, second.uuid);
}

#[test]
fn pppoe_factory_defaults() {
    let settings = pppoe_settings("ppp0");

    let connection: ConnectionSection = settings.typed(CONNECTION).unwrap();
    assert_eq!(connection.connection_type, "pppoe");
    assert_eq!(connection.interface_name, "ppp0");
    assert!(connection.autoconnect);

    let ppp: PppSection = settings.typed(PPP).unwrap();
    assert_eq!(ppp.lcp_echo_failure, 5);
    assert_eq!(ppp.lcp_echo_interval, 30);

    let pppoe: PppoeSection = settings.typed(PPPOE).unwrap();
    assert_eq!(pppoe, PppoeSection::default());
}

#[test]
fn pppoe_factory_takes_configured_counters() {
    let settings = pppoe_settings_with(
        "ppp0",
        PppSection {
            lcp_echo_failure: 3,
            lcp_echo_interval: 10,
        },
    );

    let ppp: PppSection = settings.typed(PPP).unwrap();
    assert_eq!(ppp.lcp_echo_failure, 3);
    assert_eq!(ppp.lcp_echo_interval, 10);
}

#[test]
fn typed_reports_missing_section() {
    let settings = Settings::new();

    match settings.typed::<WireguardSection>(WIREGUARD) {
        Err(NetDialogsError::MissingSection { section }) => assert_eq!(section, "wireguard"),
        other => panic!("expected MissingSection, got {other:?}"),
    }
}

#[test]
fn typed_reports_malformed_section() {
    let settings = Settings::new().with_section(WIREGUARD, section(json!({ "peers": "nope" })));

    match settings.typed::<WireguardSection>(WIREGUARD) {
        Err(NetDialogsError::InvalidSection { section, .. }) => assert_eq!(section, "wireguard"),
        other => panic!("expected InvalidSection, got {other:?}"),
    }
}

#[test]
fn typed_or_default_fills_absent_section() {
    let settings = Settings::new();
    let ppp: PppSection = settings.typed_or_default(PPP).unwrap();
    assert_eq!(ppp, PppSection::default());
}

#[test]
fn overlay_keeps_unedited_keys_and_sections() {
    let original = Settings::new()
        .with_section(
            CONNECTION,
            section(json!({ "id": "old", "interface_name": "old", "uuid": "u-1", "zone": "trusted" })),
        )
        .with_section("ipv4", section(json!({ "method": "auto" })));

    let merged = original
        .overlaid_with(CONNECTION, &ConnectionIdentity::named("wg7"))
        .unwrap();

    let connection = merged.section(CONNECTION).unwrap();
    assert_eq!(connection["id"], json!("wg7"));
    assert_eq!(connection["interface_name"], json!("wg7"));
    assert_eq!(connection["uuid"], json!("u-1"));
    assert_eq!(connection["zone"], json!("trusted"));
    assert_eq!(merged.section("ipv4"), original.section("ipv4"));

    let untouched = original.section(CONNECTION).unwrap();
    assert_eq!(untouched["id"], json!("old"));
}

#[test]
fn peers_keep_unedited_keys_through_decode_and_encode() {
    let settings = Settings::new().with_section(
        WIREGUARD,
        section(json!({
            "private_key": "k",
            "peers": [{ "public_key": "p", "endpoint": "e", "allowed_ips": "a", "persistent_keepalive": 25 }]
        })),
    );

    let wireguard: WireguardSection = settings.typed(WIREGUARD).unwrap();
    assert_eq!(wireguard.peers[0].extra["persistent_keepalive"], json!(25));

    let merged = settings.overlaid_with(WIREGUARD, &wireguard).unwrap();
    assert_eq!(merged, settings);
}

#[test]
fn json_round_trip_preserves_unknown_sections() {
    let text = r#"{
        "connection": { "id": "wg0", "type": "wireguard" },
        "ipv6": { "method": "ignore", "addr-gen-mode": 1 }
    }"#;

    let settings = Settings::from_json(text).unwrap();
    let reparsed = Settings::from_json(&settings.to_json_pretty().unwrap()).unwrap();

    assert_eq!(settings, reparsed);
    assert!(reparsed.has_section("ipv6"));
}
