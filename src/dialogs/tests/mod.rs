use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::{Notify, mpsc};

use super::*;
use crate::{
    NetDialogsError,
    services::network_manager::{Iface, NMDeviceType, NetworkError, StaticNetworkModel},
    settings::{ConnectionSection, PPP, Section, WireguardSection, pppoe_settings},
};

fn ipv4_section() -> Section {
    match json!({ "method": "manual", "addresses": ["10.0.0.2/24"] }) {
        Value::Object(map) => map,
        _ => Section::new(),
    }
}

fn tunnel_with_ipv4() -> Settings {
    wireguard_settings("wg0").with_section("ipv4", ipv4_section())
}

#[test]
fn tunnel_factory_opens_on_interface_name() {
    let settings = wireguard_settings("wg0");
    let connection: ConnectionSection = settings.typed(CONNECTION).unwrap();
    let tunnel: WireguardSection = settings.typed(WIREGUARD).unwrap();

    assert_eq!(connection.connection_type, "wireguard");
    assert_eq!(connection.interface_name, "wg0");
    assert!(connection.autoconnect);
    assert!(tunnel.peers.is_empty());
    assert_eq!(tunnel.private_key, "");

    let dialog = Dialog::<WireguardForm>::open(settings, None, None, Vec::new()).unwrap();
    assert_eq!(dialog.form().iface_name, "wg0");
    assert_eq!(dialog.title(), "Wireguard settings");
    assert_eq!(dialog.id_prefix(), "network-vpn-settings");
}

#[test]
fn merge_is_pure_and_repeatable() {
    let settings = tunnel_with_ipv4();
    let snapshot = settings.clone();
    let mut dialog = Dialog::<OpenVpnForm>::open(settings, None, None, Vec::new()).unwrap();
    dialog.send(OpenVpnMessage::PeerAdded);
    dialog.send(OpenVpnMessage::NameChanged("wg7".into()));

    let first = dialog.merged().unwrap();
    let second = dialog.merged().unwrap();

    assert_eq!(first, second);
    assert_eq!(dialog.settings(), &snapshot);
    assert_ne!(first, snapshot);
}

#[test]
fn untouched_sections_pass_through() {
    let settings = tunnel_with_ipv4();
    let mut dialog = Dialog::<WireguardForm>::open(settings, None, None, Vec::new()).unwrap();
    dialog.send(WireguardMessage::PrivateKeyChanged("k".into()));

    let merged = dialog.merged().unwrap();

    assert_eq!(merged.section("ipv4"), Some(&ipv4_section()));
    let connection: ConnectionSection = merged.typed(CONNECTION).unwrap();
    assert_eq!(connection.id, "wg0");
    assert_eq!(connection.interface_name, "wg0");
}

#[test]
fn pppoe_edits_leave_other_sections_alone() {
    let settings = pppoe_settings("ppp0").with_section("ipv4", ipv4_section());
    let mut dialog = Dialog::<PppoeForm>::open(settings, None, None, Vec::new()).unwrap();
    dialog.send(PppoeMessage::UsernameChanged("alice".into()));
    dialog.send(PppoeMessage::LcpEchoFailureChanged("9".into()));

    let merged = dialog.merged().unwrap();

    assert_eq!(merged.section("ipv4"), Some(&ipv4_section()));
    assert_eq!(merged.section(PPPOE).unwrap()["username"], json!("alice"));
    assert_eq!(merged.section(PPP).unwrap()["lcp_echo_failure"], json!(9));
}

#[tokio::test]
async fn parent_choices_follow_the_current_interfaces() {
    let model = StaticNetworkModel::new(vec![
        Iface::new("eth0", NMDeviceType::Ethernet),
        Iface::new("lo", NMDeviceType::Loopback),
        Iface::new("eth2", NMDeviceType::Ethernet),
    ]);
    let mut dialog =
        Dialog::<PppoeForm>::open(pppoe_settings("ppp0"), None, None, vec!["eth9".into()])
            .unwrap();
    assert_eq!(dialog.form().parent, "eth9");

    let choices = dialog.refresh_parent_choices(&model).await.unwrap().to_vec();

    assert_eq!(choices, ["eth0", "eth2"]);
    assert_eq!(dialog.parent_choices(), ["eth0", "eth2"]);
    assert_eq!(dialog.form().parent, "eth9");
}

#[test]
fn unknown_keys_in_edited_sections_survive() {
    let settings = wireguard_settings("wg0").overlaid(
        WIREGUARD,
        Section::from_iter([("listen_port".to_string(), Value::from(51820))]),
    );
    let dialog = Dialog::<WireguardForm>::open(settings, None, None, Vec::new()).unwrap();

    let merged = dialog.merged().unwrap();

    assert_eq!(merged.section(WIREGUARD).unwrap()["listen_port"], Value::from(51820));
}

#[test]
fn malformed_settings_fail_to_open() {
    let missing = Settings::new().with_section(CONNECTION, Section::new());
    let err = Dialog::<WireguardForm>::open(missing, None, None, Vec::new()).unwrap_err();
    assert!(matches!(err, NetDialogsError::MissingSection { .. }));

    let wrong_shape = wireguard_settings("wg0").overlaid(
        WIREGUARD,
        Section::from_iter([("peers".to_string(), Value::from("not a list"))]),
    );
    let err = Dialog::<WireguardForm>::open(wrong_shape, None, None, Vec::new()).unwrap_err();
    assert!(matches!(err, NetDialogsError::InvalidSection { .. }));
}

#[tokio::test]
async fn failed_submit_keeps_dialog_open_then_succeeds() {
    let model = StaticNetworkModel::default();
    model.fail_next("connection refused").await;
    let mut dialog =
        Dialog::<WireguardForm>::open(wireguard_settings("wg0"), None, None, Vec::new()).unwrap();

    let outcome = dialog.submit(&model).await;

    assert!(outcome.prevent_default);
    assert!(!outcome.closed);
    assert!(dialog.is_open());
    assert_eq!(dialog.error(), Some("connection refused"));

    let outcome = dialog.submit(&model).await;

    assert!(outcome.prevent_default);
    assert!(outcome.closed);
    assert!(!dialog.is_open());
    assert_eq!(dialog.error(), None);
}

#[tokio::test]
async fn resubmit_sends_identical_settings() {
    let model = StaticNetworkModel::default();
    model.fail_next("busy").await;
    let connection = ConnectionRef::new("c-1");
    let mut dialog = Dialog::<PppoeForm>::open(
        pppoe_settings("ppp0"),
        Some(connection.clone()),
        None,
        vec!["eth0".into()],
    )
    .unwrap();
    dialog.send(PppoeMessage::UsernameChanged("alice".into()));
    let expected = dialog.merged().unwrap();

    dialog.submit(&model).await;
    dialog.submit(&model).await;

    let applied = model.applied().await;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].settings, expected);
    assert_eq!(applied[0].connection, Some(connection));
}

#[tokio::test]
async fn open_with_uses_model_interfaces() {
    let model = StaticNetworkModel::new(vec![
        Iface::new("lo", NMDeviceType::Loopback),
        Iface::new("eth0", NMDeviceType::Ethernet),
    ]);

    let dialog = Dialog::<PppoeForm>::open_with(&model, pppoe_settings("ppp0"), None, None)
        .await
        .unwrap();

    assert_eq!(dialog.parent_choices(), ["eth0"]);
    assert_eq!(dialog.form().parent, "eth0");
    assert!(dialog.settings().has_section(PPP));
}

struct Gated {
    gate: Arc<Notify>,
}

#[async_trait]
impl KeyGenerator for Gated {
    async fn generate_key_pair(&self) -> std::result::Result<KeyPair, NetworkError> {
        self.gate.notified().await;
        Ok(KeyPair {
            public_key: "generated-pub".into(),
            private_key: "generated-priv".into(),
        })
    }
}

#[tokio::test]
async fn late_key_generation_overwrites_manual_edit() {
    let gate = Arc::new(Notify::new());
    let (tx, mut rx) = mpsc::unbounded_channel::<WireguardMessage>();
    let mut dialog =
        Dialog::<WireguardForm>::open(wireguard_settings("wg0"), None, None, Vec::new()).unwrap();

    let task = spawn_key_generation(Arc::new(Gated { gate: gate.clone() }), tx);
    dialog.send(WireguardMessage::PrivateKeyChanged("typed-by-hand".into()));
    gate.notify_one();

    let message = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    dialog.send(message);
    task.await.unwrap();

    assert_eq!(dialog.form().private_key, "generated-priv");
    assert_eq!(dialog.form().public_key, "generated-pub");
}

#[test]
fn variants_parse_and_build_defaults() {
    let variant: DialogVariant = "PPPoE".parse().unwrap();
    assert_eq!(variant, DialogVariant::Pppoe);
    assert!("l2tp".parse::<DialogVariant>().is_err());

    let settings = variant.default_settings(
        "ppp0",
        PppSection {
            lcp_echo_failure: 3,
            lcp_echo_interval: 10,
        },
    );
    let ppp: PppSection = settings.typed(PPP).unwrap();
    assert_eq!(ppp.lcp_echo_failure, 3);
    assert_eq!(DialogVariant::OpenVpn.title(), "Wireguard settings");
    assert_eq!(DialogVariant::Wireguard.secret_section(), WIREGUARD);
}
