//! Unit tests for CLI module
//!
//! Tests the command registry, edit parsing, formatting, and whole command
//! flows against an in-process network model.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use toml::Value;

use crate::{
    cli::{
        CliContext, CliError, CliService, CommandRegistry, Edit, formatting::format_toml_value,
        parse_edits,
    },
    config::Config,
    dialogs::{KeyGenerator, KeyPair, PppoeForm, PppoeMessage, WireguardForm, peers::PeerField},
    services::network_manager::{
        Iface, NMDeviceType, NetworkError, NetworkModel, StaticNetworkModel,
    },
    settings::{CONNECTION, PPPOE, Settings, WIREGUARD, pppoe_settings, wireguard_settings},
};

struct FixedKeys;

#[async_trait]
impl KeyGenerator for FixedKeys {
    async fn generate_key_pair(&self) -> Result<KeyPair, NetworkError> {
        Ok(KeyPair {
            public_key: "PUB".to_string(),
            private_key: "PRIV".to_string(),
        })
    }
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn uuid_of(settings: &Settings) -> String {
    settings.section(CONNECTION).unwrap()["uuid"]
        .as_str()
        .unwrap()
        .to_string()
}

fn service_with(model: Arc<StaticNetworkModel>) -> CliService {
    let context = CliContext::with_network(Config::default(), model as Arc<dyn NetworkModel>)
        .with_key_generator(Arc::new(FixedKeys));
    CliService::new(context)
}

fn ethernet_model() -> StaticNetworkModel {
    StaticNetworkModel::new(vec![
        Iface::new("lo", NMDeviceType::Loopback),
        Iface::new("eth0", NMDeviceType::Ethernet),
        Iface::new("eth1", NMDeviceType::Ethernet),
    ])
}

#[test]
fn format_toml_value_scalars() {
    assert_eq!(format_toml_value(&Value::String("wg".to_string())), "\"wg\"");
    assert_eq!(format_toml_value(&Value::Integer(-123)), "-123");
    assert_eq!(format_toml_value(&Value::Float(-2.5)), "-2.5");
    assert_eq!(format_toml_value(&Value::Boolean(true)), "true");
}

#[test]
fn format_toml_value_collections_show_size() {
    let value = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(format_toml_value(&value), "[2]");

    let mut table = toml::map::Map::new();
    table.insert("key".to_string(), Value::Integer(42));
    assert_eq!(format_toml_value(&Value::Table(table)), "{1}");
    assert_eq!(format_toml_value(&Value::Table(toml::map::Map::new())), "{0}");
}

#[test]
fn edits_parse_every_form() {
    assert_eq!("name=wg1".parse::<Edit>().unwrap(), Edit::Name("wg1".to_string()));
    assert_eq!("peer+".parse::<Edit>().unwrap(), Edit::AddPeer);
    assert_eq!("peer-2".parse::<Edit>().unwrap(), Edit::RemovePeer(2));
    assert_eq!(
        "peer.0.endpoint=host:51820".parse::<Edit>().unwrap(),
        Edit::Peer {
            index: 0,
            field: PeerField::Endpoint,
            value: "host:51820".to_string(),
        }
    );
    assert_eq!(
        "password=a=b".parse::<Edit>().unwrap(),
        Edit::Password("a=b".to_string())
    );
    assert_eq!(
        "lcp_echo_interval=".parse::<Edit>().unwrap(),
        Edit::LcpEchoInterval(String::new())
    );
}

#[test]
fn malformed_edits_are_rejected() {
    for bad in ["name", "peer-x", "peer.0=1", "peer.a.endpoint=1", "peer.0.mtu=1", "mtu=1"] {
        let result = bad.parse::<Edit>();
        assert!(
            matches!(result, Err(CliError::InvalidArgument { .. })),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn edits_outside_the_dialog_are_rejected() {
    let err = parse_edits::<PppoeForm>(&args(&["peer+"])).unwrap_err();
    assert!(err.to_string().contains("network-pppoe-settings"));

    let err = parse_edits::<WireguardForm>(&args(&["username=alice"])).unwrap_err();
    assert!(err.to_string().contains("network-vpn-settings"));

    let messages = parse_edits::<PppoeForm>(&args(&["parent=eth1", "service=isp"])).unwrap();
    assert!(matches!(&messages[0], PppoeMessage::ParentSelected(parent) if parent == "eth1"));
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn command_registry_starts_empty() {
    let context = Arc::new(CliContext::new(Config::default()));
    let registry = CommandRegistry::new(context);

    assert!(registry.list_commands().is_empty());
}

#[tokio::test]
async fn registry_lists_every_category_sorted() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let listing = service.list_all();
    let categories: Vec<&str> = listing.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(categories, ["config", "connection", "interfaces", "keys"]);

    let connection = &listing[1].1;
    assert_eq!(connection, &["create", "edit", "new", "show", "update"]);
}

#[tokio::test]
async fn unknown_command_and_bad_arity_are_reported() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let err = service.execute_command("vpn", "new", &[]).await.unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(_)));

    let err = service
        .execute_command("connection", "new", &args(&["wireguard"]))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));

    let err = service
        .execute_command("keys", "generate", &args(&["extra"]))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));
}

#[tokio::test]
async fn help_mentions_every_command() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let help = service.help(None);
    for (_, commands) in service.list_all() {
        for command in commands {
            assert!(help.contains(&command), "help is missing {command}");
        }
    }

    let keys_only = service.help(Some("keys"));
    assert!(keys_only.contains("generate"));
    assert!(!keys_only.contains("parents"));
}

#[tokio::test]
async fn new_prints_default_profile() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let output = service
        .execute_command("connection", "new", &args(&["pppoe", "ppp0"]))
        .await
        .unwrap();
    let settings = Settings::from_json(&output).unwrap();

    assert_eq!(
        settings.section(CONNECTION).unwrap()["interface_name"],
        serde_json::Value::from("ppp0")
    );
    assert!(settings.has_section(PPPOE));

    let err = service
        .execute_command("connection", "new", &args(&["l2tp", "x"]))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { .. }));
}

#[tokio::test]
async fn edit_merges_file_without_touching_the_model() {
    let model = Arc::new(StaticNetworkModel::default());
    let service = service_with(model.clone());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(wireguard_settings("wg0").to_json_pretty().unwrap().as_bytes())
        .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let output = service
        .execute_command(
            "connection",
            "edit",
            &args(&[
                "wireguard",
                &path,
                "name=wg1",
                "peer+",
                "peer.0.allowed_ips=10.0.0.0/24",
            ]),
        )
        .await
        .unwrap();
    let merged = Settings::from_json(&output).unwrap();

    assert_eq!(
        merged.section(CONNECTION).unwrap()["id"],
        serde_json::Value::from("wg1")
    );
    let peers = merged.section(WIREGUARD).unwrap()["peers"].as_array().unwrap();
    assert_eq!(peers.len(), 1);
    assert!(model.applied().await.is_empty());
}

#[tokio::test]
async fn create_submits_new_pppoe_profile() {
    let model = Arc::new(ethernet_model());
    let service = service_with(model.clone());

    let output = service
        .execute_command(
            "connection",
            "create",
            &args(&["pppoe", "ppp0", "username=alice", "password=secret"]),
        )
        .await
        .unwrap();
    assert!(output.contains("ppp0"));

    let applied = model.applied().await;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].connection, None);

    let pppoe = applied[0].settings.section(PPPOE).unwrap();
    assert_eq!(pppoe["parent"], serde_json::Value::from("eth0"));
    assert_eq!(pppoe["username"], serde_json::Value::from("alice"));
}

#[tokio::test]
async fn rejected_submit_surfaces_the_service_message() {
    let model = Arc::new(ethernet_model());
    model.fail_next("connection refused").await;
    let service = service_with(model.clone());

    let err = service
        .execute_command("connection", "create", &args(&["wireguard", "wg0"]))
        .await
        .unwrap_err();

    match err {
        CliError::Rejected(banner) => assert_eq!(banner, "connection refused"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(model.applied().await.is_empty());
}

#[tokio::test]
async fn update_targets_saved_connection_and_its_device() {
    let saved = wireguard_settings("wg0");
    let uuid = uuid_of(&saved);
    let model = Arc::new(
        StaticNetworkModel::new(vec![
            Iface::new("eth0", NMDeviceType::Ethernet),
            Iface::new("wg0", NMDeviceType::Wireguard).with_connection(uuid.as_str()),
        ])
        .with_profile(saved),
    );
    let service = service_with(model.clone());

    service
        .execute_command(
            "connection",
            "update",
            &args(&["wireguard", &uuid, "private_key=NEW"]),
        )
        .await
        .unwrap();

    let applied = model.applied().await;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].connection.as_ref().map(|c| c.uuid.as_str()), Some(uuid.as_str()));
    assert_eq!(
        applied[0].device.as_ref().map(|d| d.interface.as_str()),
        Some("wg0")
    );
    assert_eq!(
        applied[0].settings.section(WIREGUARD).unwrap()["private_key"],
        serde_json::Value::from("NEW")
    );
}

#[tokio::test]
async fn show_and_update_of_unknown_connection_fail() {
    let service = service_with(Arc::new(ethernet_model()));

    for command in ["show", "update"] {
        let err = service
            .execute_command("connection", command, &args(&["pppoe", "missing"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ServiceError { .. }), "{command}");
    }
}

#[tokio::test]
async fn show_prints_saved_profile() {
    let saved = pppoe_settings("ppp0");
    let uuid = uuid_of(&saved);
    let service = service_with(Arc::new(ethernet_model().with_profile(saved.clone())));

    let output = service
        .execute_command("connection", "show", &args(&["pppoe", &uuid]))
        .await
        .unwrap();

    assert_eq!(Settings::from_json(&output).unwrap(), saved);
}

#[tokio::test]
async fn interfaces_commands_follow_enumeration_order() {
    let service = service_with(Arc::new(ethernet_model()));

    let parents = service
        .execute_command("interfaces", "parents", &[])
        .await
        .unwrap();
    assert_eq!(parents, "eth0\neth1");

    let list = service.execute_command("interfaces", "list", &[]).await.unwrap();
    let names: Vec<&str> = list
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(names, ["lo", "eth0", "eth1"]);
    assert!(list.contains("loopback"));
}

#[tokio::test]
async fn keys_generate_prints_public_then_private() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let output = service.execute_command("keys", "generate", &[]).await.unwrap();

    assert_eq!(output, "PUB\nPRIV");
}

#[tokio::test]
async fn config_get_reads_dotted_paths() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let output = service
        .execute_command("config", "get", &args(&["keygen.wg_binary"]))
        .await
        .unwrap();
    assert_eq!(output, "keygen.wg_binary: \"/usr/bin/wg\"");

    let output = service
        .execute_command("config", "get", &args(&["pppoe"]))
        .await
        .unwrap();
    assert_eq!(output, "pppoe: {2}");

    let err = service
        .execute_command("config", "get", &args(&["pppoe.mtu"]))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { .. }));
}

#[tokio::test]
async fn config_schema_is_json() {
    let service = service_with(Arc::new(StaticNetworkModel::default()));

    let output = service.execute_command("config", "schema", &[]).await.unwrap();
    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(schema["properties"].get("keygen").is_some());
}
