//! Translation between [`Settings`] and NetworkManager's `a{sa{sv}}` maps.
//!
//! Keys are snake_case in [`Settings`] and kebab-case on the bus. When a
//! profile is written back over an existing connection, every key whose
//! value did not change is sent with the exact D-Bus value that was read,
//! so sections the dialogs never touch keep their wire types.

use std::collections::HashMap;

use serde_json::{Map, Number, Value as Json};
use tracing::warn;
use zbus::zvariant::{OwnedValue, Value};

use super::NetworkError;
use crate::settings::{Section, Settings, WIREGUARD};

/// NetworkManager's settings representation.
pub type NmSettings = HashMap<String, HashMap<String, OwnedValue>>;

const PEERS_KEY: &str = "peers";
const ALLOWED_IPS_KEY: &str = "allowed-ips";

// Integer properties NetworkManager declares as `u`; other integers go out as `i`.
const U32_KEYS: &[&str] = &[
    "lcp-echo-failure",
    "lcp-echo-interval",
    "listen-port",
    "fwmark",
    "mtu",
    "mru",
    "persistent-keepalive",
    "preshared-key-flags",
    "private-key-flags",
    "password-flags",
];

fn model_key(dbus_key: &str) -> String {
    dbus_key.replace('-', "_")
}

fn dbus_key(model_key: &str) -> String {
    model_key.replace('_', "-")
}

/// Converts settings read from the bus into a [`Settings`] profile.
///
/// Values that have no JSON counterpart (file descriptors, structures,
/// signatures) are dropped with a warning.
pub fn settings_from_dbus(raw: &NmSettings) -> Settings {
    let mut settings = Settings::new();

    for (section_name, properties) in raw {
        let mut section = Section::new();
        for (key, value) in properties {
            let json = if section_name == WIREGUARD && key == PEERS_KEY {
                peers_to_json(value)
            } else {
                value_to_json(value)
            };

            match json {
                Some(json) => {
                    section.insert(model_key(key), json);
                }
                None => {
                    warn!(section = %section_name, key = %key, "dropping unsupported D-Bus value");
                }
            }
        }
        settings.insert_section(section_name.clone(), section);
    }

    settings
}

/// Converts a profile into the map sent to `Update` or `AddConnection`.
///
/// With `base`, unchanged keys reuse the D-Bus values from `base`.
///
/// # Errors
/// Returns `NetworkError::DataConversionFailed` when a value cannot be
/// expressed on the bus, e.g. a non-numeric LCP echo counter.
pub fn settings_to_dbus(
    settings: &Settings,
    base: Option<&NmSettings>,
) -> Result<NmSettings, NetworkError> {
    let mut converted = NmSettings::new();

    for (section_name, section) in settings.sections() {
        let base_section = base.and_then(|base| base.get(section_name));
        let mut properties = HashMap::new();

        for (key, json) in section {
            if json.is_null() {
                continue;
            }

            let wire_key = dbus_key(key);
            let unchanged = base_section
                .and_then(|base| base.get(&wire_key))
                .filter(|original| {
                    let decoded = if section_name == WIREGUARD && wire_key == PEERS_KEY {
                        peers_to_json(original)
                    } else {
                        value_to_json(original)
                    };
                    decoded.as_ref() == Some(json)
                });

            let value = match unchanged {
                Some(original) => original
                    .try_clone()
                    .map_err(|e| conversion_error(&wire_key, e))?,
                None if section_name == WIREGUARD && wire_key == PEERS_KEY => {
                    to_owned(&wire_key, peers_to_value(json)?)?
                }
                None => to_owned(&wire_key, json_to_value(&wire_key, json)?)?,
            };

            properties.insert(wire_key, value);
        }

        converted.insert(section_name.to_string(), properties);
    }

    Ok(converted)
}

/// Folds a `GetSecrets` reply, already converted, into a profile.
///
/// Secret keys overwrite their section's keys one by one. WireGuard peers are
/// matched on `public_key` and only gain the secret fields, so a reply that
/// lists peers with just their keys leaves endpoints and ranges in place.
pub fn merge_secrets(settings: &mut Settings, secrets: &Settings) {
    for (section_name, secret_section) in secrets.sections() {
        let mut section = settings.section(section_name).cloned().unwrap_or_default();

        for (key, value) in secret_section {
            let merged = match section.get(key) {
                Some(existing) if section_name == WIREGUARD && key == PEERS_KEY => {
                    merge_peer_secrets(existing, value)
                }
                _ => value.clone(),
            };
            section.insert(key.clone(), merged);
        }

        settings.insert_section(section_name, section);
    }
}

fn merge_peer_secrets(peers: &Json, secrets: &Json) -> Json {
    let (Json::Array(peers), Json::Array(secrets)) = (peers, secrets) else {
        return peers.clone();
    };

    let merged = peers
        .iter()
        .map(|peer| {
            let public_key = peer.get("public_key").and_then(Json::as_str);
            let secret = secrets.iter().find(|secret| {
                public_key.is_some()
                    && secret.get("public_key").and_then(Json::as_str) == public_key
            });

            match (peer, secret) {
                (Json::Object(fields), Some(Json::Object(secret_fields))) => {
                    let mut fields = fields.clone();
                    for (key, value) in secret_fields {
                        fields.insert(key.clone(), value.clone());
                    }
                    Json::Object(fields)
                }
                _ => peer.clone(),
            }
        })
        .collect();

    Json::Array(merged)
}

fn conversion_error(key: &str, reason: impl ToString) -> NetworkError {
    NetworkError::DataConversionFailed {
        data_type: format!("setting '{key}'"),
        reason: reason.to_string(),
    }
}

fn to_owned(key: &str, value: Value<'static>) -> Result<OwnedValue, NetworkError> {
    value.try_to_owned().map_err(|e| conversion_error(key, e))
}

fn value_to_json(value: &Value<'_>) -> Option<Json> {
    let json = match value {
        Value::Bool(flag) => Json::Bool(*flag),
        Value::U8(n) => Json::from(*n),
        Value::I16(n) => Json::from(*n),
        Value::U16(n) => Json::from(*n),
        Value::I32(n) => Json::from(*n),
        Value::U32(n) => Json::from(*n),
        Value::I64(n) => Json::from(*n),
        Value::U64(n) => Json::from(*n),
        Value::F64(n) => Number::from_f64(*n).map(Json::Number)?,
        Value::Str(text) => Json::from(text.as_str()),
        Value::ObjectPath(path) => Json::from(path.as_str()),
        Value::Value(inner) => value_to_json(inner)?,
        Value::Array(array) => Json::Array(array.iter().filter_map(value_to_json).collect()),
        Value::Dict(dict) => {
            let mut object = Map::new();
            for (key, entry) in dict.iter() {
                let Some(Json::String(key)) = value_to_json(key) else {
                    continue;
                };
                if let Some(entry) = value_to_json(entry) {
                    object.insert(model_key(&key), entry);
                }
            }
            Json::Object(object)
        }
        _ => return None,
    };

    Some(json)
}

fn peers_to_json(value: &Value<'_>) -> Option<Json> {
    let Json::Array(peers) = value_to_json(value)? else {
        return None;
    };

    let peers = peers
        .into_iter()
        .map(|peer| match peer {
            Json::Object(mut fields) => {
                if let Some(Json::Array(ranges)) = fields.get("allowed_ips") {
                    let joined = ranges
                        .iter()
                        .filter_map(Json::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    fields.insert("allowed_ips".into(), Json::from(joined));
                }
                Json::Object(fields)
            }
            other => other,
        })
        .collect();

    Some(Json::Array(peers))
}

fn peers_to_value(json: &Json) -> Result<Value<'static>, NetworkError> {
    let Json::Array(peers) = json else {
        return Err(conversion_error(PEERS_KEY, "expected a list of peers"));
    };

    let mut converted: Vec<HashMap<String, Value<'static>>> = Vec::with_capacity(peers.len());
    for peer in peers {
        let Json::Object(fields) = peer else {
            return Err(conversion_error(PEERS_KEY, "expected each peer to be an object"));
        };

        let mut entry = HashMap::new();
        for (key, field) in fields {
            let wire_key = dbus_key(key);
            let value = match (wire_key.as_str(), field) {
                (_, Json::Null) => continue,
                (ALLOWED_IPS_KEY, Json::String(ranges)) => Value::from(split_ranges(ranges)),
                _ => json_to_value(&wire_key, field)?,
            };
            entry.insert(wire_key, value);
        }
        converted.push(entry);
    }

    Ok(Value::from(converted))
}

fn split_ranges(ranges: &str) -> Vec<String> {
    ranges
        .split(',')
        .map(str::trim)
        .filter(|range| !range.is_empty())
        .map(str::to_string)
        .collect()
}

fn json_to_value(key: &str, json: &Json) -> Result<Value<'static>, NetworkError> {
    let wants_u32 = U32_KEYS.contains(&key);

    match json {
        Json::Bool(flag) => Ok(Value::from(*flag)),
        Json::String(text) if wants_u32 => text
            .trim()
            .parse::<u32>()
            .map(Value::from)
            .map_err(|e| conversion_error(key, format!("'{text}' is not a counter: {e}"))),
        Json::String(text) => Ok(Value::from(text.clone())),
        Json::Number(number) if wants_u32 => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Value::from)
            .ok_or_else(|| {
                conversion_error(key, format!("{number} does not fit an unsigned 32-bit value"))
            }),
        Json::Number(number) => {
            if let Some(n) = number.as_i64() {
                Ok(i32::try_from(n).map(Value::from).unwrap_or_else(|_| Value::from(n)))
            } else if let Some(n) = number.as_u64() {
                Ok(Value::from(n))
            } else {
                number
                    .as_f64()
                    .map(Value::from)
                    .ok_or_else(|| conversion_error(key, format!("unsupported number {number}")))
            }
        }
        Json::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            strings
                .map(Value::from)
                .ok_or_else(|| conversion_error(key, "only lists of strings can be written"))
        }
        Json::Null | Json::Object(_) => {
            Err(conversion_error(key, "nested objects cannot be written here"))
        }
    }
}
