//! Connection settings profiles.
//!
//! A [`Settings`] value is one network connection profile, split into named
//! sections (`connection`, `wireguard`, `ppp`, `pppoe`, `ipv4`, ...). The
//! section layout belongs to the network configuration service; this crate
//! only reads the sections a dialog edits and overlays its edits back,
//! leaving everything else as it found it.

mod factory;
mod sections;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

pub use factory::{openvpn_settings, pppoe_settings, pppoe_settings_with, wireguard_settings};
pub use sections::{
    ConnectionIdentity, ConnectionSection, Peer, PppSection, PppoeSection, WireguardSection,
};

use crate::{NetDialogsError, Result};

/// Name of the section every profile carries.
pub const CONNECTION: &str = "connection";
/// Name of the tunnel section.
pub const WIREGUARD: &str = "wireguard";
/// Name of the point-to-point link section.
pub const PPP: &str = "ppp";
/// Name of the PPP-over-Ethernet section.
pub const PPPOE: &str = "pppoe";

/// Key/value pairs of one settings section.
pub type Section = Map<String, Value>;

/// One connection profile, partitioned into named sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    sections: BTreeMap<String, Section>,
}

impl Settings {
    /// Creates a profile with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a profile from its JSON object form.
    ///
    /// # Errors
    /// Returns `NetDialogsError::Serialization` if the text is not an object
    /// of objects.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders the profile as indented JSON.
    ///
    /// # Errors
    /// Returns `NetDialogsError::Serialization` if a value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the named section, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Whether the named section is present.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates over sections in name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Inserts or replaces a whole section.
    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) {
        self.sections.insert(name.into(), section);
    }

    /// Builder form of [`Settings::insert_section`].
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.insert_section(name, section);
        self
    }

    /// Decodes a required section into its typed view.
    ///
    /// # Errors
    /// Returns `NetDialogsError::MissingSection` when the section is absent and
    /// `NetDialogsError::InvalidSection` when its fields have the wrong shape.
    pub fn typed<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let section = self
            .section(name)
            .ok_or_else(|| NetDialogsError::MissingSection {
                section: name.to_string(),
            })?;

        serde_json::from_value(Value::Object(section.clone()))
            .map_err(|e| NetDialogsError::invalid_section(name, e))
    }

    /// Decodes an optional section, falling back to the view's defaults.
    ///
    /// # Errors
    /// Returns `NetDialogsError::InvalidSection` when the section exists but
    /// its fields have the wrong shape.
    pub fn typed_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        if self.has_section(name) {
            self.typed(name)
        } else {
            Ok(T::default())
        }
    }

    /// Returns a new profile with `edits` shallow-merged into section `name`.
    ///
    /// Keys in `edits` win; other keys of the original section and every
    /// other section are carried over unchanged. `self` is not modified.
    pub fn overlaid(&self, name: &str, edits: Section) -> Self {
        let mut merged = self.clone();
        let section = merged.sections.entry(name.to_string()).or_default();
        for (key, value) in edits {
            section.insert(key, value);
        }
        merged
    }

    /// Typed form of [`Settings::overlaid`].
    ///
    /// # Errors
    /// Returns `NetDialogsError::InvalidSection` if `edits` does not encode to
    /// a JSON object.
    pub fn overlaid_with<T: Serialize>(&self, name: &str, edits: &T) -> Result<Self> {
        match serde_json::to_value(edits).map_err(|e| NetDialogsError::invalid_section(name, e))? {
            Value::Object(section) => Ok(self.overlaid(name, section)),
            other => Err(NetDialogsError::invalid_section(
                name,
                format!("expected an object of fields, got {other}"),
            )),
        }
    }
}
