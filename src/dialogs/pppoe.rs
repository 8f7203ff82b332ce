use serde_json::Value;

use super::{ConnectionForm, panels::PanelToggle, with_identity};
use crate::{
    Result,
    settings::{
        CONNECTION, ConnectionSection, PPP, PPPOE, PppSection, PppoeSection, Section, Settings,
    },
};

/// Panel holding the service name and LCP echo counters.
pub const ADVANCED_PANEL: &str = "advanced";

/// Edits accepted by [`PppoeForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PppoeMessage {
    /// Interface name field changed
    NameChanged(String),
    /// Another parent interface picked
    ParentSelected(String),
    /// Username field changed
    UsernameChanged(String),
    /// Password field changed
    PasswordChanged(String),
    /// Service name field changed
    ServiceChanged(String),
    /// LCP echo failure field changed
    LcpEchoFailureChanged(String),
    /// LCP echo interval field changed
    LcpEchoIntervalChanged(String),
    /// A panel toggle was clicked
    PanelToggled(String),
}

/// Form state of the PPPoE dialog.
///
/// The LCP counters are kept as entered; they are not checked until the
/// network service sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PppoeForm {
    /// Interface name; also becomes the profile name.
    pub iface_name: String,
    /// Selected parent interface.
    pub parent: String,
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Access concentrator service name.
    pub service: String,
    /// LCP echo failure count as entered.
    pub lcp_echo_failure: String,
    /// LCP echo interval as entered.
    pub lcp_echo_interval: String,
    /// Expanded panel.
    pub panels: PanelToggle,
}

impl PppoeForm {
    /// Whether the advanced panel is shown.
    pub fn advanced_expanded(&self) -> bool {
        self.panels.is_expanded(ADVANCED_PANEL)
    }
}

// Counters may hold text a previous merge could not parse.
fn counter_text(ppp: Option<&Section>, key: &str, default: u32) -> String {
    match ppp.and_then(|section| section.get(key)) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(count)) => count.to_string(),
        _ => default.to_string(),
    }
}

fn counter_value(text: &str) -> Value {
    match text.trim().parse::<u32>() {
        Ok(count) => Value::from(count),
        Err(_) => Value::from(text),
    }
}

impl ConnectionForm for PppoeForm {
    type Message = PppoeMessage;

    const TITLE: &'static str = "PPPoE settings";
    const ID_PREFIX: &'static str = "network-pppoe-settings";

    fn from_settings(settings: &Settings, parent_choices: &[String]) -> Result<Self> {
        let connection: ConnectionSection = settings.typed(CONNECTION)?;
        let pppoe: PppoeSection = settings.typed(PPPOE)?;
        // NetworkManager omits `ppp` when every value is at its default.
        let ppp = settings.section(PPP);
        let defaults = PppSection::default();

        let parent = if pppoe.parent.is_empty() {
            parent_choices.first().cloned().unwrap_or_default()
        } else {
            pppoe.parent
        };

        Ok(Self {
            iface_name: connection.interface_name,
            parent,
            username: pppoe.username,
            password: pppoe.password,
            service: pppoe.service,
            lcp_echo_failure: counter_text(ppp, "lcp_echo_failure", defaults.lcp_echo_failure),
            lcp_echo_interval: counter_text(ppp, "lcp_echo_interval", defaults.lcp_echo_interval),
            panels: PanelToggle::collapsed(),
        })
    }

    fn update(&self, message: PppoeMessage) -> Self {
        let mut next = self.clone();
        match message {
            PppoeMessage::NameChanged(name) => next.iface_name = name,
            PppoeMessage::ParentSelected(parent) => next.parent = parent,
            PppoeMessage::UsernameChanged(username) => next.username = username,
            PppoeMessage::PasswordChanged(password) => next.password = password,
            PppoeMessage::ServiceChanged(service) => next.service = service,
            PppoeMessage::LcpEchoFailureChanged(count) => next.lcp_echo_failure = count,
            PppoeMessage::LcpEchoIntervalChanged(seconds) => next.lcp_echo_interval = seconds,
            PppoeMessage::PanelToggled(panel) => next.panels = self.panels.toggle(&panel),
        }
        next
    }

    fn merge_into(&self, settings: &Settings) -> Result<Settings> {
        let mut ppp = Section::new();
        ppp.insert("lcp_echo_failure".into(), counter_value(&self.lcp_echo_failure));
        ppp.insert("lcp_echo_interval".into(), counter_value(&self.lcp_echo_interval));

        let pppoe = PppoeSection {
            username: self.username.clone(),
            password: self.password.clone(),
            parent: self.parent.clone(),
            service: self.service.clone(),
        };

        with_identity(settings, &self.iface_name)?
            .overlaid(PPP, ppp)
            .overlaid_with(PPPOE, &pppoe)
    }

    fn interface_name(&self) -> &str {
        &self.iface_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NetDialogsError, settings::pppoe_settings};

    fn choices() -> Vec<String> {
        vec!["eth0".to_string(), "eth1".to_string()]
    }

    #[test]
    fn parent_defaults_to_first_choice() {
        let form = PppoeForm::from_settings(&pppoe_settings("ppp0"), &choices()).unwrap();

        assert_eq!(form.parent, "eth0");
        assert_eq!(form.lcp_echo_failure, "5");
        assert_eq!(form.lcp_echo_interval, "30");
        assert!(!form.advanced_expanded());
    }

    #[test]
    fn stored_parent_wins_over_choices() {
        let settings = pppoe_settings("ppp0").overlaid(
            PPPOE,
            Section::from_iter([("parent".to_string(), Value::from("eth1"))]),
        );

        let form = PppoeForm::from_settings(&settings, &choices()).unwrap();

        assert_eq!(form.parent, "eth1");
    }

    #[test]
    fn no_choices_leaves_parent_empty() {
        let form = PppoeForm::from_settings(&pppoe_settings("ppp0"), &[]).unwrap();
        assert_eq!(form.parent, "");
    }

    #[test]
    fn missing_ppp_section_uses_defaults() {
        let mut settings = Settings::new();
        for (name, section) in pppoe_settings("ppp0").sections() {
            if name != PPP {
                settings.insert_section(name, section.clone());
            }
        }

        let form = PppoeForm::from_settings(&settings, &[]).unwrap();

        assert_eq!(form.lcp_echo_failure, "5");
    }

    #[test]
    fn missing_pppoe_section_fails() {
        let settings = Settings::new().with_section(CONNECTION, Section::new());

        let err = PppoeForm::from_settings(&settings, &[]).unwrap_err();

        assert!(matches!(err, NetDialogsError::MissingSection { section } if section == PPPOE));
    }

    #[test]
    fn merge_writes_counters_and_parent() {
        let settings = pppoe_settings("ppp0");
        let form = PppoeForm::from_settings(&settings, &choices())
            .unwrap()
            .update(PppoeMessage::ParentSelected("eth1".into()))
            .update(PppoeMessage::UsernameChanged("alice".into()))
            .update(PppoeMessage::LcpEchoFailureChanged("8".into()))
            .update(PppoeMessage::LcpEchoIntervalChanged("soon".into()));

        let merged = form.merge_into(&settings).unwrap();
        let ppp = merged.section(PPP).unwrap();
        let pppoe: PppoeSection = merged.typed(PPPOE).unwrap();

        assert_eq!(ppp["lcp_echo_failure"], Value::from(8));
        assert_eq!(ppp["lcp_echo_interval"], Value::from("soon"));
        assert_eq!(pppoe.parent, "eth1");
        assert_eq!(pppoe.username, "alice");
        assert_eq!(pppoe.password, "");
    }

    #[test]
    fn reopens_a_profile_with_unparsed_counters() {
        let settings = pppoe_settings("ppp0");
        let merged = PppoeForm::from_settings(&settings, &[])
            .unwrap()
            .update(PppoeMessage::LcpEchoFailureChanged("".into()))
            .update(PppoeMessage::LcpEchoIntervalChanged("soon".into()))
            .merge_into(&settings)
            .unwrap();

        let reopened = PppoeForm::from_settings(&merged, &[]).unwrap();

        assert_eq!(reopened.lcp_echo_failure, "");
        assert_eq!(reopened.lcp_echo_interval, "soon");
        assert_eq!(reopened.merge_into(&merged).unwrap(), merged);
    }

    #[test]
    fn advanced_panel_toggles() {
        let form = PppoeForm::from_settings(&pppoe_settings("ppp0"), &[]).unwrap();

        let opened = form.update(PppoeMessage::PanelToggled(ADVANCED_PANEL.into()));
        let closed = opened.update(PppoeMessage::PanelToggled(ADVANCED_PANEL.into()));

        assert!(opened.advanced_expanded());
        assert!(!closed.advanced_expanded());
    }
}
