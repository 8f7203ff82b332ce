//! Single-open expand/collapse state for grouped form panels.

/// Which panel of an accordion, if any, is expanded.
///
/// At most one panel is open. Toggling the open panel collapses it;
/// toggling any other panel switches directly to that one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelToggle {
    expanded: Option<String>,
}

impl PanelToggle {
    /// All panels collapsed.
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// Starts with `panel_id` expanded.
    pub fn expanded(panel_id: impl Into<String>) -> Self {
        Self {
            expanded: Some(panel_id.into()),
        }
    }

    /// Handles a click on the toggle owning `panel_id`.
    pub fn toggle(&self, panel_id: &str) -> Self {
        let expanded = match &self.expanded {
            Some(current) if current == panel_id => None,
            _ => Some(panel_id.to_string()),
        };
        Self { expanded }
    }

    /// Whether `panel_id` is the open panel.
    pub fn is_expanded(&self, panel_id: &str) -> bool {
        self.expanded.as_deref() == Some(panel_id)
    }

    /// Identifier of the open panel.
    pub fn current(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}
