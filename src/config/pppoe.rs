use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::settings::PppSection;

/// Starting values for new PPPoE profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PppoeConfig {
    /// Unanswered LCP echo requests before the link is dropped.
    pub lcp_echo_failure: u32,

    /// Seconds between LCP echo requests.
    pub lcp_echo_interval: u32,
}

impl Default for PppoeConfig {
    fn default() -> Self {
        let ppp = PppSection::default();
        Self {
            lcp_echo_failure: ppp.lcp_echo_failure,
            lcp_echo_interval: ppp.lcp_echo_interval,
        }
    }
}

impl From<PppoeConfig> for PppSection {
    fn from(config: PppoeConfig) -> Self {
        PppSection {
            lcp_echo_failure: config.lcp_echo_failure,
            lcp_echo_interval: config.lcp_echo_interval,
        }
    }
}
