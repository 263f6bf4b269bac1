//! Gate configuration and the default-overlay merge

use serde::Deserialize;

/// Effective gate configuration. Built once per gate, immutable after.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Tolerance in seconds added to the nominal expiry before comparing
    /// against the clock. Negative values force earlier re-authentication.
    pub token_exp_offset: i64,
    /// Login destination used when a decision denies.
    pub login_url: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            token_exp_offset: 0,
            login_url: "/login".to_string(),
        }
    }
}

/// Caller-supplied configuration. Fields left `None` fall back to the
/// [`GateConfig`] defaults; an explicit value always wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateConfigOverlay {
    pub token_exp_offset: Option<i64>,
    pub login_url: Option<String>,
}

impl GateConfig {
    /// Defaults overlaid with the explicitly supplied fields.
    pub fn merged(overlay: GateConfigOverlay) -> Self {
        let mut cfg = Self::default();
        if let Some(offset) = overlay.token_exp_offset {
            cfg.token_exp_offset = offset;
        }
        if let Some(url) = overlay.login_url {
            cfg.login_url = url;
        }
        cfg
    }
}
