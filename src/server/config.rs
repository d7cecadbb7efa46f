//! Server configuration
//!
//! Defaults live in code; a JSON file named by `PLAN_SERVER_CONFIG` may
//! override any subset of the fields.

use crate::draw::geometry::MAX_BEAM_ALPHA;
use crate::plan::Rgb;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "PLAN_SERVER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Alpha of a beam drawn at 100% intensity
    pub max_beam_alpha: u8,
    /// Tint given to newly placed fixtures
    pub default_beam_tint: Rgb,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_beam_alpha: MAX_BEAM_ALPHA,
            default_beam_tint: Rgb::YELLOW,
        }
    }
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Config from `PLAN_SERVER_CONFIG` if set, defaults otherwise
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"max_beam_alpha": 200}"#).unwrap();
        assert_eq!(config.max_beam_alpha, 200);
        assert_eq!(config.default_beam_tint, Rgb::YELLOW);
    }
}
