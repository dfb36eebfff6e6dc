//! JSON configuration for design settings and net classes
//!
//! Example document:
//! ```json
//! {
//!   "design": { "use_net_class_track": false, "current_track_width": 300000 },
//!   "net_classes": {
//!     "default": { "name": "Default", "track_width": 200000 },
//!     "classes": { "Power": { "name": "Power", "track_width": 500000 } }
//!   },
//!   "nets": { "nets": { "1": { "name": "VCC", "class_name": "Power" } } }
//! }
//! ```

use super::design_settings::{DesignSettings, DiffPairDimension};
use super::net_class::NetClasses;
use crate::board::NetTable;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything the sizing engine reads besides the connectivity graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub design: DesignSettings,
    pub net_classes: NetClasses,
    pub nets: NetTable,
}

impl RulesConfig {
    /// Parse a rules document; missing sections take board defaults
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let config: RulesConfig =
            serde_json::from_str(text).context("Failed to parse rules configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rules configuration")
    }

    /// Reject values no board could carry
    pub fn validate(&self) -> anyhow::Result<()> {
        let d = &self.design;
        // The current width is the last fallback of the track-width chain
        anyhow::ensure!(d.current_track_width > 0, "current_track_width must be positive");
        anyhow::ensure!(d.current_via_diameter >= 0, "current_via_diameter must not be negative");
        anyhow::ensure!(d.current_via_drill >= 0, "current_via_drill must not be negative");
        check_diff_pair("current_diff_pair", &d.current_diff_pair)?;
        check_diff_pair("custom_diff_pair", &d.custom_diff_pair)?;
        for (index, preset) in d.diff_pair_presets.iter().enumerate() {
            check_diff_pair(&format!("diff_pair_presets[{}]", index), preset)?;
        }

        let default_name = &self.net_classes.default_class().name;
        for class in self.net_classes.iter() {
            anyhow::ensure!(
                class.track_width >= 0 && class.via_diameter >= 0 && class.via_drill >= 0,
                "net class '{}' has a negative size",
                class.name
            );
            anyhow::ensure!(
                class.diff_pair_width >= 0 && class.diff_pair_gap >= 0 && class.diff_pair_via_gap >= 0,
                "net class '{}' has a negative diff pair size",
                class.name
            );
        }
        // Skip the default itself; any other class under its name is unreachable
        if let Some(shadowed) = self.net_classes.iter().skip(1).find(|c| &c.name == default_name) {
            anyhow::bail!(
                "net class '{}' in classes is shadowed by the default class",
                shadowed.name
            );
        }
        Ok(())
    }
}

fn check_diff_pair(label: &str, dims: &DiffPairDimension) -> anyhow::Result<()> {
    anyhow::ensure!(
        dims.width >= 0 && dims.gap >= 0 && dims.via_gap >= 0,
        "{} has a negative size",
        label
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RulesConfig::from_json_str("{}").expect("empty document");
        assert_eq!(config.design, DesignSettings::default());
        assert_eq!(config.net_classes.len(), 1);
        assert!(config.nets.is_empty());
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = RulesConfig::from_json_str(r#"{"design": {"current_track_width": -5}}"#)
            .expect_err("negative width");
        assert!(err.to_string().contains("current_track_width"));
    }

    #[test]
    fn test_zero_current_width_rejected() {
        let err = RulesConfig::from_json_str(r#"{"design": {"current_track_width": 0}}"#)
            .expect_err("zero width");
        assert!(err.to_string().contains("current_track_width must be positive"));
    }

    #[test]
    fn test_negative_diff_pair_rejected() {
        let err = RulesConfig::from_json_str(
            r#"{"design": {"custom_diff_pair": {"width": 100000, "gap": -1, "via_gap": 0}}}"#,
        )
        .expect_err("negative gap");
        assert!(err.to_string().contains("custom_diff_pair"));

        let mut config = RulesConfig::default();
        config.net_classes.default_class_mut().diff_pair_via_gap = -10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_document() {
        let err = RulesConfig::from_json_str("{ not json").expect_err("malformed");
        assert!(err.to_string().contains("Failed to parse rules configuration"));
    }
}
