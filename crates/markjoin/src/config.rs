use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::join::JoinStrategy;
use crate::loader::OnParseError;
use crate::window::WindowOffsets;

/// Report run configuration. Every field falls back to the reference run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfig {
    /// Data events: `<YYYY-MM-DD HH:MM:SS>,<payload>` per line.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Index markers: `<id>,<DD/MM/YYYY HH:MM:SS>` per line.
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Report output, replaced on every run.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    #[serde(default)]
    pub window: WindowOffsets,

    #[serde(default)]
    pub strategy: JoinStrategy,

    #[serde(default)]
    pub on_parse_error: OnParseError,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_index_path() -> PathBuf {
    PathBuf::from("data_from_ipad.csv")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("report.csv")
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            index_path: default_index_path(),
            report_path: default_report_path(),
            window: WindowOffsets::default(),
            strategy: JoinStrategy::default(),
            on_parse_error: OnParseError::default(),
        }
    }
}

impl JoinConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config '{}': {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // an empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn validate(&self) -> Result<()> {
        self.window
            .check()
            .map_err(|e| Error::Config(format!("Invalid window: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = JoinConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert_eq!(config.index_path, PathBuf::from("data_from_ipad.csv"));
        assert_eq!(config.report_path, PathBuf::from("report.csv"));
        assert_eq!(config.window, WindowOffsets { lower_secs: 10, upper_secs: 2 });
        assert_eq!(config.strategy, JoinStrategy::NestedLoop);
        assert_eq!(config.on_parse_error, OnParseError::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(JoinConfig::from_yaml("").unwrap(), JoinConfig::default());
        assert_eq!(JoinConfig::from_yaml("{}").unwrap(), JoinConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
report_path: "out/joined.csv"
window:
  lower_secs: 30
"#;
        let config = JoinConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.report_path, PathBuf::from("out/joined.csv"));
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert_eq!(config.window.lower_secs, 30);
        assert_eq!(config.window.upper_secs, 2);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
data_path: "in/events.csv"
index_path: "in/marks.csv"
report_path: "out/report.csv"
window:
  lower_secs: 5
  upper_secs: 5
strategy: sorted
on_parse_error: skip
"#;
        let config = JoinConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.index_path, PathBuf::from("in/marks.csv"));
        assert_eq!(config.strategy, JoinStrategy::Sorted);
        assert_eq!(config.on_parse_error, OnParseError::Skip);
        assert_eq!(config.window, WindowOffsets { lower_secs: 5, upper_secs: 5 });
    }

    #[test]
    fn test_sample_config_is_default() {
        let yaml = include_str!("../../../configs/markjoin.yaml");
        assert_eq!(JoinConfig::from_yaml(yaml).unwrap(), JoinConfig::default());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(JoinConfig::from_yaml("strategy: hash").is_err());
    }

    #[test]
    fn test_validate_rejects_negative_and_empty() {
        let mut config = JoinConfig::default();
        config.window.lower_secs = -1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.window = WindowOffsets { lower_secs: 0, upper_secs: 0 };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_overflowing_offsets() {
        let mut config = JoinConfig::default();
        config.window.lower_secs = 10_000_000_000_000;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.window = WindowOffsets { lower_secs: i64::MAX, upper_secs: 1 };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_huge_offset_from_yaml_rejected() {
        let config = JoinConfig::from_yaml("window:\n  lower_secs: 9223372036854775807\n").unwrap();
        assert_eq!(config.window.lower_secs, i64::MAX);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markjoin.yaml");
        std::fs::write(&path, "strategy: sorted\n").unwrap();
        let config = JoinConfig::load(&path).unwrap();
        assert_eq!(config.strategy, JoinStrategy::Sorted);
    }

    #[test]
    fn test_load_missing_file() {
        let result = JoinConfig::load(Path::new("/nonexistent.yaml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "not: [valid: yaml: {{").unwrap();
        assert!(matches!(JoinConfig::load(&path), Err(Error::Config(_))));
    }
}
