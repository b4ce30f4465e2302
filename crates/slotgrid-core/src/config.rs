//! slotgrid.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub placement: PlacementSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementSection {
    /// Soft constraint used to rank viable agents.
    #[serde(default)]
    pub fitting_policy: FittingPolicy,
}

/// Built-in scoring policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingPolicy {
    /// Pack tasks onto the agent left with the fewest empty slots.
    #[default]
    Best,
    /// Spread tasks onto the emptiest agent.
    Worst,
}

impl PlacementConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn fitting_policy(&self) -> FittingPolicy {
        self.placement.fitting_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::io::Write;

    #[test]
    fn test_parse_minimal() {
        let config = PlacementConfig::from_toml_str("").unwrap();
        assert_eq!(config.fitting_policy(), FittingPolicy::Best);
    }

    #[test]
    fn test_parse_worst_fit() {
        let toml_str = r#"
[placement]
fitting_policy = "worst"
"#;
        let config = PlacementConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.fitting_policy(), FittingPolicy::Worst);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let toml_str = r#"
[placement]
fitting_policy = "random"
"#;
        let err = PlacementConfig::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_to_toml_string() {
        let config = PlacementConfig {
            placement: PlacementSection {
                fitting_policy: FittingPolicy::Worst,
            },
        };
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("fitting_policy = \"worst\""));
        assert_eq!(PlacementConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[placement]\nfitting_policy = \"best\"").unwrap();

        let config = PlacementConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fitting_policy(), FittingPolicy::Best);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlacementConfig::from_file(&dir.path().join("slotgrid.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
