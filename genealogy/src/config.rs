//! Registry configuration.

use serde::{Deserialize, Serialize};

/// How `FamilyRegistry::find` compares a requested name to registered ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Unicode lowercase comparison; the earliest registered match wins.
    IgnoreCase,
}

impl NameMatch {
    pub fn matches(self, registered: &str, requested: &str) -> bool {
        match self {
            NameMatch::Exact => registered == requested,
            NameMatch::IgnoreCase => registered.to_lowercase() == requested.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub name_match: NameMatch,
}

impl RegistryConfig {
    pub fn ignoring_case() -> Self {
        Self {
            name_match: NameMatch::IgnoreCase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_policies() {
        assert!(NameMatch::Exact.matches("Otto Emmersohn", "Otto Emmersohn"));
        assert!(!NameMatch::Exact.matches("Otto Emmersohn", "otto emmersohn"));
        assert!(NameMatch::IgnoreCase.matches("Otto Emmersohn", "OTTO emmersohn"));
    }

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());

        let config: RegistryConfig =
            serde_json::from_str(r#"{"name_match":"ignore_case"}"#).unwrap();
        assert_eq!(config.name_match, NameMatch::IgnoreCase);
    }
}
