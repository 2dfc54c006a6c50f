//! Provider configuration data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named API endpoint configuration.
///
/// The name acts as the primary key; a missing `base_url` means the
/// service's default endpoint is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    pub api_key: String,
    pub base_url: Option<String>,
}

/// On-disk record stored per provider in providers.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Persisted mapping: provider name -> record.
/// The built-in provider never appears as a key.
pub type ProvidersMap = BTreeMap<String, ProviderRecord>;

impl Provider {
    /// Rebuild a provider from its stored record
    pub fn from_record(name: &str, record: &ProviderRecord) -> Self {
        Self {
            name: name.to_string(),
            api_key: record.api_key.clone(),
            base_url: record.base_url.clone(),
        }
    }

    /// The record persisted for this provider
    pub fn to_record(&self) -> ProviderRecord {
        ProviderRecord {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let provider = Provider {
            name: "Moonshot AI".to_string(),
            api_key: "sk-test".to_string(),
            base_url: Some("https://api.moonshot.cn/anthropic/".to_string()),
        };

        let rebuilt = Provider::from_record("Moonshot AI", &provider.to_record());
        assert_eq!(rebuilt, provider);
    }

    #[test]
    fn test_record_omits_missing_base_url() {
        let record = ProviderRecord {
            api_key: "sk-test".to_string(),
            base_url: None,
        };

        let json = serde_json::to_string(&record).expect("should serialize");
        assert!(!json.contains("base_url"));
    }

    #[test]
    fn test_record_deserializes_without_base_url() {
        let record: ProviderRecord =
            serde_json::from_str(r#"{"api_key":"k"}"#).expect("should deserialize");
        assert_eq!(record.api_key, "k");
        assert!(record.base_url.is_none());
    }
}
