//! Settings written for the managed Claude Code package (~/.claude.json)
//!
//! The tool only sets the onboarding marker; every other key in the file
//! belongs to Claude Code itself and is carried through untouched.

use crate::error::{CcbError, CcbResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_completed_onboarding: Option<bool>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub struct ClaudeSettingsFile {
    settings_path: PathBuf,
}

impl ClaudeSettingsFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            settings_path: path.into(),
        }
    }

    pub fn load(&self) -> CcbResult<ClaudeSettings> {
        if !self.settings_path.exists() {
            return Ok(ClaudeSettings::default());
        }

        let content = fs::read_to_string(&self.settings_path).map_err(|e| {
            CcbError::Storage(format!(
                "Failed to read {}: {}",
                self.settings_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CcbError::Storage(format!(
                "Invalid JSON in {}: {}",
                self.settings_path.display(),
                e
            ))
        })
    }

    pub fn save(&self, settings: &ClaudeSettings) -> CcbResult<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| CcbError::Storage(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&self.settings_path, json).map_err(|e| {
            CcbError::Storage(format!(
                "Failed to write {}: {}",
                self.settings_path.display(),
                e
            ))
        })
    }

    /// Mark onboarding as complete so the managed package skips its
    /// first-run wizard
    pub fn set_onboarding_complete(&self) -> CcbResult<()> {
        let mut settings = self.load()?;
        settings.has_completed_onboarding = Some(true);
        self.save(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_onboarding_complete_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = ClaudeSettingsFile::new(temp_dir.path().join(".claude.json"));

        file.set_onboarding_complete().unwrap();

        let settings = file.load().unwrap();
        assert_eq!(settings.has_completed_onboarding, Some(true));

        let raw = fs::read_to_string(temp_dir.path().join(".claude.json")).unwrap();
        assert!(raw.contains("hasCompletedOnboarding"));
    }

    #[test]
    fn test_unknown_keys_survive_a_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".claude.json");
        fs::write(&path, r#"{"theme":"dark","numStartups":7}"#).unwrap();

        let file = ClaudeSettingsFile::new(&path);
        file.set_onboarding_complete().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\""));
        assert!(raw.contains("\"numStartups\""));
        assert!(raw.contains("hasCompletedOnboarding"));
    }

    #[test]
    fn test_malformed_settings_are_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".claude.json");
        fs::write(&path, "{oops").unwrap();

        let err = ClaudeSettingsFile::new(&path).load().unwrap_err();
        assert!(matches!(err, CcbError::Storage(_)));
    }
}
