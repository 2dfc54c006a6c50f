//! Configuration path management
//!
//! All persistent state lives under the user's home directory:
//! providers and the log under ~/.claude/, the onboarding flag file as
//! ~/.claude.json. Paths are resolved once per process and passed
//! explicitly to the components that need them.

use crate::config::{
    CLAUDE_DIRECTORY, CLAUDE_SETTINGS_FILE_NAME, LOG_FILE_NAME, PROVIDERS_FILE_NAME,
};
use anyhow::Result;
use std::path::PathBuf;

pub struct ConfigPaths {
    pub home_dir: PathBuf,
    pub claude_dir: PathBuf,
    pub providers_file: PathBuf,
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(Self::with_home(home_dir))
    }

    /// Build paths rooted at an explicit home directory (used by tests)
    pub fn with_home(home_dir: PathBuf) -> Self {
        let claude_dir = home_dir.join(CLAUDE_DIRECTORY);
        Self {
            providers_file: claude_dir.join(PROVIDERS_FILE_NAME),
            settings_file: home_dir.join(CLAUDE_SETTINGS_FILE_NAME),
            log_file: claude_dir.join(LOG_FILE_NAME),
            claude_dir,
            home_dir,
        }
    }

    /// Ensure the configuration directory exists
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.claude_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_home_anchored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(temp_dir.path().to_path_buf());

        assert_eq!(paths.claude_dir, temp_dir.path().join(".claude"));
        assert_eq!(
            paths.providers_file,
            temp_dir.path().join(".claude").join("providers.json")
        );
        assert_eq!(paths.settings_file, temp_dir.path().join(".claude.json"));
        assert_eq!(
            paths.log_file,
            temp_dir.path().join(".claude").join("ccb.log")
        );
    }

    #[test]
    fn test_ensure_dirs_creates_claude_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(temp_dir.path().to_path_buf());

        paths.ensure_dirs().unwrap();
        assert!(paths.claude_dir.is_dir());
    }
}
