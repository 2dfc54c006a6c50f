//! Shell startup-file environment management
//!
//! Makes a provider active for future shell sessions by rewriting the
//! ANTHROPIC_API_KEY / ANTHROPIC_BASE_URL exports in exactly one shell
//! startup file, and derives the currently active provider by reading
//! that file back. Removal is a line-granularity substring match: any
//! line mentioning either variable name is dropped, including comments.

use super::config::Provider;
use super::store::ProviderStore;
use crate::config::{API_KEY_VAR, BASE_URL_VAR, BUILTIN_PROVIDER_LABEL};
use crate::error::{CcbError, CcbResult};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ShellEnvironmentEditor {
    home: PathBuf,
}

/// Pick the startup file for the given shell indicator. Preferred files
/// are only chosen when they already exist; everything else falls back
/// to ~/.profile.
fn select_profile(home: &Path, shell: &str) -> PathBuf {
    if shell.contains("zsh") {
        let zshrc = home.join(".zshrc");
        if zshrc.exists() {
            return zshrc;
        }
    }

    if shell.contains("bash") {
        let bashrc = home.join(".bashrc");
        if bashrc.exists() {
            return bashrc;
        }

        let bash_profile = home.join(".bash_profile");
        if bash_profile.exists() {
            return bash_profile;
        }
    }

    if shell.contains("fish") {
        let fish_config = home.join(".config").join("fish").join("config.fish");
        if fish_config.exists() {
            return fish_config;
        }
    }

    home.join(".profile")
}

/// First double-quoted substring of a line
fn first_quoted(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Drop every line mentioning either managed variable, then append fresh
/// export lines for `provider` (none when clearing).
fn rewrite(content: &str, fish: bool, provider: Option<&Provider>) -> String {
    let mut lines: Vec<String> = content
        .split('\n')
        .filter(|line| !line.contains(API_KEY_VAR) && !line.contains(BASE_URL_VAR))
        .map(str::to_string)
        .collect();

    if let Some(provider) = provider {
        if fish {
            lines.push(format!(r#"set -gx {} "{}""#, API_KEY_VAR, provider.api_key));
            if let Some(url) = &provider.base_url {
                lines.push(format!(r#"set -gx {} "{}""#, BASE_URL_VAR, url));
            }
        } else {
            lines.push(format!(r#"export {}="{}""#, API_KEY_VAR, provider.api_key));
            if let Some(url) = &provider.base_url {
                lines.push(format!(r#"export {}="{}""#, BASE_URL_VAR, url));
            }
        }
    }

    lines.join("\n")
}

impl ShellEnvironmentEditor {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Resolve the target startup file. Consulted fresh on every
    /// operation, never cached.
    pub fn shell_config_file(&self) -> PathBuf {
        let shell = std::env::var("SHELL").unwrap_or_default();
        select_profile(&self.home, &shell)
    }

    /// Rewrite the startup file so `provider` is active in new sessions.
    /// `None` clears back to the built-in defaults.
    pub fn apply(&self, provider: Option<&Provider>) -> CcbResult<()> {
        let path = self.shell_config_file();
        self.apply_to(&path, provider)
    }

    /// `apply(None)`
    pub fn clear(&self) -> CcbResult<()> {
        self.apply(None)
    }

    fn apply_to(&self, path: &Path, provider: Option<&Provider>) -> CcbResult<()> {
        // A missing file is treated as empty; the write below creates it.
        let content = fs::read_to_string(path).unwrap_or_default();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CcbError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let fish = path.to_string_lossy().ends_with("config.fish");
        let updated = rewrite(&content, fish, provider);

        fs::write(path, updated)
            .map_err(|e| CcbError::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Label for the provider implied by the current shell exports
    pub fn current_provider_label(&self, store: &ProviderStore) -> String {
        let path = self.shell_config_file();
        self.label_for(&path, store)
    }

    fn label_for(&self, path: &Path, store: &ProviderStore) -> String {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return BUILTIN_PROVIDER_LABEL.to_string(),
        };

        let url_line = match content.split('\n').find(|line| line.contains(BASE_URL_VAR)) {
            Some(line) => line,
            None => return BUILTIN_PROVIDER_LABEL.to_string(),
        };

        let url = match first_quoted(url_line) {
            Some(url) => url,
            None => return "Unknown provider".to_string(),
        };

        let providers = match store.load() {
            Ok(providers) => providers,
            Err(_) => return BUILTIN_PROVIDER_LABEL.to_string(),
        };

        for (name, record) in &providers {
            if record.base_url.as_deref() == Some(url) {
                return format!("{} ({})", name, url);
            }
        }

        format!("Unknown ({})", url)
    }

    /// Whether any line in the startup file mentions the API key variable
    pub fn has_api_key_line(&self) -> bool {
        fs::read_to_string(self.shell_config_file())
            .map(|content| content.contains(API_KEY_VAR))
            .unwrap_or(false)
    }

    /// Extract the currently exported API key, if one can be parsed
    pub fn existing_api_key(&self) -> Option<String> {
        let content = fs::read_to_string(self.shell_config_file()).ok()?;
        content
            .split('\n')
            .find(|line| line.contains(API_KEY_VAR))
            .and_then(first_quoted)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn provider(name: &str, key: &str, url: Option<&str>) -> Provider {
        Provider {
            name: name.to_string(),
            api_key: key.to_string(),
            base_url: url.map(str::to_string),
        }
    }

    fn setup() -> (TempDir, ShellEnvironmentEditor, ProviderStore) {
        let temp_dir = TempDir::new().unwrap();
        let editor = ShellEnvironmentEditor::new(temp_dir.path().to_path_buf());
        let store = ProviderStore::new(temp_dir.path().join(".claude").join("providers.json"));
        (temp_dir, editor, store)
    }

    #[test]
    fn test_select_profile_prefers_existing_zshrc() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path();

        assert_eq!(select_profile(home, "/bin/zsh"), home.join(".profile"));

        fs::write(home.join(".zshrc"), "").unwrap();
        assert_eq!(select_profile(home, "/bin/zsh"), home.join(".zshrc"));
    }

    #[test]
    fn test_select_profile_bash_fallback_chain() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path();

        assert_eq!(select_profile(home, "/bin/bash"), home.join(".profile"));

        fs::write(home.join(".bash_profile"), "").unwrap();
        assert_eq!(select_profile(home, "/bin/bash"), home.join(".bash_profile"));

        fs::write(home.join(".bashrc"), "").unwrap();
        assert_eq!(select_profile(home, "/bin/bash"), home.join(".bashrc"));
    }

    #[test]
    fn test_select_profile_fish_and_unknown() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path();

        let fish_config = home.join(".config").join("fish").join("config.fish");
        fs::create_dir_all(fish_config.parent().unwrap()).unwrap();
        fs::write(&fish_config, "").unwrap();

        assert_eq!(select_profile(home, "/usr/bin/fish"), fish_config);
        assert_eq!(select_profile(home, "/bin/dash"), home.join(".profile"));
    }

    #[test]
    fn test_rewrite_posix_exports() {
        let updated = rewrite("", false, Some(&provider("X", "sk-key", Some("http://e"))));
        assert_eq!(
            updated,
            "\nexport ANTHROPIC_API_KEY=\"sk-key\"\nexport ANTHROPIC_BASE_URL=\"http://e\""
        );
    }

    #[test]
    fn test_rewrite_fish_exports() {
        let updated = rewrite("", true, Some(&provider("X", "sk-key", Some("http://e"))));
        assert!(updated.contains("set -gx ANTHROPIC_API_KEY \"sk-key\""));
        assert!(updated.contains("set -gx ANTHROPIC_BASE_URL \"http://e\""));
    }

    #[test]
    fn test_rewrite_skips_url_line_without_base_url() {
        let updated = rewrite("", false, Some(&provider("X", "sk-key", None)));
        assert!(updated.contains("ANTHROPIC_API_KEY"));
        assert!(!updated.contains("ANTHROPIC_BASE_URL"));
    }

    #[test]
    fn test_rewrite_strips_any_line_mentioning_the_variables() {
        let content = "# ANTHROPIC_API_KEY goes here\nexport PATH=\"$PATH\"\nexport ANTHROPIC_BASE_URL=\"http://old\"";
        let updated = rewrite(content, false, None);
        assert_eq!(updated, "export PATH=\"$PATH\"");
    }

    #[test]
    fn test_apply_is_idempotent_and_preserves_unrelated_lines() {
        let (temp_dir, editor, _store) = setup();
        let profile = temp_dir.path().join(".profile");
        fs::write(&profile, "# my profile\nalias ll='ls -l'\n").unwrap();

        editor
            .apply_to(&profile, Some(&provider("A", "key-a", Some("http://a"))))
            .unwrap();
        editor
            .apply_to(&profile, Some(&provider("B", "key-b", Some("http://b"))))
            .unwrap();

        let content = fs::read_to_string(&profile).unwrap();
        let key_lines = content
            .split('\n')
            .filter(|l| l.contains(API_KEY_VAR))
            .count();
        let url_lines = content
            .split('\n')
            .filter(|l| l.contains(BASE_URL_VAR))
            .count();

        assert_eq!(key_lines, 1);
        assert_eq!(url_lines, 1);
        assert!(content.contains("key-b"));
        assert!(!content.contains("key-a"));

        let unrelated: Vec<&str> = content
            .split('\n')
            .filter(|l| !l.contains("ANTHROPIC"))
            .collect();
        assert_eq!(unrelated, vec!["# my profile", "alias ll='ls -l'", ""]);
    }

    #[test]
    fn test_apply_none_clears_to_builtin() {
        let (temp_dir, editor, store) = setup();
        let profile = temp_dir.path().join(".profile");

        editor
            .apply_to(&profile, Some(&provider("A", "key-a", Some("http://a"))))
            .unwrap();
        editor.apply_to(&profile, None).unwrap();

        assert_eq!(editor.label_for(&profile, &store), BUILTIN_PROVIDER_LABEL);
    }

    #[test]
    fn test_label_resolves_stored_provider_by_url() {
        let (temp_dir, editor, store) = setup();
        let profile = temp_dir.path().join(".profile");

        let moonshot = provider("Moonshot AI", "sk-m", Some("https://api.moonshot.cn/anthropic/"));
        store.add_or_replace(&moonshot).unwrap();

        editor.apply_to(&profile, Some(&moonshot)).unwrap();
        assert_eq!(
            editor.label_for(&profile, &store),
            "Moonshot AI (https://api.moonshot.cn/anthropic/)"
        );
    }

    #[test]
    fn test_label_for_missing_file_is_builtin() {
        let (temp_dir, editor, store) = setup();
        let profile = temp_dir.path().join(".profile");

        assert_eq!(editor.label_for(&profile, &store), BUILTIN_PROVIDER_LABEL);
    }

    #[test]
    fn test_label_unknown_url_and_unparsable_line() {
        let (temp_dir, editor, store) = setup();
        let profile = temp_dir.path().join(".profile");

        fs::write(&profile, "export ANTHROPIC_BASE_URL=\"http://nobody\"\n").unwrap();
        assert_eq!(
            editor.label_for(&profile, &store),
            "Unknown (http://nobody)"
        );

        fs::write(&profile, "export ANTHROPIC_BASE_URL=http://unquoted\n").unwrap();
        assert_eq!(editor.label_for(&profile, &store), "Unknown provider");
    }

    #[test]
    fn test_first_quoted() {
        assert_eq!(first_quoted(r#"export K="value""#), Some("value"));
        assert_eq!(first_quoted(r#"set -gx K "a" "b""#), Some("a"));
        assert_eq!(first_quoted("export K=value"), None);
        assert_eq!(first_quoted(r#"export K="unterminated"#), None);
    }

    #[test]
    fn test_existing_api_key_extraction() {
        let (temp_dir, editor, _store) = setup();
        // No rc files exist in the temp home, so every shell indicator
        // resolves to ~/.profile here.
        let profile = temp_dir.path().join(".profile");

        assert!(editor.existing_api_key().is_none());
        assert!(!editor.has_api_key_line());

        fs::write(&profile, "export ANTHROPIC_API_KEY=\"sk-live\"\n").unwrap();
        assert!(editor.has_api_key_line());
        assert_eq!(editor.existing_api_key().as_deref(), Some("sk-live"));
    }
}
