//! Durable key-value persistence for provider records
//!
//! Backed by ~/.claude/providers.json, a JSON object mapping provider
//! name to `{ "api_key": string, "base_url"?: string }`. The file is
//! created as `{}` when missing; malformed JSON is a hard failure.

use super::config::{Provider, ProvidersMap};
use crate::config::BUILTIN_PROVIDER;
use crate::error::{CcbError, CcbResult};
use std::fs;
use std::path::PathBuf;

pub struct ProviderStore {
    providers_path: PathBuf,
}

impl ProviderStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            providers_path: path.into(),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &PathBuf {
        &self.providers_path
    }

    fn ensure_config_dir(&self) -> CcbResult<()> {
        if let Some(parent) = self.providers_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CcbError::Storage(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    fn ensure_store_file(&self) -> CcbResult<()> {
        self.ensure_config_dir()?;

        if !self.providers_path.exists() {
            fs::write(&self.providers_path, "{}").map_err(|e| {
                CcbError::Storage(format!(
                    "Failed to create {}: {}",
                    self.providers_path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Load the provider mapping, creating an empty store file if missing
    pub fn load(&self) -> CcbResult<ProvidersMap> {
        self.ensure_store_file()?;

        let content = fs::read_to_string(&self.providers_path).map_err(|e| {
            CcbError::Storage(format!(
                "Failed to read {}: {}",
                self.providers_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CcbError::Storage(format!(
                "Invalid JSON in {}: {}",
                self.providers_path.display(),
                e
            ))
        })
    }

    /// Overwrite the provider mapping on disk
    pub fn save(&self, providers: &ProvidersMap) -> CcbResult<()> {
        self.ensure_config_dir()?;

        let json = serde_json::to_string_pretty(providers)
            .map_err(|e| CcbError::Storage(format!("Failed to serialize providers: {}", e)))?;

        fs::write(&self.providers_path, json).map_err(|e| {
            CcbError::Storage(format!(
                "Failed to write {}: {}",
                self.providers_path.display(),
                e
            ))
        })
    }

    /// Insert or unconditionally overwrite the record for `provider.name`.
    /// Confirmation before overwriting is a caller concern.
    pub fn add_or_replace(&self, provider: &Provider) -> CcbResult<()> {
        let mut providers = self.load()?;
        providers.insert(provider.name.clone(), provider.to_record());
        self.save(&providers)
    }

    /// Remove a provider, reporting whether it existed. The built-in
    /// provider is never stored, so removing it always reports false.
    pub fn remove(&self, name: &str) -> CcbResult<bool> {
        let mut providers = self.load()?;

        if providers.remove(name).is_some() {
            self.save(&providers)?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Get a provider by name. The built-in provider has no stored
    /// record and always resolves to `None`.
    pub fn get(&self, name: &str) -> CcbResult<Option<Provider>> {
        if name == BUILTIN_PROVIDER {
            return Ok(None);
        }

        let providers = self.load()?;
        Ok(providers
            .get(name)
            .map(|record| Provider::from_record(name, record)))
    }

    /// All provider names, the built-in one first
    pub fn list_names(&self) -> CcbResult<Vec<String>> {
        let mut names = vec![BUILTIN_PROVIDER.to_string()];
        names.extend(self.load()?.keys().cloned());
        Ok(names)
    }
}
