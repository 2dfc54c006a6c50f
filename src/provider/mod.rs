//! API provider management module
//!
//! Persists named provider configurations, rewrites the shell startup
//! file so the active provider takes effect in new sessions, and resolves
//! partial provider names typed by the user.

pub mod config;
pub mod resolver;
pub mod shell_env;
pub mod store;

// Re-export commonly used types
pub use config::{Provider, ProviderRecord, ProvidersMap};
pub use resolver::fuzzy_match;
pub use shell_env::ShellEnvironmentEditor;
pub use store::ProviderStore;
