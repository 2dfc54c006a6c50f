//! add command - add a new provider configuration

use super::require_claude_installed;
use crate::config::BUILTIN_PROVIDER;
use crate::provider::{Provider, ProviderStore, ShellEnvironmentEditor};
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};

pub fn execute(
    paths: &ConfigPaths,
    name: String,
    api_key: String,
    base_url: Option<String>,
) -> Result<()> {
    tracing::info!("Executing command: add");

    if !require_claude_installed("ccb install") {
        std::process::exit(1);
    }

    let store = ProviderStore::new(&paths.providers_file);

    // The built-in name has no stored record, but "adding" it still
    // rewrites the exported key, so it gets the same overwrite guard.
    let exists = store.get(&name)?.is_some() || name == BUILTIN_PROVIDER;
    if exists {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Provider \"{}\" already exists, overwrite its configuration?",
                name
            ))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let mut base_url = base_url;
    if base_url.is_none() && name != BUILTIN_PROVIDER {
        let input: String = Input::new()
            .with_prompt(format!(
                "Base URL for {} (leave empty for no custom URL)",
                name
            ))
            .allow_empty(true)
            .interact_text()?;
        base_url = if input.trim().is_empty() {
            None
        } else {
            Some(input)
        };
    }

    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());

    if name == BUILTIN_PROVIDER {
        editor.apply(Some(&Provider {
            name: BUILTIN_PROVIDER.to_string(),
            api_key,
            base_url: None,
        }))?;
        println!("{} Anthropic API configuration updated", "✅".green());
        return Ok(());
    }

    store.add_or_replace(&Provider {
        name: name.clone(),
        api_key,
        base_url,
    })?;

    println!("{} Provider \"{}\" added", "✅".green(), name);
    println!(
        "Run `{}` to switch to it",
        format!("ccb use {}", name).cyan()
    );

    Ok(())
}
