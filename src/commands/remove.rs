//! remove command - delete a provider configuration

use super::require_claude_installed;
use crate::config::BUILTIN_PROVIDER;
use crate::error::CcbError;
use crate::provider::{fuzzy_match, ProviderStore, ShellEnvironmentEditor};
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Select};

pub fn execute(paths: &ConfigPaths, provider: String) -> Result<()> {
    tracing::info!("Executing command: remove");

    if !require_claude_installed("ccb install") {
        return Ok(());
    }

    let store = ProviderStore::new(&paths.providers_file);
    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());

    // The built-in provider is never a deletion candidate.
    let custom: Vec<String> = store
        .list_names()?
        .into_iter()
        .filter(|name| name != BUILTIN_PROVIDER)
        .collect();

    let matches = fuzzy_match(&provider, &custom);
    let target = match matches.len() {
        0 => {
            eprintln!("{} No provider matches \"{}\"", "❌".red(), provider);
            println!("Removable providers:");
            for name in &custom {
                println!("  • {}", name);
            }
            println!("Run `{}` for details", "ccb ls".cyan());
            std::process::exit(1);
        }
        1 => {
            let resolved = matches[0].clone();
            if resolved != provider {
                println!("{} Fuzzy-matched provider: {}", "ℹ️".blue(), resolved);
            }
            resolved
        }
        _ => {
            println!("Multiple providers match:");
            for name in &matches {
                println!("  • {}", name);
            }
            let index = Select::new()
                .with_prompt("Select the provider to remove")
                .items(&matches)
                .default(0)
                .interact()?;
            matches[index].clone()
        }
    };

    if target == BUILTIN_PROVIDER {
        return Err(CcbError::InvalidOperation(
            "the built-in Anthropic provider cannot be removed".to_string(),
        )
        .into());
    }

    if store.get(&target)?.is_none() {
        eprintln!("{} Provider \"{}\" does not exist", "❌".red(), target);
        println!("Run `{}` to see available providers", "ccb ls".cyan());
        std::process::exit(1);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete provider \"{}\"?", target))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".yellow());
        return Ok(());
    }

    if store.remove(&target)? {
        println!("{} Provider \"{}\" removed", "✅".green(), target);

        let current = editor.current_provider_label(&store);
        if current.contains(&target) {
            println!(
                "{} You removed the provider that is currently active",
                "⚠️".yellow()
            );
            println!(
                "Run `{}` to switch to another provider",
                "ccb use <provider>".cyan()
            );
        }
    } else {
        eprintln!("{} Failed to remove provider \"{}\"", "❌".red(), target);
    }

    Ok(())
}
