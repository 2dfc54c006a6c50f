//! use command - switch to another API provider

use super::require_claude_installed;
use crate::config::BUILTIN_PROVIDER;
use crate::error::CcbError;
use crate::provider::{fuzzy_match, Provider, ProviderStore, ShellEnvironmentEditor};
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Password, Select};

pub fn execute(paths: &ConfigPaths, provider: Option<String>) -> Result<()> {
    tracing::info!("Executing command: use");

    if !require_claude_installed("ccb install") {
        std::process::exit(1);
    }

    let store = ProviderStore::new(&paths.providers_file);
    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());
    let names = store.list_names()?;

    let target = match provider {
        None => {
            if names.len() == 1 {
                println!("{} No configured providers to switch to", "⚠️".yellow());
                println!("Run `{}` to add one", "ccb add <name> <api-key>".cyan());
                return Ok(());
            }

            let index = Select::new()
                .with_prompt("Select the provider to switch to")
                .items(&names)
                .default(0)
                .interact()?;
            names[index].clone()
        }
        Some(input) => {
            let matches = fuzzy_match(&input, &names);
            match matches.len() {
                0 => {
                    eprintln!("{} No provider matches \"{}\"", "❌".red(), input);
                    println!("Available providers:");
                    for name in &names {
                        println!("  • {}", name);
                    }
                    println!("Run `{}` for details", "ccb ls".cyan());
                    std::process::exit(1);
                }
                1 => {
                    let resolved = matches[0].clone();
                    if resolved != input {
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
                        .with_prompt("Select the provider to use")
                        .items(&matches)
                        .default(0)
                        .interact()?;
                    matches[index].clone()
                }
            }
        }
    };

    if target == BUILTIN_PROVIDER {
        // Keep an already-exported key when switching back; only prompt
        // when the shell config has no key at all.
        if editor.has_api_key_line() {
            if let Some(api_key) = editor.existing_api_key() {
                editor.apply(Some(&Provider {
                    name: BUILTIN_PROVIDER.to_string(),
                    api_key,
                    base_url: None,
                }))?;
            }
        } else {
            let api_key = Password::new()
                .with_prompt("Enter your Anthropic API key")
                .interact()?;
            editor.apply(Some(&Provider {
                name: BUILTIN_PROVIDER.to_string(),
                api_key,
                base_url: None,
            }))?;
        }

        println!("{} Switched to Anthropic (official API)", "✅".green());
        println!(
            "Restart your terminal or `source` your shell config file for the change to take effect"
        );
        return Ok(());
    }

    let resolved = match store.get(&target)? {
        Some(provider) => provider,
        None => {
            println!("Run `{}` to see available providers", "ccb ls".cyan());
            return Err(CcbError::NotFound(target).into());
        }
    };

    editor.apply(Some(&resolved))?;
    println!("{} Switched to provider: {}", "✅".green(), target);
    println!(
        "Restart your terminal or `source` your shell config file for the change to take effect"
    );

    Ok(())
}
