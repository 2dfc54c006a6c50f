//! install command - install Claude Code and configure a provider

use crate::config::{BUILTIN_PROVIDER, CLAUDE_PACKAGE, DEFAULT_PRESET_NAME, DEFAULT_PRESET_URL};
use crate::provider::{Provider, ProviderStore, ShellEnvironmentEditor};
use crate::settings::ClaudeSettingsFile;
use crate::system;
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};

pub fn execute(
    paths: &ConfigPaths,
    provider: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    force: bool,
) -> Result<()> {
    tracing::info!("Executing command: install");
    println!("{} Installing Claude Code...", "→".cyan());

    let node = system::check_node_version();
    if !node.is_valid {
        match &node.version {
            Some(version) => eprintln!(
                "{} Node.js {} does not meet the requirement, Node.js 18 or newer is needed",
                "❌".red(),
                version
            ),
            None => eprintln!(
                "{} Node.js not found, install Node.js 18 or newer first",
                "❌".red()
            ),
        }
        std::process::exit(1);
    }
    println!(
        "{} Node.js {} meets the requirement",
        "✅".green(),
        node.version.as_deref().unwrap_or("unknown")
    );

    if !system::check_command("npm") {
        eprintln!("{} npm is not installed", "❌".red());
        std::process::exit(1);
    }
    let npm_version = system::command_version("npm").unwrap_or_else(|| "unknown".to_string());
    println!("{} npm {} detected", "✅".green(), npm_version);

    if system::check_global_package(CLAUDE_PACKAGE) && !force {
        println!("{} Claude Code is already installed", "⚠️".yellow());
        let reinstall = Confirm::new()
            .with_prompt("Reinstall?")
            .default(false)
            .interact()?;

        if reinstall {
            install_claude_code(paths)?;
        } else {
            println!(
                "{} Skipping installation, continuing with provider setup...",
                "ℹ️".blue()
            );
        }
    } else {
        install_claude_code(paths)?;
    }

    configure_provider(paths, provider, api_key, base_url)?;

    println!("{} Claude Code installed and configured!", "✅".green());
    println!(
        "Restart your terminal or `source` your shell config file for the changes to take effect"
    );
    println!("Run `{}` to see the active provider", "ccb current".cyan());
    Ok(())
}

fn install_claude_code(paths: &ConfigPaths) -> Result<()> {
    println!("{} Installing {}...", "→".cyan(), CLAUDE_PACKAGE);
    if let Err(err) = system::install_global_package(CLAUDE_PACKAGE) {
        eprintln!("{} Claude Code installation failed: {}", "❌".red(), err);
        std::process::exit(1);
    }
    println!("{} Claude Code installed", "✅".green());

    println!("{} Marking onboarding as complete...", "→".cyan());
    ClaudeSettingsFile::new(&paths.settings_file).set_onboarding_complete()?;
    println!("{} Claude Code configured", "✅".green());
    Ok(())
}

fn non_empty(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Value cannot be empty")
    } else {
        Ok(())
    }
}

fn configure_provider(
    paths: &ConfigPaths,
    provider: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
) -> Result<()> {
    let (name, mut base_url) = match provider {
        Some(name) => (name, base_url),
        None => {
            let choices = [
                "Anthropic (official API)",
                "Moonshot AI (compatible API, latest Kimi models)",
                "Custom provider",
            ];
            let index = Select::new()
                .with_prompt("Select an API provider")
                .items(&choices)
                .default(0)
                .interact()?;

            match index {
                0 => (BUILTIN_PROVIDER.to_string(), None),
                1 => (
                    DEFAULT_PRESET_NAME.to_string(),
                    Some(DEFAULT_PRESET_URL.to_string()),
                ),
                _ => {
                    let custom_name: String = Input::new()
                        .with_prompt("Provider name")
                        .validate_with(non_empty)
                        .interact_text()?;
                    let custom_url: String = Input::new()
                        .with_prompt("Base URL")
                        .validate_with(non_empty)
                        .interact_text()?;
                    (custom_name, Some(custom_url))
                }
            }
        }
    };

    // The preset keeps its well-known URL even when the name was passed
    // on the command line without one.
    if name == DEFAULT_PRESET_NAME && base_url.is_none() {
        base_url = Some(DEFAULT_PRESET_URL.to_string());
    }

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new()
            .with_prompt(format!("Enter the API key for {}", name))
            .interact()?,
    };

    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());

    // The built-in provider is never persisted; only its key is exported.
    if name == BUILTIN_PROVIDER {
        editor.apply(Some(&Provider {
            name: name.clone(),
            api_key,
            base_url: None,
        }))?;
        println!("{} Configured to use the {} API", "✅".green(), name);
        return Ok(());
    }

    let store = ProviderStore::new(&paths.providers_file);
    let provider = Provider {
        name: name.clone(),
        api_key,
        base_url,
    };
    store.add_or_replace(&provider)?;
    editor.apply(Some(&provider))?;

    println!("{} Configured to use the {} API", "✅".green(), name);
    Ok(())
}
