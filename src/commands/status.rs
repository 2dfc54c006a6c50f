//! status command - check system status and installation

use crate::config::CLAUDE_PACKAGE;
use crate::provider::{ProviderStore, ShellEnvironmentEditor};
use crate::system;
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;

pub fn execute(paths: &ConfigPaths) -> Result<()> {
    tracing::info!("Executing command: status");

    println!("System status check:");
    println!();

    let mut all_good = true;

    let node = system::check_node_version();
    if node.is_valid {
        println!(
            "{} Node.js {}",
            "✅".green(),
            node.version.as_deref().unwrap_or("unknown")
        );
    } else {
        match &node.version {
            Some(version) => eprintln!("{} Node.js {} (18+ required)", "❌".red(), version),
            None => eprintln!("{} Node.js is not installed", "❌".red()),
        }
        all_good = false;
    }

    let npm_ok = system::check_command("npm");
    if npm_ok {
        let version = system::command_version("npm").unwrap_or_else(|| "unknown".to_string());
        println!("{} npm {}", "✅".green(), version);
    } else {
        eprintln!("{} npm is not installed", "❌".red());
        all_good = false;
    }

    let claude_installed = system::check_global_package(CLAUDE_PACKAGE);
    if claude_installed {
        println!("{} Claude Code installed", "✅".green());
    } else {
        eprintln!("{} Claude Code is not installed", "❌".red());
        all_good = false;
    }

    println!();

    if all_good {
        println!("{} All components are installed correctly", "✅".green());
        println!();

        let store = ProviderStore::new(&paths.providers_file);
        let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());
        println!(
            "Current provider: {}",
            editor.current_provider_label(&store).cyan()
        );

        let provider_count = store.load()?.len() + 1; // +1 for the built-in
        if provider_count > 1 {
            println!();
            println!("Configured providers: {}", provider_count);
            println!("Run `{}` to list them", "ccb ls".cyan());
        }

        println!();
        println!("{} Claude Code is ready", "✅".green());
    } else {
        println!("{} Issues found:", "⚠️".yellow());
        if !node.is_valid {
            println!("  • Install Node.js 18 or newer");
        }
        if !npm_ok {
            println!("  • Install npm");
        }
        if !claude_installed {
            println!("  • Run `{}` to install Claude Code", "ccb install".cyan());
        }
    }

    println!();
    Ok(())
}
