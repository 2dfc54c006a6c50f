//! uninstall command - remove Claude Code and all configuration

use crate::config::CLAUDE_PACKAGE;
use crate::provider::ShellEnvironmentEditor;
use crate::system;
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;

pub fn execute(paths: &ConfigPaths, force: bool) -> Result<()> {
    tracing::info!("Executing command: uninstall");

    let confirmed = force
        || Confirm::new()
            .with_prompt(
                "Uninstall Claude Code and delete all configuration? This cannot be undone.",
            )
            .default(false)
            .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".yellow());
        return Ok(());
    }

    let mut has_errors = false;

    if system::check_global_package(CLAUDE_PACKAGE) {
        println!("{} Uninstalling Claude Code...", "→".cyan());
        match system::uninstall_global_package(CLAUDE_PACKAGE) {
            Ok(()) => println!("{} Claude Code uninstalled", "✅".green()),
            Err(err) => {
                eprintln!("{} Failed to uninstall Claude Code: {}", "❌".red(), err);
                has_errors = true;
            }
        }
    } else {
        println!("{} Claude Code is not currently installed", "ℹ️".blue());
    }

    println!(
        "{} Removing environment variables from the shell config...",
        "→".cyan()
    );
    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());
    match editor.clear() {
        Ok(()) => println!("{} Environment variables removed", "✅".green()),
        Err(err) => {
            tracing::warn!("Failed to clear shell environment: {}", err);
            println!(
                "{} Could not remove all environment variables, check your shell config manually",
                "⚠️".yellow()
            );
            has_errors = true;
        }
    }

    if paths.claude_dir.exists() {
        println!("{} Removing the Claude configuration directory...", "→".cyan());
        match fs::remove_dir_all(&paths.claude_dir) {
            Ok(()) => println!("{} Removed {}", "✅".green(), paths.claude_dir.display()),
            Err(err) => {
                eprintln!(
                    "{} Could not remove {}: {}",
                    "❌".red(),
                    paths.claude_dir.display(),
                    err
                );
                has_errors = true;
            }
        }
    } else {
        println!(
            "{} Configuration directory {} does not exist",
            "ℹ️".blue(),
            paths.claude_dir.display()
        );
    }

    if paths.settings_file.exists() {
        println!("{} Removing the Claude settings file...", "→".cyan());
        match fs::remove_file(&paths.settings_file) {
            Ok(()) => println!("{} Removed {}", "✅".green(), paths.settings_file.display()),
            Err(err) => {
                eprintln!(
                    "{} Could not remove {}: {}",
                    "❌".red(),
                    paths.settings_file.display(),
                    err
                );
                has_errors = true;
            }
        }
    } else {
        println!(
            "{} Settings file {} does not exist",
            "ℹ️".blue(),
            paths.settings_file.display()
        );
    }

    if has_errors {
        println!("{} Uninstall finished with warnings", "⚠️".yellow());
        println!("Some files or configuration may need manual cleanup");
    } else {
        println!("{} Claude Code fully uninstalled", "✅".green());
    }
    println!("Restart your terminal or `source` your shell config file to finish the uninstall");

    Ok(())
}
