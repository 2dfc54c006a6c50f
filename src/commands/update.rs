//! update command - update Claude Code to the latest version

use super::require_claude_installed;
use crate::config::CLAUDE_PACKAGE;
use crate::system;
use anyhow::Result;
use colored::Colorize;

pub fn execute() -> Result<()> {
    tracing::info!("Executing command: update");

    if !require_claude_installed("ccb install") {
        std::process::exit(1);
    }

    println!("{} Updating Claude Code...", "→".cyan());

    match system::update_global_package(CLAUDE_PACKAGE) {
        Ok(()) => {
            println!(
                "{} Claude Code updated to the latest version",
                "✅".green()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} Update failed: {}", "❌".red(), err);
            std::process::exit(1);
        }
    }
}
