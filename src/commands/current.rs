//! current command - show the active provider

use crate::config::CLAUDE_PACKAGE;
use crate::provider::{ProviderStore, ShellEnvironmentEditor};
use crate::system;
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;

pub fn execute(paths: &ConfigPaths) -> Result<()> {
    tracing::info!("Executing command: current");

    if !system::check_global_package(CLAUDE_PACKAGE) {
        println!("Claude Code: not installed");
        println!();
        println!(
            "Run `{}` to install and configure Claude Code",
            "ccb install".cyan()
        );
        return Ok(());
    }

    let store = ProviderStore::new(&paths.providers_file);
    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());

    println!(
        "Current provider: {}",
        editor.current_provider_label(&store).cyan()
    );

    Ok(())
}
