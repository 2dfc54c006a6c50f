//! ls command - list all configured providers

use super::require_claude_installed;
use crate::config::BUILTIN_PROVIDER;
use crate::provider::{ProviderStore, ShellEnvironmentEditor};
use crate::utils::config_paths::ConfigPaths;
use anyhow::Result;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

pub fn execute(paths: &ConfigPaths) -> Result<()> {
    tracing::info!("Executing command: ls");

    if !require_claude_installed("ccb install") {
        return Ok(());
    }

    let store = ProviderStore::new(&paths.providers_file);
    let editor = ShellEnvironmentEditor::new(paths.home_dir.clone());

    let current = editor.current_provider_label(&store);
    let providers = store.load()?;

    println!("Available providers:");
    println!();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    table.add_row(Row::new(vec![
        Cell::new(""),
        Cell::new("NAME").style_spec("b"),
        Cell::new("BASE URL").style_spec("b"),
    ]));

    let marker = |active: bool| if active { "→" } else { " " };

    table.add_row(Row::new(vec![
        Cell::new(marker(current.contains(BUILTIN_PROVIDER))),
        Cell::new(BUILTIN_PROVIDER),
        Cell::new("official API defaults"),
    ]));

    for (name, record) in &providers {
        table.add_row(Row::new(vec![
            Cell::new(marker(current.contains(name.as_str()))),
            Cell::new(name),
            Cell::new(record.base_url.as_deref().unwrap_or("-")),
        ]));
    }

    table.printstd();
    println!();
    println!("Current provider: {}", current.cyan());
    println!();
    println!("Use `{}` to switch providers", "ccb use <provider>".cyan());

    Ok(())
}
