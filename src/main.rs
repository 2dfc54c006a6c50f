use ccb::commands::{self, Cli, Commands};
use ccb::utils::config_paths::ConfigPaths;
use ccb::utils::logger;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = match ConfigPaths::new() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{} {}", "❌".red(), err);
            return ExitCode::from(1);
        }
    };

    // Best-effort file logging; a logging failure never blocks a command.
    let _ = paths.ensure_dirs();
    let _ = logger::init_logger(&paths.log_file);

    match run(&paths, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Command failed: {:#}", err);
            eprintln!("{} {}", "❌".red(), err);
            ExitCode::from(1)
        }
    }
}

fn run(paths: &ConfigPaths, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Install {
            provider,
            api_key,
            base_url,
            force,
        } => commands::install::execute(paths, provider, api_key, base_url, force),
        Commands::Uninstall { force } => commands::uninstall::execute(paths, force),
        Commands::Use { provider } => commands::switch::execute(paths, provider),
        Commands::Ls => commands::ls::execute(paths),
        Commands::Current => commands::current::execute(paths),
        Commands::Add {
            name,
            api_key,
            base_url,
        } => commands::add::execute(paths, name, api_key, base_url),
        Commands::Remove { provider } => commands::remove::execute(paths, provider),
        Commands::Status => commands::status::execute(paths),
        Commands::Update => commands::update::execute(),
    }
}
