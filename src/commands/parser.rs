//! CLI argument parsing and routing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ccb",
    version,
    about = "Claude Code Bridge - install Claude Code and switch between API providers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install Claude Code and configure a provider
    Install {
        /// Provider name (selected interactively when omitted)
        provider: Option<String>,

        /// API key for the provider (prompted when omitted)
        api_key: Option<String>,

        /// Custom base URL for the provider
        #[arg(short = 'u', long)]
        base_url: Option<String>,

        /// Force reinstallation
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall Claude Code and remove all configuration
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Switch to the given API provider
    #[command(name = "use")]
    Use {
        /// Provider name, fuzzy-matched (selected interactively when omitted)
        provider: Option<String>,
    },

    /// List all configured providers
    #[command(alias = "list")]
    Ls,

    /// Show the currently active provider
    Current,

    /// Add a new provider configuration
    Add {
        /// Provider name
        name: String,

        /// API key for the provider
        api_key: String,

        /// Base URL for the provider
        #[arg(short = 'u', long)]
        base_url: Option<String>,
    },

    /// Remove a provider configuration
    #[command(alias = "rm")]
    Remove {
        /// Provider name, fuzzy-matched
        provider: String,
    },

    /// Check system status and installation
    Status,

    /// Update Claude Code to the latest version
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_use_and_aliases_parse() {
        let cli = Cli::try_parse_from(["ccb", "use", "moonshot"]).unwrap();
        assert!(matches!(cli.command, Commands::Use { provider: Some(p) } if p == "moonshot"));

        let cli = Cli::try_parse_from(["ccb", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Ls));

        let cli = Cli::try_parse_from(["ccb", "rm", "moonshot"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { provider } if provider == "moonshot"));
    }

    #[test]
    fn test_install_accepts_base_url_flag() {
        let cli =
            Cli::try_parse_from(["ccb", "install", "Acme", "sk-key", "-u", "http://acme"]).unwrap();
        match cli.command {
            Commands::Install {
                provider,
                api_key,
                base_url,
                force,
            } => {
                assert_eq!(provider.as_deref(), Some("Acme"));
                assert_eq!(api_key.as_deref(), Some("sk-key"));
                assert_eq!(base_url.as_deref(), Some("http://acme"));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
