//! CLI command handling
//!
//! One module per subcommand, each exposing `execute`.

pub mod add;
pub mod current;
pub mod install;
pub mod ls;
pub mod parser;
pub mod remove;
pub mod status;
pub mod switch;
pub mod uninstall;
pub mod update;

pub use parser::{Cli, Commands};

use crate::config::CLAUDE_PACKAGE;
use crate::system;
use colored::Colorize;

/// Shared guard: most commands only make sense once Claude Code is
/// installed. Prints the pointer to the given command when it is not.
pub(crate) fn require_claude_installed(hint: &str) -> bool {
    if system::check_global_package(CLAUDE_PACKAGE) {
        return true;
    }

    eprintln!("{} Claude Code is not installed", "❌".red());
    println!("Run `{}` first", hint.cyan());
    false
}
