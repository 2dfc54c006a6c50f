//! Runtime and package-manager probes
//!
//! Detects Node.js and npm, and runs global npm operations for the
//! managed Claude Code package. All probes degrade to "not available"
//! rather than failing.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Result of the Node.js version probe
#[derive(Debug, Clone)]
pub struct NodeCheck {
    pub version: Option<String>,
    pub is_valid: bool,
}

/// Whether a command is available on PATH
pub fn check_command(command: &str) -> bool {
    which::which(command).is_ok()
}

/// A tool's `--version` output, trimmed
pub fn command_version(command: &str) -> Option<String> {
    Command::new(command)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty())
}

fn node_major(version: &str) -> Option<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
}

/// Check the installed Node.js version against the minimum supported major
pub fn check_node_version() -> NodeCheck {
    let version = match command_version("node") {
        Some(version) => version,
        None => {
            return NodeCheck {
                version: None,
                is_valid: false,
            }
        }
    };

    NodeCheck {
        is_valid: node_major(&version).is_some_and(|major| major >= crate::config::MIN_NODE_MAJOR),
        version: Some(version),
    }
}

fn run_npm(args: &[&str]) -> Result<()> {
    let output = Command::new("npm")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run npm {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("npm {} failed: {}", args.join(" "), stderr.trim());
    }

    Ok(())
}

pub fn install_global_package(package: &str) -> Result<()> {
    run_npm(&["install", "-g", package])
}

pub fn update_global_package(package: &str) -> Result<()> {
    run_npm(&["update", "-g", package])
}

pub fn uninstall_global_package(package: &str) -> Result<()> {
    run_npm(&["uninstall", "-g", package])
}

/// Whether the package is present in the global npm tree
pub fn check_global_package(package: &str) -> bool {
    Command::new("npm")
        .args(["list", "-g", package, "--depth=0"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
