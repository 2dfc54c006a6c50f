//! File logging
//!
//! Command invocations and failures are appended to ~/.claude/ccb.log.
//! Logging is best-effort: callers ignore a failed init so it can never
//! break a user-facing command.

use crate::config::{MAX_LOG_FILES, MAX_LOG_SIZE};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn rotated_name(log_path: &Path, index: u32) -> PathBuf {
    let mut name = log_path.as_os_str().to_os_string();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

/// Shift ccb.log -> ccb.log.1 -> ccb.log.2 once the active log exceeds
/// `max_size`; the oldest file is dropped.
fn rotate_if_needed(log_path: &Path, max_size: u64, max_files: u32) -> std::io::Result<()> {
    let metadata = match fs::metadata(log_path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(()), // nothing to rotate
    };

    if metadata.len() <= max_size {
        return Ok(());
    }

    for index in (1..max_files).rev() {
        let old = rotated_name(log_path, index);
        if !old.exists() {
            continue;
        }
        if index == max_files - 1 {
            fs::remove_file(&old)?;
        } else {
            fs::rename(&old, rotated_name(log_path, index + 1))?;
        }
    }

    fs::rename(log_path, rotated_name(log_path, 1))
}

/// Install a file-only tracing subscriber writing to `log_file`.
///
/// The filter honors RUST_LOG and defaults to info for libraries with
/// debug for this crate.
pub fn init_logger(log_file: &Path) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ccb=debug"));

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    rotate_if_needed(log_file, MAX_LOG_SIZE, MAX_LOG_FILES)?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let file_layer = fmt::layer()
        .with_writer(std::sync::Arc::new(file))
        .with_target(true)
        .with_ansi(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
