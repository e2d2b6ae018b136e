//! Centralized configuration paths for brsq
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/brsq/`
//! - Windows: `%APPDATA%\brsq\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "brsq";

/// Base config directory for brsq
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/brsq`
///   - Else: `~/.config/brsq`
///
/// Windows:
///   - `%APPDATA%\brsq`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/brsq/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/brsq/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Returns the most recent log file in `~/.config/brsq/logs/`
/// (e.g., `brsq.log.2026-01-07`)
///
/// The logging system uses daily rotation, creating files like `brsq.log.YYYY-MM-DD`.
/// This function scans the logs directory and returns the newest file.
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;

    // Try to find the most recent brsq.log.YYYY-MM-DD file
    let mut log_files: Vec<PathBuf> = fs::read_dir(&logs_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("brsq.log"))
                .unwrap_or(false)
        })
        .collect();

    // Sort by filename in descending order (newest first)
    // YYYY-MM-DD format sorts naturally
    log_files.sort_by(|a, b| b.cmp(a));

    // Return the most recent log file, or fallback to brsq.log if none exist
    log_files
        .into_iter()
        .next()
        .or_else(|| Some(logs_dir.join("brsq.log")))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

/// Ensure full config structure (config dir + logs)
pub fn ensure_all_config_dirs() {
    match ensure_logs_dir() {
        Ok(logs) => {
            tracing::info!("Config directories ready (logs dir: {})", logs.display());
        }
        Err(e) => {
            tracing::warn!("Failed to ensure config directories: {}", e);
        }
    }
}
