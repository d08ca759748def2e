//! CLI command implementations

pub mod doctor;
pub mod serve;

use crate::cli::Settings;
use anyhow::{Context, Result};
use rgbridge_core::config::consts::file::CONFIG_FILE_NAME;
use rgbridge_core::{ConfigFile, ServerConfig};
use std::path::{Path, PathBuf};

/// Effective configuration and where it came from
#[derive(Debug)]
pub struct Resolved {
    pub config: ServerConfig,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
}

/// CLI flag > config file > built-in default
pub fn resolve_config(settings: &Settings) -> Result<Resolved> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    resolve_config_in(settings, &cwd)
}

fn resolve_config_in(settings: &Settings, cwd: &Path) -> Result<Resolved> {
    let source = match &settings.config {
        Some(path) => Some(path.clone()),
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let file = match &source {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let merged = file.overlay(overrides(settings));
    let config = ServerConfig::try_from(merged)?;

    Ok(Resolved { config, source })
}

fn overrides(settings: &Settings) -> ConfigFile {
    ConfigFile {
        allowed_dirs: settings.allow_dirs.clone(),
        max_result_chars: settings.max_result_chars,
        max_output_bytes: settings.max_output_bytes,
        rg_path: settings.rg_path.clone(),
        timeout_secs: settings.timeout_secs,
    }
}
