//! Doctor command - engine and configuration health check

use crate::cli::Settings;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use rgbridge_core::ServerConfig;
use rgbridge_rg::{ResolveResult, resolve_rg};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Doctor command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct DoctorOutput {
    schema_version: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<EffectiveConfig>,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    allowed_dirs: Vec<String>,
    max_result_chars: Option<usize>,
    max_output_bytes: usize,
    rg_path: String,
    timeout_secs: Option<u64>,
}

impl EffectiveConfig {
    fn new(config: &ServerConfig, source: Option<String>) -> Self {
        Self {
            source,
            allowed_dirs: config
                .allowed_roots
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            max_result_chars: config.default_max_characters,
            max_output_bytes: config.max_output_bytes,
            rg_path: config.rg_path.display().to_string(),
            timeout_secs: config.timeout.map(|t| t.as_secs()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// Run the health check
///
/// Always returns Ok(()) - doctor reports problems, it does not fail on them
pub fn run(settings: Settings, json: bool) -> Result<()> {
    let output = collect(&settings);

    if json {
        let json_str = serde_json::to_string_pretty(&output)?;
        println!("{}", json_str);
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn collect(settings: &Settings) -> DoctorOutput {
    let mut checks = Vec::new();

    let resolved = match super::resolve_config(settings) {
        Ok(resolved) => {
            let message = match &resolved.source {
                Some(path) => format!("{} is valid", path.display()),
                None => "No config file; using flags and defaults".to_string(),
            };
            checks.push(Check {
                id: "config_valid".to_string(),
                name: "Configuration".to_string(),
                status: CheckStatus::Ok,
                message,
                details: None,
            });
            Some(resolved)
        }
        Err(e) => {
            checks.push(Check {
                id: "config_valid".to_string(),
                name: "Configuration".to_string(),
                status: CheckStatus::Error,
                message: format!("Failed to load config: {:#}", e),
                details: None,
            });
            None
        }
    };

    let Some(resolved) = resolved else {
        return finish(None, checks);
    };
    let config = &resolved.config;

    checks.push(engine_check(config));
    checks.push(roots_check(config));

    let source = resolved.source.as_ref().map(|p| p.display().to_string());
    finish(Some(EffectiveConfig::new(config, source)), checks)
}

fn finish(config: Option<EffectiveConfig>, checks: Vec<Check>) -> DoctorOutput {
    DoctorOutput {
        schema_version: "1.0".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        config,
        checks,
    }
}

fn engine_check(config: &ServerConfig) -> Check {
    match resolve_rg(&config.rg_path) {
        ResolveResult::Found(info) => {
            let mut details = BTreeMap::new();
            details.insert(
                "path".to_string(),
                serde_json::Value::String(info.path.display().to_string()),
            );
            details.insert(
                "source".to_string(),
                serde_json::Value::String(info.source.to_string()),
            );
            if let Some(version) = &info.version {
                details.insert(
                    "version".to_string(),
                    serde_json::Value::String(version.clone()),
                );
            }

            let (status, message) = match &info.version {
                Some(version) => (CheckStatus::Ok, format!("ripgrep {} available", version)),
                None => (
                    CheckStatus::Warning,
                    "ripgrep found but `--version` could not be read".to_string(),
                ),
            };

            Check {
                id: "rg_available".to_string(),
                name: "ripgrep".to_string(),
                status,
                message,
                details: Some(details),
            }
        }
        ResolveResult::NotFound { requested } => {
            let mut details = BTreeMap::new();
            details.insert(
                "requested".to_string(),
                serde_json::Value::String(requested.display().to_string()),
            );

            Check {
                id: "rg_available".to_string(),
                name: "ripgrep".to_string(),
                status: CheckStatus::Error,
                message: format!("{} not found", requested.display()),
                details: Some(details),
            }
        }
    }
}

fn roots_check(config: &ServerConfig) -> Check {
    if config.allowed_roots.is_empty() {
        return Check {
            id: "allowed_dirs".to_string(),
            name: "Allowed directories".to_string(),
            status: CheckStatus::Warning,
            message: "No allowed directories configured; every path is searchable".to_string(),
            details: None,
        };
    }

    let missing: Vec<serde_json::Value> = config
        .allowed_roots
        .iter()
        .filter(|root| !root.is_dir())
        .map(|root| serde_json::Value::String(root.display().to_string()))
        .collect();

    if missing.is_empty() {
        Check {
            id: "allowed_dirs".to_string(),
            name: "Allowed directories".to_string(),
            status: CheckStatus::Ok,
            message: format!("{} allowed directories", config.allowed_roots.len()),
            details: None,
        }
    } else {
        let mut details = BTreeMap::new();
        details.insert("missing".to_string(), serde_json::Value::Array(missing));
        Check {
            id: "allowed_dirs".to_string(),
            name: "Allowed directories".to_string(),
            status: CheckStatus::Warning,
            message: "Some allowed directories do not exist".to_string(),
            details: Some(details),
        }
    }
}

/// Print human-readable output
fn print_human_readable(output: &DoctorOutput) {
    println!("{}", "rgbridge Health Check".bold());
    println!();

    if let Some(config) = &output.config {
        println!("{}", "Configuration:".bold());
        if let Some(source) = &config.source {
            println!("  File: {}", source);
        }
        if config.allowed_dirs.is_empty() {
            println!("  Allowed directories: (unrestricted)");
        } else {
            println!("  Allowed directories: {}", config.allowed_dirs.join(", "));
        }
        match config.max_result_chars {
            Some(n) => println!("  Max result chars: {}", n),
            None => println!("  Max result chars: (none)"),
        }
        println!("  Max output bytes: {}", config.max_output_bytes);
        println!("  rg path: {}", config.rg_path);
        match config.timeout_secs {
            Some(secs) => println!("  Timeout: {}s", secs),
            None => println!("  Timeout: (none)"),
        }
        println!();
    }

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);

        if let Some(details) = &check.details {
            for (key, value) in details {
                println!("      {}: {}", key, value);
            }
        }
    }

    println!();
    println!("Timestamp: {}", output.timestamp);
}
