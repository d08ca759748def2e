use crate::cli::Settings;
use anyhow::{Context, Result};
use rgbridge_rg::{ResolveResult, resolve_rg};

/// Run the MCP server in stdio mode
pub fn run(settings: Settings) -> Result<()> {
    let resolved = super::resolve_config(&settings)?;
    let config = resolved.config;

    if let Some(path) = &resolved.source {
        tracing::debug!(config = %path.display(), "loaded config file");
    }

    // Keep serving: every tool call will report the spawn failure itself
    if let ResolveResult::NotFound { requested } = resolve_rg(&config.rg_path) {
        tracing::warn!(
            rg = %requested.display(),
            "ripgrep executable not found; tool calls will fail until it is installed"
        );
    }

    // We need a tokio runtime for the server
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(rgbridge_mcp::run_stdio_server(config))
}
