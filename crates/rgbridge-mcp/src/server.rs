use crate::context::McpContext;
use crate::handlers::files::FilesTool;
use crate::handlers::search::SearchTool;
use rgbridge_core::ServerConfig;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
    transport::stdio,
};

const INSTRUCTIONS: &str = "rgbridge exposes ripgrep as read-only tools. Use 'search' for matching lines, \
'search-count' for per-file counts, 'search-files' or 'list-files' for paths, \
'search-and-replace' to preview replacements and 'list-file-types' for valid fileType values.";

#[derive(Clone)]
pub struct RgBridgeServer {
    pub context: McpContext,
    pub tool_router: ToolRouter<RgBridgeServer>,
}

impl RgBridgeServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            context: McpContext::new(config),
            tool_router: SearchTool.into_router() + FilesTool.into_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for RgBridgeServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(INSTRUCTIONS.into());

        let mut implementation = Implementation::from_build_env();
        implementation.name = "rgbridge".into();
        implementation.version = env!("CARGO_PKG_VERSION").into();
        info.server_info = implementation;
        info
    }
}

/// Serve MCP over stdin/stdout until the client disconnects
pub async fn run_stdio_server(config: ServerConfig) -> anyhow::Result<()> {
    let server = RgBridgeServer::new(config);
    tracing::info!(
        allowed_roots = server.context.config.allowed_roots.len(),
        rg = %server.context.config.rg_path.display(),
        "starting rgbridge MCP server on stdio"
    );

    let running = server.serve(stdio()).await?;
    running.waiting().await?;

    tracing::info!("rgbridge MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let server = RgBridgeServer::new(ServerConfig::default());
        let info = server.get_info();

        assert_eq!(info.server_info.name, "rgbridge");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("list-file-types"));
    }
}
