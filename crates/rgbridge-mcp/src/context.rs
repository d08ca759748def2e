use rgbridge_core::ServerConfig;
use rgbridge_rg::ExecLimits;
use std::sync::Arc;

/// Per-process state reachable from every handler
#[derive(Clone, Debug)]
pub struct McpContext {
    pub config: Arc<ServerConfig>,
}

impl McpContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn limits(&self) -> ExecLimits {
        ExecLimits::from(self.config.as_ref())
    }
}
