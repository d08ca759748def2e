//! MCP server exposing ripgrep as six read-only tools.
//!
//! Every tool funnels through the same pipeline: validate the requested path
//! against the allowed roots, build an `rg` argument vector, execute it under
//! the byte and time ceilings, then format the output for the client.

// Re-export rmcp for convenience
pub use rmcp;

pub mod context;
pub mod errors;
pub mod handlers;
pub mod server;

pub use context::McpContext;
pub use server::{RgBridgeServer, run_stdio_server};
