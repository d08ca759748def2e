use rgbridge_core::RgBridgeError;
use rmcp::model::{CallToolResult, Content};

/// Tool-level failure: `is_error = true` with a single `Error: <message>` text.
///
/// Guard and engine failures are reported this way, never as protocol errors.
pub fn tool_failure(error: &RgBridgeError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}
