//! Guard → execute → format pipeline shared by every tool

use super::format::format_result;
use crate::context::McpContext;
use crate::errors;
use rgbridge_core::validate_path;
use rgbridge_rg::{ExecResult, RgCommand, execute, extract_stats};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use tracing::{debug, warn};

/// Check `path` against the allowed roots.
///
/// Returns the path the engine must receive: the normalized form when roots
/// are configured, so `..` is never reinterpreted through a symlink, and the
/// caller's spelling otherwise. A rejection is already a finished tool result.
pub(crate) fn guard(
    context: &McpContext,
    tool: &'static str,
    path: &str,
) -> Result<String, CallToolResult> {
    match validate_path(path, &context.config.allowed_roots) {
        Ok(resolved) => Ok(resolved.to_string_lossy().into_owned()),
        Err(err) => {
            warn!(tool, code = err.code(), %err, "request rejected");
            Err(errors::tool_failure(&err))
        }
    }
}

/// One tool invocation, ready to run
pub(crate) struct Operation {
    pub tool: &'static str,
    pub command: RgCommand,
    pub empty_message: &'static str,
    /// Split the `--stats` block into a `[summary]` line
    pub stats: bool,
    /// Per-call budget; falls back to the configured default
    pub max_characters: Option<usize>,
}

pub(crate) async fn run(
    context: &McpContext,
    op: Operation,
) -> Result<CallToolResult, McpError> {
    let config = &context.config;

    let command = op.command.with_program(&config.rg_path);
    let result = match execute(&command, &context.limits()).await {
        Ok(result) => result,
        Err(err) => {
            debug!(tool = op.tool, code = err.code(), %err, "engine failed");
            return Ok(errors::tool_failure(&err));
        }
    };

    debug!(
        tool = op.tool,
        exit_code = result.exit_code,
        duration_ms = result.duration_ms,
        truncated_by_limit = result.truncated_by_limit,
        "tool finished"
    );

    let max_characters = op.max_characters.or(config.default_max_characters);
    let text = if op.stats {
        let split = extract_stats(&result.stdout);
        // Without a payload only the empty message is returned
        let summary = split.summary.filter(|_| !split.payload.is_empty());
        let result = ExecResult {
            stdout: split.payload,
            ..result
        };
        format_result(
            &result,
            op.empty_message,
            max_characters,
            summary.as_deref(),
        )
    } else {
        format_result(&result, op.empty_message, max_characters, None)
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
