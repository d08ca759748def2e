use crate::handlers::common::run::{Operation, guard, run};
use crate::handlers::{READ_ONLY, ToolExt};
use crate::server::RgBridgeServer;
use futures_util::FutureExt;
use rgbridge_rg::{
    build_count_command, build_replace_command, build_search_command, build_search_files_command,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::common::FromContextPart,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
};
use std::borrow::Cow;

pub mod types;

pub use types::{CountArgs, ReplaceArgs, SearchArgs, SearchFilesArgs};

pub const NO_MATCHES: &str = "No matches found.";
pub const NO_MATCHING_FILES: &str = "No matching files found.";

/// `search`, `search-and-replace`, `search-count`, `search-files`
pub struct SearchTool;

impl SearchTool {
    // For integration tests
    pub async fn test_search(
        server: &RgBridgeServer,
        args: SearchArgs,
    ) -> Result<CallToolResult, McpError> {
        Self::search(server, args).await
    }

    pub async fn test_search_and_replace(
        server: &RgBridgeServer,
        args: ReplaceArgs,
    ) -> Result<CallToolResult, McpError> {
        Self::search_and_replace(server, args).await
    }

    pub async fn test_search_count(
        server: &RgBridgeServer,
        args: CountArgs,
    ) -> Result<CallToolResult, McpError> {
        Self::search_count(server, args).await
    }

    pub async fn test_search_files(
        server: &RgBridgeServer,
        args: SearchFilesArgs,
    ) -> Result<CallToolResult, McpError> {
        Self::search_files(server, args).await
    }

    pub fn into_router(self) -> ToolRouter<RgBridgeServer> {
        ToolRouter::new()
            .with_route(ToolRoute::new_dyn(Self::search_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<SearchArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::search(server, args).await
                }
                .boxed()
            }))
            .with_route(ToolRoute::new_dyn(Self::replace_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<ReplaceArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::search_and_replace(server, args).await
                }
                .boxed()
            }))
            .with_route(ToolRoute::new_dyn(Self::count_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<CountArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::search_count(server, args).await
                }
                .boxed()
            }))
            .with_route(ToolRoute::new_dyn(Self::search_files_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<SearchFilesArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::search_files(server, args).await
                }
                .boxed()
            }))
    }

    fn search_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("search"),
            "Search file contents for a pattern using ripgrep. Supports regex, literal strings, multiline matching, and various filtering options.",
            rmcp::handler::server::common::schema_for_type::<SearchArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    fn replace_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("search-and-replace"),
            "Read-only preview of search-and-replace results using ripgrep. Does NOT modify files. Useful for previewing replacements and testing capture groups ($1, $2, ${name}).",
            rmcp::handler::server::common::schema_for_type::<ReplaceArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    fn count_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("search-count"),
            "Count pattern matches per file using ripgrep. Returns file paths with their match counts.",
            rmcp::handler::server::common::schema_for_type::<CountArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    fn search_files_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("search-files"),
            "List files that match (or do not match) a pattern using ripgrep. Returns file paths only, no line content.",
            rmcp::handler::server::common::schema_for_type::<SearchFilesArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    pub async fn search(
        server: &RgBridgeServer,
        mut args: SearchArgs,
    ) -> Result<CallToolResult, McpError> {
        args.path = match guard(&server.context, "search", &args.path) {
            Ok(path) => path,
            Err(rejected) => return Ok(rejected),
        };
        let max_characters = args.max_characters;
        let command = build_search_command(&args.into());
        run(
            &server.context,
            Operation {
                tool: "search",
                command,
                empty_message: NO_MATCHES,
                stats: true,
                max_characters,
            },
        )
        .await
    }

    pub async fn search_and_replace(
        server: &RgBridgeServer,
        mut args: ReplaceArgs,
    ) -> Result<CallToolResult, McpError> {
        args.path = match guard(&server.context, "search-and-replace", &args.path) {
            Ok(path) => path,
            Err(rejected) => return Ok(rejected),
        };
        let max_characters = args.max_characters;
        let command = build_replace_command(&args.into());
        run(
            &server.context,
            Operation {
                tool: "search-and-replace",
                command,
                empty_message: NO_MATCHES,
                stats: false,
                max_characters,
            },
        )
        .await
    }

    pub async fn search_count(
        server: &RgBridgeServer,
        mut args: CountArgs,
    ) -> Result<CallToolResult, McpError> {
        args.path = match guard(&server.context, "search-count", &args.path) {
            Ok(path) => path,
            Err(rejected) => return Ok(rejected),
        };
        let max_characters = args.max_characters;
        let command = build_count_command(&args.into());
        run(
            &server.context,
            Operation {
                tool: "search-count",
                command,
                empty_message: NO_MATCHES,
                stats: false,
                max_characters,
            },
        )
        .await
    }

    pub async fn search_files(
        server: &RgBridgeServer,
        mut args: SearchFilesArgs,
    ) -> Result<CallToolResult, McpError> {
        args.path = match guard(&server.context, "search-files", &args.path) {
            Ok(path) => path,
            Err(rejected) => return Ok(rejected),
        };
        let max_characters = args.max_characters;
        let command = build_search_files_command(&args.into());
        run(
            &server.context,
            Operation {
                tool: "search-files",
                command,
                empty_message: NO_MATCHING_FILES,
                stats: false,
                max_characters,
            },
        )
        .await
    }
}
