use crate::handlers::common::run::{Operation, guard, run};
use crate::handlers::{READ_ONLY, ToolExt};
use crate::server::RgBridgeServer;
use futures_util::FutureExt;
use rgbridge_rg::{build_list_file_types_command, build_list_files_command};
use rmcp::{
    ErrorData as McpError,
    handler::server::common::FromContextPart,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
};
use std::borrow::Cow;

pub mod types;

pub use types::{ListFileTypesArgs, ListFilesArgs};

pub const NO_FILES: &str = "No files found.";
pub const NO_FILE_TYPES: &str = "No file types reported.";

/// `list-files`, `list-file-types`
pub struct FilesTool;

impl FilesTool {
    // For integration tests
    pub async fn test_list_files(
        server: &RgBridgeServer,
        args: ListFilesArgs,
    ) -> Result<CallToolResult, McpError> {
        Self::list_files(server, args).await
    }

    pub async fn test_list_file_types(server: &RgBridgeServer) -> Result<CallToolResult, McpError> {
        Self::list_file_types(server).await
    }

    pub fn into_router(self) -> ToolRouter<RgBridgeServer> {
        ToolRouter::new()
            .with_route(ToolRoute::new_dyn(Self::list_files_attr(), |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<ListFilesArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::list_files(server, args).await
                }
                .boxed()
            }))
            .with_route(ToolRoute::new_dyn(Self::list_file_types_attr(), |ctx| {
                let server = ctx.service;
                async move { Self::list_file_types(server).await }.boxed()
            }))
    }

    fn list_files_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("list-files"),
            "List all files in the search scope using ripgrep. No pattern matching, just lists files that would be searched.",
            rmcp::handler::server::common::schema_for_type::<ListFilesArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    fn list_file_types_attr() -> Tool {
        Tool::new(
            Cow::Borrowed("list-file-types"),
            "List all file types supported by ripgrep. Useful for finding valid values for the fileType parameter.",
            rmcp::handler::server::common::schema_for_type::<ListFileTypesArgs>(),
        )
        .with_safety(READ_ONLY)
    }

    pub async fn list_files(
        server: &RgBridgeServer,
        mut args: ListFilesArgs,
    ) -> Result<CallToolResult, McpError> {
        args.path = match guard(&server.context, "list-files", &args.path) {
            Ok(path) => path,
            Err(rejected) => return Ok(rejected),
        };
        let max_characters = args.max_characters;
        let command = build_list_files_command(&args.into());
        run(
            &server.context,
            Operation {
                tool: "list-files",
                command,
                empty_message: NO_FILES,
                stats: false,
                max_characters,
            },
        )
        .await
    }

    /// Not path-scoped, so the guard is skipped
    pub async fn list_file_types(server: &RgBridgeServer) -> Result<CallToolResult, McpError> {
        run(
            &server.context,
            Operation {
                tool: "list-file-types",
                command: build_list_file_types_command(),
                empty_message: NO_FILE_TYPES,
                stats: false,
                max_characters: None,
            },
        )
        .await
    }
}
