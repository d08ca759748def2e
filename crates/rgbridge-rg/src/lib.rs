//! ripgrep invocation for rgbridge.
//!
//! - [`options`]: typed per-operation engine options
//! - [`builder`]: options → argument vector ([`RgCommand`])
//! - [`exec`]: bounded process execution
//! - [`stats`]: `--stats` block extraction
//! - [`resolve`]: locating the `rg` executable
//!
//! ```no_run
//! use rgbridge_rg::{ExecLimits, SearchOptions, build_search_command, execute, extract_stats};
//!
//! # async fn run() -> rgbridge_core::Result<()> {
//! let opts = SearchOptions {
//!     pattern: "TODO".to_string(),
//!     path: "src".to_string(),
//!     ..Default::default()
//! };
//! let result = execute(&build_search_command(&opts), &ExecLimits::default()).await?;
//! let split = extract_stats(&result.stdout);
//! println!("{:?}", split.summary);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod builder;
pub mod exec;
pub mod options;
pub mod resolve;
pub mod stats;

// Re-export commonly used types
pub use builder::{
    RgCommand, build_count_command, build_list_file_types_command, build_list_files_command,
    build_replace_command, build_search_command, build_search_files_command,
};
pub use exec::{ExecLimits, ExecResult, execute};
pub use options::{
    CountMode, CountOptions, ListFilesOptions, ReplaceOptions, SearchFilesOptions, SearchOptions,
    SortBy,
};
pub use resolve::{ResolveResult, RgInfo, RgSource, resolve_rg};
pub use stats::{StatsSplit, extract_stats};
