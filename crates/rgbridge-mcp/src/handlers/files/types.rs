use crate::handlers::common::types::{OneOrMany, SortByArg, list};
use rgbridge_rg::ListFilesOptions;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesArgs {
    /// Directory to list files from
    pub path: String,
    /// Filter by file type (e.g. 'rust', 'py'); a string or a list
    pub file_type: Option<OneOrMany>,
    /// Exclude file type; a string or a list
    pub file_type_not: Option<OneOrMany>,
    /// Glob pattern to filter files; a string or a list
    pub glob: Option<OneOrMany>,
    /// Include hidden files and directories
    pub include_hidden: Option<bool>,
    /// Follow symbolic links
    pub follow_symlinks: Option<bool>,
    /// Maximum directory traversal depth
    pub max_depth: Option<u64>,
    /// Ignore .gitignore and other ignore files
    pub no_ignore: Option<bool>,
    /// Sort results by field
    pub sort_by: Option<SortByArg>,
    /// Character budget for the response text
    pub max_characters: Option<usize>,
}

impl From<ListFilesArgs> for ListFilesOptions {
    fn from(args: ListFilesArgs) -> Self {
        ListFilesOptions {
            path: args.path,
            file_types: list(args.file_type),
            file_types_not: list(args.file_type_not),
            globs: list(args.glob),
            include_hidden: args.include_hidden.unwrap_or(false),
            follow_symlinks: args.follow_symlinks.unwrap_or(false),
            max_depth: args.max_depth,
            no_ignore: args.no_ignore.unwrap_or(false),
            sort_by: args.sort_by.map(Into::into),
        }
    }
}

/// `list-file-types` takes no parameters
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListFileTypesArgs {}
