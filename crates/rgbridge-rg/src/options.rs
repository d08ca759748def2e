//! Engine-level option types, one per operation.
//!
//! Lists are already normalized: a single value arrives as a one-element
//! `Vec`. `None` / `false` means the flag is left out.

use std::fmt;

/// Sort key passed as `--sort=<key>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Path,
    Modified,
    Created,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Path => "path",
            SortBy::Modified => "modified",
            SortBy::Created => "created",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `search-count` counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// Matching lines per file (`-c`)
    #[default]
    Lines,
    /// Individual matches per file (`--count-matches`)
    Matches,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub pattern: String,
    pub path: String,
    pub fixed_strings: bool,
    /// `Some(true)` sensitive, `Some(false)` insensitive, `None` smart-case
    pub case_sensitive: Option<bool>,
    pub word_match: bool,
    pub multiline: bool,
    pub file_types: Vec<String>,
    pub file_types_not: Vec<String>,
    pub globs: Vec<String>,
    pub max_results: Option<u64>,
    pub context_lines: Option<u64>,
    pub before_context: Option<u64>,
    pub after_context: Option<u64>,
    pub invert_match: bool,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
    pub max_depth: Option<u64>,
    pub additional_patterns: Vec<String>,
    pub json_output: bool,
    pub max_columns: Option<u64>,
    pub no_ignore: bool,
    pub sort_by: Option<SortBy>,
}

/// Replace preview. Nothing is written back to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceOptions {
    pub pattern: String,
    pub replacement: String,
    pub path: String,
    pub fixed_strings: bool,
    pub case_sensitive: Option<bool>,
    pub word_match: bool,
    pub multiline: bool,
    pub file_types: Vec<String>,
    pub file_types_not: Vec<String>,
    pub globs: Vec<String>,
    pub max_results: Option<u64>,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
    pub max_depth: Option<u64>,
    pub no_ignore: bool,
    pub only_matching: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountOptions {
    pub pattern: String,
    pub path: String,
    pub count_mode: CountMode,
    pub fixed_strings: bool,
    pub case_sensitive: Option<bool>,
    pub word_match: bool,
    pub file_types: Vec<String>,
    pub file_types_not: Vec<String>,
    pub globs: Vec<String>,
    pub include_hidden: bool,
    pub include_zero: bool,
    pub no_ignore: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilesOptions {
    pub pattern: String,
    pub path: String,
    /// List files that do NOT contain a match
    pub invert_match: bool,
    pub fixed_strings: bool,
    pub case_sensitive: Option<bool>,
    pub word_match: bool,
    pub file_types: Vec<String>,
    pub file_types_not: Vec<String>,
    pub globs: Vec<String>,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
    pub max_depth: Option<u64>,
    pub no_ignore: bool,
    pub sort_by: Option<SortBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilesOptions {
    pub path: String,
    pub file_types: Vec<String>,
    pub file_types_not: Vec<String>,
    pub globs: Vec<String>,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
    pub max_depth: Option<u64>,
    pub no_ignore: bool,
    pub sort_by: Option<SortBy>,
}
