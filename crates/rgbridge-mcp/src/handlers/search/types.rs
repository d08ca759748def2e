//! Arguments of the pattern-matching tools

use crate::handlers::common::types::{CountModeArg, OneOrMany, SortByArg, list};
use rgbridge_rg::{CountOptions, ReplaceOptions, SearchFilesOptions, SearchOptions};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    /// Search pattern (regex by default)
    pub pattern: String,
    /// Directory or file to search
    pub path: String,
    /// Treat pattern as a literal string instead of regex
    pub fixed_strings: Option<bool>,
    /// true = case-sensitive, false = case-insensitive, omit = smart-case
    pub case_sensitive: Option<bool>,
    /// Only match whole words
    pub word_match: Option<bool>,
    /// Enable multiline matching (for function signatures, import blocks, etc.)
    pub multiline: Option<bool>,
    /// Filter by file type (e.g. 'rust', 'py'); a string or a list
    pub file_type: Option<OneOrMany>,
    /// Exclude file type (e.g. 'json'); a string or a list
    pub file_type_not: Option<OneOrMany>,
    /// Glob pattern to filter files (e.g. '*.test.ts'); a string or a list
    pub glob: Option<OneOrMany>,
    /// Maximum matches per file
    pub max_results: Option<u64>,
    /// Lines of context before and after each match
    pub context_lines: Option<u64>,
    /// Lines of context before each match
    pub before_context: Option<u64>,
    /// Lines of context after each match
    pub after_context: Option<u64>,
    /// Show lines that do NOT match the pattern
    pub invert_match: Option<bool>,
    /// Include hidden files and directories
    pub include_hidden: Option<bool>,
    /// Follow symbolic links
    pub follow_symlinks: Option<bool>,
    /// Maximum directory traversal depth
    pub max_depth: Option<u64>,
    /// Additional patterns for OR matching
    pub additional_patterns: Option<Vec<String>>,
    /// Output in JSON Lines format
    pub json_output: Option<bool>,
    /// Maximum display width per line (useful for minified files)
    pub max_columns: Option<u64>,
    /// Ignore .gitignore and other ignore files
    pub no_ignore: Option<bool>,
    /// Sort results by field
    pub sort_by: Option<SortByArg>,
    /// Character budget for the response text
    pub max_characters: Option<usize>,
}

impl From<SearchArgs> for SearchOptions {
    fn from(args: SearchArgs) -> Self {
        SearchOptions {
            pattern: args.pattern,
            path: args.path,
            fixed_strings: args.fixed_strings.unwrap_or(false),
            case_sensitive: args.case_sensitive,
            word_match: args.word_match.unwrap_or(false),
            multiline: args.multiline.unwrap_or(false),
            file_types: list(args.file_type),
            file_types_not: list(args.file_type_not),
            globs: list(args.glob),
            max_results: args.max_results,
            context_lines: args.context_lines,
            before_context: args.before_context,
            after_context: args.after_context,
            invert_match: args.invert_match.unwrap_or(false),
            include_hidden: args.include_hidden.unwrap_or(false),
            follow_symlinks: args.follow_symlinks.unwrap_or(false),
            max_depth: args.max_depth,
            additional_patterns: args.additional_patterns.unwrap_or_default(),
            json_output: args.json_output.unwrap_or(false),
            max_columns: args.max_columns,
            no_ignore: args.no_ignore.unwrap_or(false),
            sort_by: args.sort_by.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceArgs {
    /// Search pattern (regex by default)
    pub pattern: String,
    /// Replacement string (supports $1, $2, ${name} for capture groups)
    pub replacement: String,
    /// Directory or file to search
    pub path: String,
    /// Treat pattern as a literal string
    pub fixed_strings: Option<bool>,
    /// true = case-sensitive, false = case-insensitive, omit = smart-case
    pub case_sensitive: Option<bool>,
    /// Only match whole words
    pub word_match: Option<bool>,
    /// Enable multiline matching
    pub multiline: Option<bool>,
    /// Filter by file type (e.g. 'rust', 'py'); a string or a list
    pub file_type: Option<OneOrMany>,
    /// Exclude file type; a string or a list
    pub file_type_not: Option<OneOrMany>,
    /// Glob pattern to filter files; a string or a list
    pub glob: Option<OneOrMany>,
    /// Maximum matches per file
    pub max_results: Option<u64>,
    /// Include hidden files and directories
    pub include_hidden: Option<bool>,
    /// Follow symbolic links
    pub follow_symlinks: Option<bool>,
    /// Maximum directory traversal depth
    pub max_depth: Option<u64>,
    /// Ignore .gitignore and other ignore files
    pub no_ignore: Option<bool>,
    /// Show only the replaced text instead of the full line
    pub only_matching: Option<bool>,
    /// Character budget for the response text
    pub max_characters: Option<usize>,
}

impl From<ReplaceArgs> for ReplaceOptions {
    fn from(args: ReplaceArgs) -> Self {
        ReplaceOptions {
            pattern: args.pattern,
            replacement: args.replacement,
            path: args.path,
            fixed_strings: args.fixed_strings.unwrap_or(false),
            case_sensitive: args.case_sensitive,
            word_match: args.word_match.unwrap_or(false),
            multiline: args.multiline.unwrap_or(false),
            file_types: list(args.file_type),
            file_types_not: list(args.file_type_not),
            globs: list(args.glob),
            max_results: args.max_results,
            include_hidden: args.include_hidden.unwrap_or(false),
            follow_symlinks: args.follow_symlinks.unwrap_or(false),
            max_depth: args.max_depth,
            no_ignore: args.no_ignore.unwrap_or(false),
            only_matching: args.only_matching.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountArgs {
    /// Search pattern (regex by default)
    pub pattern: String,
    /// Directory or file to search
    pub path: String,
    /// 'lines' counts matching lines (default), 'matches' counts all matches including multiple per line
    pub count_mode: Option<CountModeArg>,
    /// Treat pattern as a literal string
    pub fixed_strings: Option<bool>,
    /// true = case-sensitive, false = case-insensitive, omit = smart-case
    pub case_sensitive: Option<bool>,
    /// Only match whole words
    pub word_match: Option<bool>,
    /// Filter by file type (e.g. 'rust', 'py'); a string or a list
    pub file_type: Option<OneOrMany>,
    /// Exclude file type; a string or a list
    pub file_type_not: Option<OneOrMany>,
    /// Glob pattern to filter files; a string or a list
    pub glob: Option<OneOrMany>,
    /// Include hidden files and directories
    pub include_hidden: Option<bool>,
    /// Include files with zero matches in the output
    pub include_zero: Option<bool>,
    /// Ignore .gitignore and other ignore files
    pub no_ignore: Option<bool>,
    /// Character budget for the response text
    pub max_characters: Option<usize>,
}

impl From<CountArgs> for CountOptions {
    fn from(args: CountArgs) -> Self {
        CountOptions {
            pattern: args.pattern,
            path: args.path,
            count_mode: args.count_mode.map(Into::into).unwrap_or_default(),
            fixed_strings: args.fixed_strings.unwrap_or(false),
            case_sensitive: args.case_sensitive,
            word_match: args.word_match.unwrap_or(false),
            file_types: list(args.file_type),
            file_types_not: list(args.file_type_not),
            globs: list(args.glob),
            include_hidden: args.include_hidden.unwrap_or(false),
            include_zero: args.include_zero.unwrap_or(false),
            no_ignore: args.no_ignore.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilesArgs {
    /// Search pattern (regex by default)
    pub pattern: String,
    /// Directory or file to search
    pub path: String,
    /// If true, list files that do NOT contain the pattern
    pub invert_match: Option<bool>,
    /// Treat pattern as a literal string
    pub fixed_strings: Option<bool>,
    /// true = case-sensitive, false = case-insensitive, omit = smart-case
    pub case_sensitive: Option<bool>,
    /// Only match whole words
    pub word_match: Option<bool>,
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

impl From<SearchFilesArgs> for SearchFilesOptions {
    fn from(args: SearchFilesArgs) -> Self {
        SearchFilesOptions {
            pattern: args.pattern,
            path: args.path,
            invert_match: args.invert_match.unwrap_or(false),
            fixed_strings: args.fixed_strings.unwrap_or(false),
            case_sensitive: args.case_sensitive,
            word_match: args.word_match.unwrap_or(false),
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
