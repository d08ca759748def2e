//! Options → argument vector translation.
//!
//! Every function here is pure. User-supplied values (pattern, path, glob,
//! type name, replacement) are always pushed as their own argv element and
//! positional arguments always follow a `--` marker, so a pattern such as
//! `-rf` can never be read as a flag.

use crate::options::{
    CountMode, CountOptions, ListFilesOptions, ReplaceOptions, SearchFilesOptions, SearchOptions,
    SortBy,
};
use rgbridge_core::config::consts::exec::DEFAULT_RG_PROGRAM;
use std::fmt;
use std::path::{Path, PathBuf};

/// A fully built engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl RgCommand {
    fn rg(args: Vec<String>) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_RG_PROGRAM),
            args,
        }
    }

    /// Replace the program while keeping the argv
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Short name used in error messages (`rg` rather than `/usr/bin/rg`)
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for RgCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Shared flag helpers
// ============================================================================

fn push_all(args: &mut Vec<String>, items: &[&str]) {
    args.extend(items.iter().map(|s| s.to_string()));
}

fn push_value(args: &mut Vec<String>, flag: &str, value: impl ToString) {
    args.push(flag.to_string());
    args.push(value.to_string());
}

fn push_if(args: &mut Vec<String>, enabled: bool, flag: &str) {
    if enabled {
        args.push(flag.to_string());
    }
}

fn push_opt(args: &mut Vec<String>, flag: &str, value: Option<u64>) {
    if let Some(n) = value {
        push_value(args, flag, n);
    }
}

/// Exactly one of `-s` / `-i` / `-S`
fn push_case(args: &mut Vec<String>, case_sensitive: Option<bool>) {
    let flag = match case_sensitive {
        Some(true) => "-s",
        Some(false) => "-i",
        None => "-S",
    };
    args.push(flag.to_string());
}

fn push_each(args: &mut Vec<String>, flag: &str, values: &[String]) {
    for value in values {
        push_value(args, flag, value);
    }
}

fn push_filters(args: &mut Vec<String>, types: &[String], types_not: &[String], globs: &[String]) {
    push_each(args, "-t", types);
    push_each(args, "-T", types_not);
    push_each(args, "-g", globs);
}

fn push_sort(args: &mut Vec<String>, sort_by: Option<SortBy>) {
    if let Some(key) = sort_by {
        args.push(format!("--sort={}", key));
    }
}

/// Resolve the combined and per-side context settings.
///
/// `context` fills both sides, explicit `before` / `after` win for their side.
fn push_context(
    args: &mut Vec<String>,
    context: Option<u64>,
    before: Option<u64>,
    after: Option<u64>,
) {
    let before = before.or(context);
    let after = after.or(context);

    match (before, after) {
        (Some(b), Some(a)) if a == b => push_value(args, "-C", b),
        (b, a) => {
            push_opt(args, "-B", b);
            push_opt(args, "-A", a);
        }
    }
}

// ============================================================================
// Per-operation builders
// ============================================================================

/// Content search with line numbers and a trailing stats block
pub fn build_search_command(opts: &SearchOptions) -> RgCommand {
    let mut args = Vec::new();
    push_all(&mut args, &["-n", "--color", "never", "--no-heading", "--stats"]);

    push_case(&mut args, opts.case_sensitive);
    push_if(&mut args, opts.fixed_strings, "-F");
    push_if(&mut args, opts.word_match, "-w");
    if opts.multiline {
        push_all(&mut args, &["-U", "--multiline-dotall"]);
    }
    push_filters(&mut args, &opts.file_types, &opts.file_types_not, &opts.globs);
    push_opt(&mut args, "-m", opts.max_results);
    push_context(
        &mut args,
        opts.context_lines,
        opts.before_context,
        opts.after_context,
    );
    push_if(&mut args, opts.invert_match, "-v");
    push_if(&mut args, opts.include_hidden, "--hidden");
    push_if(&mut args, opts.follow_symlinks, "-L");
    push_opt(&mut args, "-d", opts.max_depth);
    push_if(&mut args, opts.json_output, "--json");
    push_opt(&mut args, "-M", opts.max_columns);
    push_if(&mut args, opts.no_ignore, "--no-ignore");
    push_sort(&mut args, opts.sort_by);

    if opts.additional_patterns.is_empty() {
        args.push("--".to_string());
        args.push(opts.pattern.clone());
        args.push(opts.path.clone());
    } else {
        push_value(&mut args, "-e", &opts.pattern);
        push_each(&mut args, "-e", &opts.additional_patterns);
        args.push("--".to_string());
        args.push(opts.path.clone());
    }

    RgCommand::rg(args)
}

/// Replace preview: `-r` only rewrites printed output, files stay untouched
pub fn build_replace_command(opts: &ReplaceOptions) -> RgCommand {
    let mut args = Vec::new();
    push_all(&mut args, &["-n", "--color", "never", "--no-heading"]);

    push_case(&mut args, opts.case_sensitive);
    push_if(&mut args, opts.fixed_strings, "-F");
    push_if(&mut args, opts.word_match, "-w");
    if opts.multiline {
        push_all(&mut args, &["-U", "--multiline-dotall"]);
    }
    push_filters(&mut args, &opts.file_types, &opts.file_types_not, &opts.globs);
    push_opt(&mut args, "-m", opts.max_results);
    push_if(&mut args, opts.include_hidden, "--hidden");
    push_if(&mut args, opts.follow_symlinks, "-L");
    push_opt(&mut args, "-d", opts.max_depth);
    push_if(&mut args, opts.no_ignore, "--no-ignore");
    push_if(&mut args, opts.only_matching, "-o");
    push_value(&mut args, "-r", &opts.replacement);

    args.push("--".to_string());
    args.push(opts.pattern.clone());
    args.push(opts.path.clone());

    RgCommand::rg(args)
}

pub fn build_count_command(opts: &CountOptions) -> RgCommand {
    let mut args = Vec::new();
    push_all(&mut args, &["--color", "never"]);
    args.push(
        match opts.count_mode {
            CountMode::Matches => "--count-matches",
            CountMode::Lines => "-c",
        }
        .to_string(),
    );

    push_case(&mut args, opts.case_sensitive);
    push_if(&mut args, opts.fixed_strings, "-F");
    push_if(&mut args, opts.word_match, "-w");
    push_filters(&mut args, &opts.file_types, &opts.file_types_not, &opts.globs);
    push_if(&mut args, opts.include_hidden, "--hidden");
    push_if(&mut args, opts.include_zero, "--include-zero");
    push_if(&mut args, opts.no_ignore, "--no-ignore");

    args.push("--".to_string());
    args.push(opts.pattern.clone());
    args.push(opts.path.clone());

    RgCommand::rg(args)
}

/// File names only, never line numbers
pub fn build_search_files_command(opts: &SearchFilesOptions) -> RgCommand {
    let mut args = Vec::new();
    push_all(&mut args, &["--color", "never"]);
    args.push(
        if opts.invert_match {
            "--files-without-match"
        } else {
            "-l"
        }
        .to_string(),
    );

    push_case(&mut args, opts.case_sensitive);
    push_if(&mut args, opts.fixed_strings, "-F");
    push_if(&mut args, opts.word_match, "-w");
    push_filters(&mut args, &opts.file_types, &opts.file_types_not, &opts.globs);
    push_if(&mut args, opts.include_hidden, "--hidden");
    push_if(&mut args, opts.follow_symlinks, "-L");
    push_opt(&mut args, "-d", opts.max_depth);
    push_if(&mut args, opts.no_ignore, "--no-ignore");
    push_sort(&mut args, opts.sort_by);

    args.push("--".to_string());
    args.push(opts.pattern.clone());
    args.push(opts.path.clone());

    RgCommand::rg(args)
}

pub fn build_list_files_command(opts: &ListFilesOptions) -> RgCommand {
    let mut args = Vec::new();
    push_all(&mut args, &["--files", "--color", "never"]);

    push_filters(&mut args, &opts.file_types, &opts.file_types_not, &opts.globs);
    push_if(&mut args, opts.include_hidden, "--hidden");
    push_if(&mut args, opts.follow_symlinks, "-L");
    push_opt(&mut args, "-d", opts.max_depth);
    push_if(&mut args, opts.no_ignore, "--no-ignore");
    push_sort(&mut args, opts.sort_by);

    args.push("--".to_string());
    args.push(opts.path.clone());

    RgCommand::rg(args)
}

pub fn build_list_file_types_command() -> RgCommand {
    RgCommand::rg(vec![
        "--type-list".to_string(),
        "--color".to_string(),
        "never".to_string(),
    ])
}
