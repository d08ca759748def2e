//! Trailing `--stats` block extraction.
//!
//! `rg --stats` appends something like:
//!
//! ```text
//! f.txt:1:hello
//!
//! 1 match
//! 1 matched line
//! 1 file contained match
//! 1 file searched
//! 10 bytes printed
//! 50 bytes searched
//! 0.0001 seconds spent searching
//! 0.001 seconds total
//! ```
//!
//! Only this fixed vocabulary is recognized. If a future engine version words
//! the lines differently the block is simply left in the payload.

use regex::Regex;
use std::sync::OnceLock;

/// Payload and compact summary split out of captured stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSplit {
    pub payload: String,
    pub summary: Option<String>,
}

static STATS_COUNT: OnceLock<Regex> = OnceLock::new();
static STATS_TIME: OnceLock<Regex> = OnceLock::new();
static MATCHES_LINE: OnceLock<Regex> = OnceLock::new();
static FILES_MATCHED_LINE: OnceLock<Regex> = OnceLock::new();
static FILES_SEARCHED_LINE: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("stats pattern is valid"))
}

fn stats_count() -> &'static Regex {
    regex(
        &STATS_COUNT,
        r"^\d+ (match(es)?|matched lines?|files? contained match(es)?|files? searched|bytes? printed|bytes? searched)$",
    )
}

fn stats_time() -> &'static Regex {
    regex(&STATS_TIME, r"^[\d.]+ seconds?( spent searching| total)?$")
}

fn is_stats_line(line: &str) -> bool {
    let trimmed = line.trim();
    stats_count().is_match(trimmed) || stats_time().is_match(trimmed)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split a trailing stats block off `stdout`.
///
/// The block must be a contiguous run of stats lines at the tail (trailing
/// blank lines ignored) preceded by a blank line or the start of the text.
pub fn extract_stats(stdout: &str) -> StatsSplit {
    let lines: Vec<&str> = stdout.split('\n').collect();

    let mut end = lines.len();
    while end > 0 && is_blank(lines[end - 1]) {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && is_stats_line(lines[start - 1]) {
        start -= 1;
    }

    let no_block = start == end || (start > 0 && !is_blank(lines[start - 1]));
    if no_block {
        return StatsSplit {
            payload: stdout.to_string(),
            summary: None,
        };
    }

    let block = &lines[start..end];
    let payload = lines[..start]
        .join("\n")
        .trim_end_matches(['\n', '\r'])
        .to_string();

    let wanted = [
        regex(&MATCHES_LINE, r"^\d+ match(es)?$"),
        regex(&FILES_MATCHED_LINE, r"^\d+ files? contained match(es)?$"),
        regex(&FILES_SEARCHED_LINE, r"^\d+ files? searched$"),
    ];
    let parts: Vec<&str> = wanted
        .iter()
        .filter_map(|re| block.iter().map(|l| l.trim()).find(|l| re.is_match(l)))
        .collect();

    StatsSplit {
        payload,
        summary: if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        },
    }
}
