use super::truncate::truncate_text;
use rgbridge_rg::ExecResult;

const TRUNCATED_HEADER: &str = "--- Result truncated ---";
const CAPTURE_LIMIT_LINE: &str = "Output capture limit reached; remaining output was discarded.";
const NARROW_TIP: &str = "Tip: Use fileType, glob, maxResults, or maxDepth to narrow the search scope.";
const STDERR_HEADER: &str = "--- Warning (stderr) ---";

/// Compose the text returned to the client.
///
/// Layout: `[summary]`, payload (or `empty_message`), truncation notice,
/// stderr warning. Each optional part is separated by a blank line.
pub fn format_result(
    result: &ExecResult,
    empty_message: &str,
    max_characters: Option<usize>,
    summary: Option<&str>,
) -> String {
    let body = if result.stdout.is_empty() {
        empty_message
    } else {
        result.stdout.as_str()
    };
    let truncated = truncate_text(body, max_characters);

    let mut out = String::new();

    if let Some(summary) = summary.filter(|s| !s.is_empty()) {
        out.push('[');
        out.push_str(summary);
        out.push_str("]\n\n");
    }

    out.push_str(&truncated.text);

    if truncated.was_truncated || result.truncated_by_limit {
        out.push_str("\n\n");
        out.push_str(TRUNCATED_HEADER);
        if truncated.was_truncated {
            out.push_str(&format!(
                "\nShowing: {} / {} characters",
                group_thousands(truncated.text.chars().count()),
                group_thousands(truncated.original_length)
            ));
        }
        if result.truncated_by_limit {
            out.push('\n');
            out.push_str(CAPTURE_LIMIT_LINE);
        }
        out.push('\n');
        out.push_str(NARROW_TIP);
    }

    let stderr = result.stderr.trim();
    if !stderr.is_empty() {
        out.push_str("\n\n");
        out.push_str(STDERR_HEADER);
        out.push('\n');
        out.push_str(stderr);
    }

    out
}

/// `1234567` → `1,234,567`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
