/// Outcome of applying a character budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub text: String,
    pub was_truncated: bool,
    /// Length of the input in characters, truncated or not
    pub original_length: usize,
}

/// Cap `text` at `max_characters` Unicode scalar values.
///
/// The cut lands on the last newline at or before the budget, and the newline
/// itself is dropped. Without a usable newline the text is cut at exactly
/// `max_characters`.
pub fn truncate_text(text: &str, max_characters: Option<usize>) -> Truncated {
    let original_length = text.chars().count();

    let max = match max_characters {
        Some(max) if original_length > max => max,
        _ => {
            return Truncated {
                text: text.to_string(),
                was_truncated: false,
                original_length,
            };
        }
    };

    // Byte offset of character position `max`
    let limit = text
        .char_indices()
        .nth(max)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    // A newline sitting exactly at position `max` still counts as a boundary
    let window = if text[limit..].starts_with('\n') {
        limit + 1
    } else {
        limit
    };

    let cut = match text[..window].rfind('\n') {
        Some(i) if i > 0 => i,
        _ => limit,
    };

    Truncated {
        text: text[..cut].to_string(),
        was_truncated: true,
        original_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_budget_keeps_text() {
        let out = truncate_text("a\nb\nc", None);
        assert_eq!(out.text, "a\nb\nc");
        assert!(!out.was_truncated);
        assert_eq!(out.original_length, 5);
    }

    #[test]
    fn test_budget_at_or_above_length_keeps_text() {
        for max in [5, 6, 1000] {
            let out = truncate_text("a\nb\nc", Some(max));
            assert_eq!(out.text, "a\nb\nc");
            assert!(!out.was_truncated);
        }
    }

    #[test]
    fn test_cuts_at_last_line_boundary() {
        let out = truncate_text("line1\nline2\nline3\n", Some(14));
        assert_eq!(out.text, "line1\nline2");
        assert!(out.was_truncated);
        assert_eq!(out.original_length, 18);
    }

    #[test]
    fn test_newline_exactly_at_budget_is_used() {
        // position 5 is '\n'
        let out = truncate_text("abcde\nfghij", Some(5));
        assert_eq!(out.text, "abcde");
    }

    #[test]
    fn test_no_newline_cuts_hard() {
        let out = truncate_text("abcdefghij", Some(4));
        assert_eq!(out.text, "abcd");
        assert!(out.was_truncated);
    }

    #[test]
    fn test_newline_only_at_start_cuts_hard() {
        let out = truncate_text("\nabcdefgh", Some(4));
        assert_eq!(out.text, "\nabc");
    }

    #[test]
    fn test_zero_budget_is_empty() {
        let out = truncate_text("hello", Some(0));
        assert_eq!(out.text, "");
        assert!(out.was_truncated);
        assert_eq!(out.original_length, 5);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 7 chars, 21 bytes
        let text = "こんにちは\n世";
        let out = truncate_text(text, Some(6));
        assert_eq!(out.text, "こんにちは");
        assert_eq!(out.original_length, 7);

        let out = truncate_text("日本語テキスト", Some(3));
        assert_eq!(out.text, "日本語");
    }

    #[test]
    fn test_result_never_exceeds_budget() {
        let text = "ab\ncdef\ng\nhijklmn\nop";
        for max in 0..text.len() {
            let out = truncate_text(text, Some(max));
            assert!(out.text.chars().count() <= max, "max={max} got {:?}", out.text);
        }
    }
}
