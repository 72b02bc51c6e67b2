//! Description sanitization. The session record and the CSV log both demand
//! single-line, comma-free, quote-free text.

/// Upper bound on a stored description. Generous, but keeps the session
/// record short.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Replace double quotes, commas, newlines and other control characters
/// with a space, then truncate on a char boundary.
pub fn sanitize_description(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c == '"' || c == ',' || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();
    cleaned.chars().take(MAX_DESCRIPTION_CHARS).collect()
}

/// Sanitize a field right before it is written to the CSV log. Commas and
/// newlines would break the six-field row shape.
pub fn sanitize_csv_field(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == ',' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_become_spaces() {
        assert_eq!(sanitize_description("coding, refactoring"), "coding  refactoring");
    }

    #[test]
    fn quotes_and_control_chars_become_spaces() {
        assert_eq!(sanitize_description("say \"hi\"\tnow"), "say  hi  now");
        assert_eq!(sanitize_description("a\nb"), "a b");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(sanitize_description("write spec"), "write spec");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = "x".repeat(2 * MAX_DESCRIPTION_CHARS);
        assert_eq!(sanitize_description(&long).chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn csv_field_scrubs_separators_only() {
        assert_eq!(sanitize_csv_field("a,b\nc"), "a b c");
        assert_eq!(sanitize_csv_field("keep \"quotes\""), "keep \"quotes\"");
    }
}
