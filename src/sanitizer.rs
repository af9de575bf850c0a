use crate::error::{Error, Result};
use tracing::debug;

/// Returns true for characters that survive sanitization unchanged.
///
/// Printable ASCII (0x20-0x7E) plus newline and carriage return. Everything
/// else is a document-extraction artifact (form feeds, non-breaking spaces,
/// OCR noise) and gets replaced with a space.
#[inline]
const fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\n' | '\r')
}

/// Normalizes raw document text into a printable, whitespace-collapsed form.
///
/// Every character outside printable ASCII (and outside `\n`/`\r`) is
/// replaced with a space, runs of whitespace collapse to a single space, and
/// the result is trimmed. Downstream prompt size and truncation length stay
/// predictable because of this pass.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `content` is empty, or if nothing
/// printable remains after cleaning.
pub(crate) fn sanitize(content: &str, preview_length: usize) -> Result<String> {
    if content.is_empty() {
        return Err(Error::empty_input("document content is empty"));
    }

    let mut cleaned = String::with_capacity(content.len());
    let mut pending_space = false;

    for c in content.chars() {
        let c = if is_printable(c) { c } else { ' ' };

        if c.is_whitespace() {
            pending_space = !cleaned.is_empty();
            continue;
        }

        if pending_space {
            cleaned.push(' ');
            pending_space = false;
        }
        cleaned.push(c);
    }

    if cleaned.is_empty() {
        return Err(Error::empty_input(
            "document content is empty after cleaning",
        ));
    }

    debug!(
        raw_chars = content.chars().count(),
        clean_chars = cleaned.chars().count(),
        preview = %preview(&cleaned, preview_length),
        "sanitized document content"
    );

    Ok(cleaned)
}

/// Returns the first `max_chars` characters of `text` for diagnostics.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREVIEW: usize = 500;

    #[test]
    fn test_sanitize_basic() {
        let result = sanitize("  This\u{7} is a   contract.  ", PREVIEW).unwrap();
        assert_eq!(result, "This is a contract.");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let inputs = [
            "plain text",
            "  padded \t text \u{c} with artifacts \u{a0}",
            "multi\nline\r\ncontent",
        ];
        for input in inputs {
            let once = sanitize(input, PREVIEW).unwrap();
            let twice = sanitize(&once, PREVIEW).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_sanitize_strips_non_printable() {
        let result = sanitize("a\u{1}b\u{7f}c\u{200b}d", PREVIEW).unwrap();
        for c in result.chars() {
            assert!(is_printable(c), "unexpected char {c:?}");
        }
        assert_eq!(result, "a b c d");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        let result = sanitize("a    b\t\tc \n\n d", PREVIEW).unwrap();
        assert!(!result.contains("  "));
        assert_eq!(result, "a b c d");
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        let err = sanitize("", PREVIEW).unwrap_err();
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "document content is empty");
    }

    #[test]
    fn test_sanitize_rejects_all_control() {
        let err = sanitize("\u{1}\u{2}", PREVIEW).unwrap_err();
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "document content is empty after cleaning");
    }

    #[test]
    fn test_sanitize_rejects_whitespace_only() {
        let err = sanitize("   \t\n  ", PREVIEW).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("hello", 3), "hel");
        assert_eq!(preview("hi", 10), "hi");
        assert_eq!(preview("", 5), "");
    }
}
