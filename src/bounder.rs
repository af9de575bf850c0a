use tracing::debug;

/// Marker appended whenever content had to be cut to fit the length bound.
///
/// The marker is a correctness-relevant disclosure: without it the model
/// (and the reader of the analysis) would believe the full document was
/// analyzed.
pub const TRUNCATION_MARKER: &str = "... [content truncated]";

/// Caps sanitized text at `max_length` characters.
///
/// Text within the bound is returned unchanged. Longer text is cut at
/// `max_length` characters and [`TRUNCATION_MARKER`] is appended, so the
/// result never exceeds `max_length + TRUNCATION_MARKER.len()` characters.
#[must_use]
pub(crate) fn bound(text: &str, max_length: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_length) else {
        return text.to_string();
    };

    debug!(
        total_chars = text.chars().count(),
        max_length, "truncating document content"
    );

    let mut bounded = String::with_capacity(cut + TRUNCATION_MARKER.len());
    bounded.push_str(&text[..cut]);
    bounded.push_str(TRUNCATION_MARKER);
    bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_short_text_unchanged() {
        assert_eq!(bound("short", 100), "short");
    }

    #[test]
    fn test_bound_exact_length_unchanged() {
        let text = "a".repeat(10);
        let result = bound(&text, 10);
        assert_eq!(result, text);
        assert!(!result.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_bound_truncates_with_marker() {
        let text = "a".repeat(20);
        let result = bound(&text, 10);
        assert_eq!(result, format!("{}{}", "a".repeat(10), TRUNCATION_MARKER));
    }

    #[test]
    fn test_bound_length_invariant() {
        for len in [0, 1, 10, 100, 10_000] {
            let text = "x".repeat(len);
            for max in [1, 50, 15_000] {
                let result = bound(&text, max);
                assert!(result.chars().count() <= max + TRUNCATION_MARKER.len());
            }
        }
    }

    #[test]
    fn test_bound_respects_char_boundaries() {
        // Sanitized input is ASCII, but the cut must stay safe regardless.
        let text = "héllo wörld";
        let result = bound(text, 4);
        assert_eq!(result, format!("héll{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_bound_zero_max() {
        assert_eq!(bound("abc", 0), TRUNCATION_MARKER);
    }
}
