//! Answer normalization for vocabulary cards.

/// Normalize an answer for comparison: trim edge whitespace and lowercase.
///
/// Interior whitespace is significant; "New York" and "new  york" differ.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare a submitted answer to the expected one, case-insensitively.
pub fn vocabulary_match(expected: &str, given: &str) -> bool {
    normalize(expected) == normalize(given)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Paris "), "paris");
        assert_eq!(normalize("PARIS"), "paris");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn match_ignores_case_and_edge_whitespace() {
        assert!(vocabulary_match("Paris", " paris "));
        assert!(vocabulary_match(" Paris ", "PARIS"));
        assert!(!vocabulary_match("Paris", "Lyon"));
    }

    #[test]
    fn interior_whitespace_is_significant() {
        assert!(vocabulary_match("New York", "new york"));
        assert!(!vocabulary_match("New York", "new  york"));
    }
}
