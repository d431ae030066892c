//! Lexical heuristics deciding whether a string reads like user-facing prose.

use std::sync::LazyLock;

use regex::Regex;

/// Fragments that only appear in CSS, selectors, or markup source.
const EXCLUSION_MARKERS: &[&str] = &["!important", "@font-face", "?#", "@import url"];

/// Inline markup tag such as `<br>` or `<strong>`.
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\w+>").unwrap());

/// Characters that mark a single word as an identifier or code constant.
fn is_code_char(c: char) -> bool {
    matches!(c, '-' | '_' | '/') || c.is_ascii_digit()
}

fn has_exclusion_marker(text: &str) -> bool {
    EXCLUSION_MARKERS.iter().any(|marker| text.contains(marker)) || INLINE_TAG.is_match(text)
}

/// A single capitalized word: `Hello`, `Submit`, `Café`.
///
/// Rejects all-caps constants (`SUBMIT`), camel case (`HelloWorld`), single
/// letters, and anything carrying digits or separators.
fn is_capitalized_word(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphabetic() || !first.is_uppercase() {
        return false;
    }
    let rest = chars.as_str();
    !rest.is_empty() && !rest.chars().any(char::is_uppercase) && !text.chars().any(is_code_char)
}

/// Returns true if `text` looks like localizable prose.
///
/// The text is trimmed first. Exclusion markers always win; otherwise text
/// with interior whitespace is prose, and a lone word must be capitalized.
pub fn is_localizable(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || has_exclusion_marker(text) {
        return false;
    }
    if text.chars().any(char::is_whitespace) {
        return true;
    }
    is_capitalized_word(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_with_spaces() {
        assert!(is_localizable("hello world"));
        assert!(is_localizable("Please try again later."));
        assert!(is_localizable("  padded text  "));
        assert!(is_localizable("with\ttab"));
    }

    #[test]
    fn test_single_words() {
        assert!(is_localizable("Hello"));
        assert!(is_localizable("Submit"));
        assert!(is_localizable("Über"));
        assert!(!is_localizable("HELLO"));
        assert!(!is_localizable("HelloWorld"));
        assert!(!is_localizable("hello"));
        assert!(!is_localizable("H"));
    }

    #[test]
    fn test_code_like_words() {
        assert!(!is_localizable("Button-primary"));
        assert!(!is_localizable("Snake_case"));
        assert!(!is_localizable("Item2"));
        assert!(!is_localizable("Path/to"));
        assert!(!is_localizable("/api/users"));
    }

    #[test]
    fn test_exclusions_win() {
        assert!(!is_localizable("color: red !important"));
        assert!(!is_localizable("@font-face { font-family: Foo }"));
        assert!(!is_localizable("url(font.eot?#iefix) format"));
        assert!(!is_localizable("@import url(style.css)"));
        assert!(!is_localizable("Line one<br>Line two"));
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(!is_localizable(""));
        assert!(!is_localizable("   "));
        assert!(!is_localizable("\n\t"));
    }

    #[test]
    fn test_non_letter_text() {
        assert!(!is_localizable("👋"));
        assert!(!is_localizable("42"));
    }

    #[test]
    fn test_is_deterministic() {
        for text in ["hello world", "Hello", "HELLO", "a-b"] {
            assert_eq!(is_localizable(text), is_localizable(text));
        }
    }
}
