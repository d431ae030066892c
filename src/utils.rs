//! Small text helpers shared by the rule and the reporter.

/// True if `text` has at least one Unicode letter.
///
/// Literals without letters (`"42"`, `"---"`, `"👋"`) never need translation.
///
/// ```
/// use transmark::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Save changes"));
/// assert!(contains_alphabetic("Größe"));
/// assert!(!contains_alphabetic("12:30"));
/// assert!(!contains_alphabetic("👋"));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}
