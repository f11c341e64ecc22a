//! Title normalization for schema matching.

use regex::Regex;
use std::sync::LazyLock;

// Anything that is not a letter or digit separates words. Punctuation,
// emoji, and markup decorations all collapse into word boundaries.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("non-word regex"));

/// Reduce a heading title to its matching key.
///
/// Lowercases, strips every non-letter/digit run, collapses whitespace, and
/// drops one leading all-digit token so numbered headings ("3. Debugging")
/// match their unnumbered canonical names. Titles that consist only of
/// decoration normalize to the empty string and match nothing.
pub fn normalize_title(raw: &str) -> String {
    let cleaned = NON_WORD.replace_all(raw, " ").to_lowercase();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() > 1 && tokens[0].chars().all(|c| c.is_ascii_digit()) {
        tokens.remove(0);
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert_eq!(normalize_title("Quick Start"), normalize_title("QUICK START"));
    }

    #[test]
    fn punctuation_and_emoji_stripped() {
        assert_eq!(normalize_title("🚀 Quick Start!"), "quick start");
        assert_eq!(normalize_title("Quick-Start"), "quick start");
        assert_eq!(normalize_title("**Debugging**"), "debugging");
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(normalize_title("  Quick   Start  "), "quick start");
    }

    #[test]
    fn leading_ordinal_dropped() {
        assert_eq!(normalize_title("1. Purpose & Scope"), "purpose scope");
        assert_eq!(normalize_title("12) Appendix"), "appendix");
        assert_eq!(normalize_title("§3 Configuration"), "configuration");
    }

    #[test]
    fn trailing_digits_are_kept() {
        assert_eq!(normalize_title("Phase 0"), "phase 0");
        assert_eq!(normalize_title("phase 0"), normalize_title("Phase 0"));
    }

    #[test]
    fn all_digit_title_is_kept() {
        // A single token is never treated as an ordinal prefix.
        assert_eq!(normalize_title("2024"), "2024");
    }

    #[test]
    fn decoration_only_title_is_empty() {
        assert_eq!(normalize_title("---"), "");
        assert_eq!(normalize_title("🚀✨"), "");
    }
}
