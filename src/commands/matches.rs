//! One-shot pattern query
//!
//! Lists every dictionary word consistent with a revealed pattern, using
//! the same matching as the in-game `*` hint.

use crate::core::{Pattern, PatternError, Word};
use crate::game::matcher::possible_matches;

/// Result of a pattern query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchesResult {
    /// The parsed pattern, separators normalized away
    pub pattern: Pattern,
    /// Matching words in word-list order
    pub words: Vec<String>,
}

/// Find every word consistent with `pattern_text`
///
/// # Errors
///
/// Returns `PatternError` if the pattern text cannot be parsed.
pub fn find_matches(pattern_text: &str, words: &[Word]) -> Result<MatchesResult, PatternError> {
    let pattern = Pattern::parse(pattern_text)?;

    let matching = possible_matches(&pattern, words)
        .map(|word| word.text().to_string())
        .collect();

    Ok(MatchesResult {
        pattern,
        words: matching,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn finds_matches_in_order() {
        let words = words_from_slice(&["banana", "banner", "cabana", "bonobo"]);
        let result = find_matches("b_n_n_", &words).unwrap();

        assert_eq!(result.words, vec!["banana".to_string()]);
        assert_eq!(result.pattern.to_string(), "b _ n _ n _");
    }

    #[test]
    fn spaced_pattern_works_too() {
        let words = words_from_slice(&["banana"]);
        let result = find_matches("b _ n _ n _", &words).unwrap();

        assert_eq!(result.words.len(), 1);
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let words = words_from_slice(&["plum"]);
        let result = find_matches("b_n_n_", &words).unwrap();

        assert!(result.words.is_empty());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let words = words_from_slice(&["plum"]);
        assert!(find_matches("b?n", &words).is_err());
        assert!(find_matches("", &words).is_err());
    }
}
