//! Guess evaluation
//!
//! Pure, stateless functions over the session's data model. Classification
//! never mutates anything; the session applies the resulting transition.

use crate::core::{LetterSet, Word};
use rustc_hash::FxHashSet;

/// Outcome of classifying one submitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not exactly one lowercase ASCII letter
    InvalidLetter,
    /// Token already submitted this session
    Repeat,
    /// Letter occurs in the secret word
    Hit(u8),
    /// Letter does not occur in the secret word
    Miss(u8),
}

/// Classify one normalized token against the current state
///
/// Checks run in priority order: invalid letter, repeat, hit, miss. A token
/// that was already submitted is a `Repeat` even if it was a `Hit` the
/// first time.
#[must_use]
pub fn classify(token: &str, secret: &Word, used: &FxHashSet<String>) -> Classification {
    let Some(letter) = single_letter(token) else {
        return Classification::InvalidLetter;
    };

    if used.contains(token) {
        return Classification::Repeat;
    }

    if secret.has_letter(letter) {
        Classification::Hit(letter)
    } else {
        Classification::Miss(letter)
    }
}

/// True iff every distinct letter of the secret has been guessed
#[inline]
#[must_use]
pub fn is_fully_guessed(secret: &Word, guessed: LetterSet) -> bool {
    secret.letters().is_subset(guessed)
}

/// Letters not yet tried, in ascending order
///
/// Multi-character tokens in the used set never block a letter.
///
/// # Examples
/// ```
/// use hangman::game::available_letters;
/// use rustc_hash::FxHashSet;
///
/// let mut used = FxHashSet::default();
/// used.insert("e".to_string());
/// used.insert("z".to_string());
///
/// assert_eq!(available_letters(&used), "abcdfghijklmnopqrstuvwxy");
/// ```
#[must_use]
pub fn available_letters(used: &FxHashSet<String>) -> String {
    let used_letters: LetterSet = used.iter().filter_map(|token| single_letter(token)).collect();

    (b'a'..=b'z')
        .filter(|&letter| !used_letters.contains(letter))
        .map(char::from)
        .collect()
}

/// The token's letter, if it is exactly one ASCII lowercase letter
fn single_letter(token: &str) -> Option<u8> {
    match token.as_bytes() {
        &[letter] if letter.is_ascii_lowercase() => Some(letter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(tokens: &[&str]) -> FxHashSet<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn classify_single_letters_only() {
        let secret = Word::new("apple").unwrap();
        let none = FxHashSet::default();

        assert_eq!(
            classify("5", &secret, &none),
            Classification::InvalidLetter
        );
        assert_eq!(
            classify("ab", &secret, &none),
            Classification::InvalidLetter
        );
        assert_eq!(classify("", &secret, &none), Classification::InvalidLetter);
        assert_eq!(
            classify("*", &secret, &none),
            Classification::InvalidLetter
        );
        assert_eq!(
            classify("é", &secret, &none),
            Classification::InvalidLetter
        );
    }

    #[test]
    fn classify_hit_and_miss() {
        let secret = Word::new("apple").unwrap();
        let none = FxHashSet::default();

        assert_eq!(classify("a", &secret, &none), Classification::Hit(b'a'));
        assert_eq!(classify("z", &secret, &none), Classification::Miss(b'z'));
    }

    #[test]
    fn classify_repeat_beats_hit_and_miss() {
        let secret = Word::new("apple").unwrap();
        let used = used(&["a", "z"]);

        // Repeats regardless of whether the first submission hit or missed
        assert_eq!(classify("a", &secret, &used), Classification::Repeat);
        assert_eq!(classify("z", &secret, &used), Classification::Repeat);
    }

    #[test]
    fn classify_invalid_beats_repeat() {
        let secret = Word::new("apple").unwrap();
        let used = used(&["5"]);

        // A second "5" is still invalid, never a repeat
        assert_eq!(
            classify("5", &secret, &used),
            Classification::InvalidLetter
        );
    }

    #[test]
    fn fully_guessed_requires_every_distinct_letter() {
        let secret = Word::new("banana").unwrap();

        let partial: LetterSet = b"ba".iter().copied().collect();
        assert!(!is_fully_guessed(&secret, partial));

        let all: LetterSet = b"ban".iter().copied().collect();
        assert!(is_fully_guessed(&secret, all));
    }

    #[test]
    fn fully_guessed_ignores_extra_letters() {
        let secret = Word::new("plum").unwrap();
        let guessed: LetterSet = b"plumxyz".iter().copied().collect();
        assert!(is_fully_guessed(&secret, guessed));
    }

    #[test]
    fn available_letters_starts_with_full_alphabet() {
        let none = FxHashSet::default();
        assert_eq!(available_letters(&none), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn available_letters_excludes_used() {
        let used = used(&["a", "m", "z"]);
        assert_eq!(available_letters(&used), "bcdefghijklnopqrstuvwxy");
    }

    #[test]
    fn available_letters_ignores_invalid_tokens() {
        let used = used(&["5", "ab", "*", "q"]);
        assert_eq!(available_letters(&used), "abcdefghijklmnoprstuvwxyz");
    }

    #[test]
    fn available_and_used_partition_alphabet() {
        let used = used(&["h", "a", "n", "g"]);
        let available = available_letters(&used);

        // Disjoint and jointly covering all 26 letters
        assert_eq!(available.len() + used.len(), 26);
        assert!(used.iter().all(|t| !available.contains(t.as_str())));
    }
}
