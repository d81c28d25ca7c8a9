//! Short identifier generation and shape checking.
//!
//! Identifiers are fixed-length, case-sensitive base62 strings drawn from a
//! cryptographically secure source. Uniqueness is probabilistic here; the
//! storage layer enforces it for real with conditional inserts.

use regex::Regex;
use std::sync::LazyLock;

/// Alphabet used for identifiers: digits, then uppercase, then lowercase.
pub const ID_ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Fixed identifier length in characters.
pub const ID_LENGTH: usize = 12;

static ID_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9A-Za-z]{{{ID_LENGTH}}}$")).expect("identifier regex is valid")
});

/// Generates a random identifier of [`ID_LENGTH`] base62 characters.
///
/// Random bytes are masked to six bits and values outside the alphabet are
/// discarded, so every character is drawn uniformly from the 62-symbol set.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate();
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate() -> String {
    let mut id = String::with_capacity(ID_LENGTH);
    // Oversized buffer so a single fill almost always completes the id
    // despite the 2-in-64 rejection rate.
    let mut buffer = [0u8; 2 * ID_LENGTH];

    while id.len() < ID_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            let index = (byte & 0x3f) as usize;
            if index < ID_ALPHABET.len() {
                id.push(ID_ALPHABET[index] as char);
                if id.len() == ID_LENGTH {
                    break;
                }
            }
        }
    }

    id
}

/// Returns `true` if `candidate` has the exact shape of an issued identifier.
///
/// Lets lookup paths reject junk paths (favicons, crawler probes) without
/// touching storage.
pub fn matches_format(candidate: &str) -> bool {
    ID_FORMAT.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_correct_length() {
        let id = generate();
        assert_eq!(id.len(), ID_LENGTH);
    }

    #[test]
    fn test_generate_uses_only_alphabet_characters() {
        for _ in 0..100 {
            let id = generate();
            assert!(
                id.bytes().all(|b| ID_ALPHABET.contains(&b)),
                "unexpected character in '{}'",
                id
            );
        }
    }

    #[test]
    fn test_generate_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            let id = generate();
            ids.insert(id);
        }

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_is_not_constant() {
        let first = generate();
        let second = generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let symbols: HashSet<u8> = ID_ALPHABET.iter().copied().collect();
        assert_eq!(symbols.len(), 62);
    }

    #[test]
    fn test_matches_format_accepts_generated_ids() {
        for _ in 0..100 {
            assert!(matches_format(&generate()));
        }
    }

    #[test]
    fn test_matches_format_rejects_wrong_length() {
        assert!(!matches_format("abc123"));
        assert!(!matches_format("abcdefghij1234"));
        assert!(!matches_format(""));
    }

    #[test]
    fn test_matches_format_rejects_non_alphanumeric() {
        assert!(!matches_format("abcd-efgh_12"));
        assert!(!matches_format("abcd efgh123"));
        assert!(!matches_format("abcdefgh123!"));
    }
}
