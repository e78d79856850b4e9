//! Phrase library utilities
//!
//! Validation of secret phrases and random choice of the round's secret.

use crate::core::{MIN_SECRET_LEN, SecretError};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Check that a phrase can be used as a secret
///
/// Returns the trimmed phrase.
///
/// # Errors
///
/// Returns `SecretError::Empty` for a blank phrase and
/// `SecretError::TooShort` for fewer than three characters.
///
/// # Examples
/// ```
/// use wheel_of_fortune::phrases::library::validate_phrase;
///
/// assert_eq!(validate_phrase("  Tatry ").unwrap(), "Tatry");
/// assert!(validate_phrase("ab").is_err());
/// ```
pub fn validate_phrase(text: &str) -> Result<String, SecretError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(SecretError::Empty);
    }
    if len < MIN_SECRET_LEN {
        return Err(SecretError::TooShort(len));
    }

    Ok(trimmed.to_string())
}

/// Convert embedded string slice to owned phrases, skipping invalid ones
///
/// # Examples
/// ```
/// use wheel_of_fortune::phrases::library::phrases_from_slice;
/// use wheel_of_fortune::phrases::PHRASES;
///
/// let phrases = phrases_from_slice(PHRASES);
/// assert_eq!(phrases.len(), PHRASES.len());
/// ```
#[must_use]
pub fn phrases_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&phrase| validate_phrase(phrase).ok())
        .collect()
}

/// Pick the secret for a new round uniformly at random
///
/// Returns `None` when the library is empty.
pub fn pick_secret<'a, S: AsRef<str>, R: Rng + ?Sized>(
    phrases: &'a [S],
    rng: &mut R,
) -> Option<&'a str> {
    phrases.choose(rng).map(AsRef::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn validate_trims() {
        let phrase = validate_phrase("\tKoło fortuny \n").unwrap();
        assert_eq!(phrase, "Koło fortuny");
    }

    #[test]
    fn validate_rejects_short_phrases() {
        assert_eq!(validate_phrase(""), Err(SecretError::Empty));
        assert_eq!(validate_phrase("   "), Err(SecretError::Empty));
        assert_eq!(validate_phrase("ab"), Err(SecretError::TooShort(2)));
        // Length is counted in characters, not bytes
        assert_eq!(validate_phrase("żó"), Err(SecretError::TooShort(2)));
        assert!(validate_phrase("abc").is_ok());
    }

    #[test]
    fn phrases_from_slice_skips_invalid() {
        let input = &["Lalka", "no", "", "Pan Tadeusz"];
        let phrases = phrases_from_slice(input);

        assert_eq!(phrases, ["Lalka", "Pan Tadeusz"]);
    }

    #[test]
    fn phrases_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(phrases_from_slice(input).is_empty());
    }

    #[test]
    fn pick_secret_from_library() {
        let phrases = vec!["Lalka".to_string(), "Tatry".to_string()];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let secret = pick_secret(&phrases, &mut rng).unwrap();
            assert!(phrases.iter().any(|p| p == secret));
        }
    }

    #[test]
    fn pick_secret_from_empty_library() {
        let phrases: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pick_secret(&phrases, &mut rng).is_none());
    }
}
