//! Guessable letters
//!
//! The set of letters a player may submit. Anything outside the alphabet is
//! pre-filled on the board and never guessed.

use rustc_hash::FxHashSet;

const LATIN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const POLISH_DIACRITICS: &str = "ĄŃŁÓŹŻĆĘ";

/// An ordered set of uppercase letters
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<char>,
    lookup: FxHashSet<char>,
}

impl Alphabet {
    /// The 26 Latin letters plus Ą Ń Ł Ó Ź Ż Ć Ę
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Alphabet;
    ///
    /// let alphabet = Alphabet::polish();
    /// assert_eq!(alphabet.len(), 34);
    /// assert!(alphabet.contains('Ż'));
    /// ```
    #[must_use]
    pub fn polish() -> Self {
        Self::from_letters(LATIN_LETTERS.chars().chain(POLISH_DIACRITICS.chars()))
    }

    /// The 26 Latin letters only
    #[must_use]
    pub fn latin() -> Self {
        Self::from_letters(LATIN_LETTERS.chars())
    }

    /// Build an alphabet from arbitrary letters
    ///
    /// Letters are uppercased; duplicates keep their first position.
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut ordered = Vec::new();
        let mut lookup = FxHashSet::default();

        for letter in letters.into_iter().flat_map(char::to_uppercase) {
            if lookup.insert(letter) {
                ordered.push(letter);
            }
        }

        Self {
            letters: ordered,
            lookup,
        }
    }

    /// Create alphabet from name string
    ///
    /// Supported names: "polish", "pl", "latin", "en".
    /// Defaults to polish if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "latin" | "en" => Self::latin(),
            _ => Self::polish(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.lookup.contains(&ch)
    }

    /// Letters in alphabet order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::polish()
    }
}
