//! Wheel of Fortune guessing state machine
//!
//! The engine owns the secret phrase, the player's guess mask, the score and
//! the fault counter. It has a single mutating operation, [`GuessEngine::next_turn`],
//! and trusts its caller to submit letters that are valid and not yet guessed
//! (see [`crate::core::parse_letter`] for the boundary check).

use super::Alphabet;
use log::{debug, info, warn};
use std::fmt;
use thiserror::Error;

/// Number of faults that ends a round
pub const MAX_FAULTS: u8 = 3;

/// Placeholder shown for a letter that has not been revealed yet
pub const BLANK: char = '_';

/// Minimum length of a phrase accepted into the library
pub const MIN_SECRET_LEN: usize = 3;

/// Outcome of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Round continues
    Next,
    /// Whole phrase revealed
    Win,
    /// Third fault
    Lose,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Next)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "NEXT"),
            Self::Win => write!(f, "WIN"),
            Self::Lose => write!(f, "LOSE"),
        }
    }
}

/// Error type for unusable secret phrases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Secret is empty")]
    Empty,
    #[error("Secret has to have at least 3 characters, got {0}")]
    TooShort(usize),
    #[error("Secret has no letters to guess")]
    NoLetters,
}

/// Game state for one round
///
/// `guess` always has the same length as `secret`, and every revealed
/// position holds the secret's letter at that position.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    secret: Vec<char>,
    guess: Vec<Option<char>>,
    score: u64,
    faults: u8,
    state: GameState,
    alphabet: Alphabet,
}

impl GuessEngine {
    /// Start a round with the default (Polish) alphabet
    ///
    /// # Errors
    /// Returns `SecretError` if the phrase is blank or has nothing to guess.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{GameState, GuessEngine};
    ///
    /// let mut engine = GuessEngine::new("cat").unwrap();
    /// assert_eq!(engine.guess(), "___");
    ///
    /// assert_eq!(engine.next_turn('A', 100), GameState::Next);
    /// assert_eq!(engine.guess(), "_A_");
    /// assert_eq!(engine.score(), 100);
    /// ```
    pub fn new(secret: &str) -> Result<Self, SecretError> {
        Self::with_alphabet(secret, Alphabet::default())
    }

    /// Start a round with a specific alphabet
    ///
    /// The phrase is trimmed and uppercased. Characters outside the alphabet
    /// (spaces, punctuation, digits) are revealed from the start.
    ///
    /// # Errors
    /// Returns `SecretError::Empty` for a blank phrase and
    /// `SecretError::NoLetters` if no character belongs to the alphabet.
    pub fn with_alphabet(secret: &str, alphabet: Alphabet) -> Result<Self, SecretError> {
        let secret: Vec<char> = secret.trim().to_uppercase().chars().collect();

        if secret.is_empty() {
            return Err(SecretError::Empty);
        }

        let guess: Vec<Option<char>> = secret
            .iter()
            .map(|&ch| (!alphabet.contains(ch)).then_some(ch))
            .collect();

        if guess.iter().all(Option::is_some) {
            return Err(SecretError::NoLetters);
        }

        debug!(
            "New round: {} positions, {} hidden",
            secret.len(),
            guess.iter().filter(|cell| cell.is_none()).count()
        );

        Ok(Self {
            secret,
            guess,
            score: 0,
            faults: 0,
            state: GameState::Next,
            alphabet,
        })
    }

    /// Play one turn: reveal every occurrence of `letter`
    ///
    /// Each occurrence pays `score_for_letter`. A letter with no occurrence
    /// is a fault. The third fault loses the round even if the board is
    /// complete; otherwise a complete board wins.
    ///
    /// Once the round is over, further calls change nothing and return the
    /// final state.
    pub fn next_turn(&mut self, letter: char, score_for_letter: u32) -> GameState {
        if self.state.is_terminal() {
            warn!(
                "Turn with '{letter}' ignored: round already ended in {}",
                self.state
            );
            return self.state;
        }

        let mut found: u32 = 0;
        let guess: Vec<Option<char>> = self
            .secret
            .iter()
            .zip(&self.guess)
            .map(|(&secret_ch, &revealed)| {
                if secret_ch == letter {
                    found += 1;
                    Some(letter)
                } else {
                    revealed
                }
            })
            .collect();
        self.guess = guess;

        self.score += u64::from(score_for_letter) * u64::from(found);

        if found == 0 {
            self.faults += 1;
        }

        self.state = if self.faults == MAX_FAULTS {
            GameState::Lose
        } else if self.is_solved() {
            GameState::Win
        } else {
            GameState::Next
        };

        debug!(
            "Turn '{letter}' x{score_for_letter}: found {found}, score {}, faults {}/{MAX_FAULTS}",
            self.score, self.faults
        );
        if self.state.is_terminal() {
            info!("Round ended in {} with score {}", self.state, self.score);
        }

        self.state
    }

    /// Check whether `ch` is already shown on the board
    #[must_use]
    pub fn already_guessed(&self, ch: char) -> bool {
        self.guess.contains(&Some(ch))
    }

    /// Check whether `ch` belongs to the engine's alphabet
    #[must_use]
    pub fn valid_letter(&self, ch: char) -> bool {
        self.alphabet.contains(ch)
    }

    /// The uppercase secret phrase
    #[must_use]
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    /// The board as text, with [`BLANK`] for hidden letters
    #[must_use]
    pub fn guess(&self) -> String {
        self.guess.iter().map(|cell| cell.unwrap_or(BLANK)).collect()
    }

    /// The board cell by cell; `None` marks a hidden letter
    #[inline]
    #[must_use]
    pub fn mask(&self) -> &[Option<char>] {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn faults(&self) -> u8 {
        self.faults
    }

    /// State produced by the last turn (`Next` before the first one)
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Number of letters still hidden
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guess.iter().filter(|cell| cell.is_none()).count()
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn is_solved(&self) -> bool {
        self.guess.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_hides_every_letter() {
        let engine = GuessEngine::new("cat").unwrap();
        assert_eq!(engine.secret(), "CAT");
        assert_eq!(engine.guess(), "___");
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.faults(), 0);
        assert_eq!(engine.state(), GameState::Next);
        assert_eq!(engine.remaining(), 3);
    }

    #[test]
    fn spaces_are_prefilled() {
        let engine = GuessEngine::new("Pan Tadeusz").unwrap();
        assert_eq!(engine.guess(), "___ _______");
        assert_eq!(engine.mask()[3], Some(' '));
        assert_eq!(engine.remaining(), 10);
    }

    #[test]
    fn punctuation_and_digits_are_prefilled() {
        let engine = GuessEngine::new("Quo vadis, 2024!").unwrap();
        assert_eq!(engine.guess(), "___ _____, 2024!");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let engine = GuessEngine::new("  dog \n").unwrap();
        assert_eq!(engine.secret(), "DOG");
        assert_eq!(engine.guess().len(), 3);
    }

    #[test]
    fn polish_letters_occupy_one_position() {
        let mut engine = GuessEngine::new("żółw").unwrap();
        assert_eq!(engine.secret(), "ŻÓŁW");
        assert_eq!(engine.mask().len(), 4);

        assert_eq!(engine.next_turn('Ó', 300), GameState::Next);
        assert_eq!(engine.guess(), "_Ó__");
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert_eq!(GuessEngine::new("").unwrap_err(), SecretError::Empty);
        assert_eq!(GuessEngine::new("   ").unwrap_err(), SecretError::Empty);
    }

    #[test]
    fn secret_without_letters_is_rejected() {
        assert_eq!(
            GuessEngine::new("123 !").unwrap_err(),
            SecretError::NoLetters
        );
    }

    #[test]
    fn cat_example_wins() {
        let mut engine = GuessEngine::new("CAT").unwrap();

        assert_eq!(engine.next_turn('A', 100), GameState::Next);
        assert_eq!(engine.guess(), "_A_");
        assert_eq!(engine.score(), 100);
        assert_eq!(engine.faults(), 0);

        assert_eq!(engine.next_turn('C', 50), GameState::Next);
        assert_eq!(engine.guess(), "CA_");
        assert_eq!(engine.score(), 150);

        assert_eq!(engine.next_turn('T', 0), GameState::Win);
        assert_eq!(engine.guess(), "CAT");
        assert_eq!(engine.score(), 150);
        assert_eq!(engine.faults(), 0);
        assert!(engine.is_finished());
    }

    #[test]
    fn dog_example_loses_on_third_fault() {
        let mut engine = GuessEngine::new("DOG").unwrap();

        assert_eq!(engine.next_turn('X', 1000), GameState::Next);
        assert_eq!(engine.faults(), 1);
        assert_eq!(engine.next_turn('Y', 500), GameState::Next);
        assert_eq!(engine.faults(), 2);
        assert_eq!(engine.next_turn('Z', 5000), GameState::Lose);
        assert_eq!(engine.faults(), 3);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn score_counts_every_occurrence() {
        let mut engine = GuessEngine::new("banana").unwrap();
        engine.next_turn('A', 300);
        assert_eq!(engine.score(), 900);
        engine.next_turn('N', 100);
        assert_eq!(engine.score(), 1100);
    }

    #[test]
    fn zero_score_segment_still_reveals() {
        let mut engine = GuessEngine::new("kot").unwrap();
        assert_eq!(engine.next_turn('K', 0), GameState::Next);
        assert_eq!(engine.guess(), "K__");
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.faults(), 0);
    }

    #[test]
    fn repeated_miss_counts_again() {
        let mut engine = GuessEngine::new("kot").unwrap();
        engine.next_turn('Z', 100);
        engine.next_turn('Z', 100);
        assert_eq!(engine.faults(), 2);
    }

    #[test]
    fn win_after_two_faults() {
        let mut engine = GuessEngine::new("ab").unwrap();
        engine.next_turn('X', 100);
        engine.next_turn('Y', 100);
        engine.next_turn('A', 100);
        assert_eq!(engine.next_turn('B', 100), GameState::Win);
        assert_eq!(engine.faults(), 2);
    }

    #[test]
    fn turns_after_the_end_change_nothing() {
        let mut engine = GuessEngine::new("DOG").unwrap();
        for letter in ['X', 'Y', 'Z'] {
            engine.next_turn(letter, 100);
        }
        assert_eq!(engine.next_turn('D', 100), GameState::Lose);
        assert_eq!(engine.faults(), 3);
        assert_eq!(engine.guess(), "___");
        assert_eq!(engine.score(), 0);

        let mut won = GuessEngine::new("A").unwrap();
        assert_eq!(won.next_turn('A', 100), GameState::Win);
        assert_eq!(won.next_turn('Q', 100), GameState::Win);
        assert_eq!(won.faults(), 0);
    }

    #[test]
    fn already_guessed_only_sees_revealed_letters() {
        let mut engine = GuessEngine::new("CAT").unwrap();
        assert!(!engine.already_guessed('A'));

        engine.next_turn('A', 100);
        assert!(engine.already_guessed('A'));
        assert!(!engine.already_guessed('C'));
        assert!(!engine.already_guessed('T'));
        assert!(!engine.already_guessed('X'));
    }

    #[test]
    fn valid_letter_uses_alphabet() {
        let engine = GuessEngine::new("CAT").unwrap();
        assert!(engine.valid_letter('Q'));
        assert!(engine.valid_letter('Ę'));
        assert!(!engine.valid_letter('7'));
        assert!(!engine.valid_letter(' '));
        assert!(!engine.valid_letter('?'));

        let latin = GuessEngine::with_alphabet("CAT", Alphabet::latin()).unwrap();
        assert!(!latin.valid_letter('Ę'));
    }

    #[test]
    fn latin_alphabet_prefills_diacritics() {
        let engine = GuessEngine::with_alphabet("Łódź", Alphabet::latin()).unwrap();
        assert_eq!(engine.guess(), "ŁÓ_Ź");
    }

    #[test]
    fn game_state_display() {
        assert_eq!(GameState::Next.to_string(), "NEXT");
        assert_eq!(GameState::Win.to_string(), "WIN");
        assert_eq!(GameState::Lose.to_string(), "LOSE");
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn letters() -> impl Strategy<Value = Vec<(char, u32)>> {
            let alphabet = Alphabet::polish().letters().to_vec();
            prop::collection::vec((prop::sample::select(alphabet), 0..=5000u32), 0..40)
        }

        proptest! {
            #[test]
            fn turn_invariants_hold(secret in "[A-GĄŁŻ ,]{1,24}", turns in letters()) {
                let Ok(mut engine) = GuessEngine::new(&secret) else {
                    return Ok(());
                };
                let secret_chars: Vec<char> = engine.secret().chars().collect();

                for (letter, score_for_letter) in turns {
                    let score_before = engine.score();
                    let faults_before = engine.faults();
                    let was_finished = engine.is_finished();
                    let occurrences = secret_chars.iter().filter(|&&ch| ch == letter).count();

                    let state = engine.next_turn(letter, score_for_letter);

                    prop_assert_eq!(engine.mask().len(), secret_chars.len());
                    for (cell, &expected) in engine.mask().iter().zip(&secret_chars) {
                        if let Some(revealed) = cell {
                            prop_assert_eq!(*revealed, expected);
                        }
                    }
                    prop_assert!(engine.score() >= score_before);
                    prop_assert!(engine.faults() <= MAX_FAULTS);

                    if was_finished {
                        prop_assert_eq!(engine.faults(), faults_before);
                        prop_assert_eq!(engine.score(), score_before);
                        continue;
                    }

                    if occurrences == 0 {
                        prop_assert_eq!(engine.faults(), faults_before + 1);
                    } else {
                        prop_assert_eq!(engine.faults(), faults_before);
                    }

                    prop_assert_eq!(state == GameState::Lose, engine.faults() == MAX_FAULTS);
                    prop_assert_eq!(
                        state == GameState::Win,
                        engine.faults() < MAX_FAULTS && engine.guess() == engine.secret()
                    );
                }
            }
        }
    }
}
