//! Validation of a player's letter before it reaches the engine

use super::GuessEngine;
use thiserror::Error;

/// Why a typed letter was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Should enter EXACTLY ONE letter...")]
    NotSingle,
    #[error("'{0}' already guessed. Retry...")]
    AlreadyGuessed(char),
    #[error("'{0}' is not a valid LETTER...")]
    NotALetter(char),
}

/// Turn raw player input into a letter the engine can take
///
/// Input is trimmed and uppercased. Checks run in the order the player sees
/// them: one character, not already on the board, part of the alphabet.
///
/// # Errors
/// Returns the first `LetterError` that applies.
///
/// # Examples
/// ```
/// use wheel_of_fortune::core::{GuessEngine, LetterError, parse_letter};
///
/// let engine = GuessEngine::new("kot").unwrap();
/// assert_eq!(parse_letter(" k ", &engine), Ok('K'));
/// assert_eq!(parse_letter("ko", &engine), Err(LetterError::NotSingle));
/// assert_eq!(parse_letter("7", &engine), Err(LetterError::NotALetter('7')));
/// ```
pub fn parse_letter(input: &str, engine: &GuessEngine) -> Result<char, LetterError> {
    let mut chars = input.trim().chars();
    let (Some(typed), None) = (chars.next(), chars.next()) else {
        return Err(LetterError::NotSingle);
    };

    let mut upper = typed.to_uppercase();
    let (Some(letter), None) = (upper.next(), upper.next()) else {
        return Err(LetterError::NotALetter(typed));
    };

    if engine.already_guessed(letter) {
        return Err(LetterError::AlreadyGuessed(letter));
    }

    if !engine.valid_letter(letter) {
        return Err(LetterError::NotALetter(letter));
    }

    Ok(letter)
}
