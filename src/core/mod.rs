//! Core game types for Wheel of Fortune
//!
//! Pure game logic with no terminal or I/O concerns: the guessing state
//! machine, the alphabet it accepts and the input check in front of it.

mod alphabet;
mod engine;
mod letter;

pub use alphabet::Alphabet;
pub use engine::{BLANK, GameState, GuessEngine, MAX_FAULTS, MIN_SECRET_LEN, SecretError};
pub use letter::{LetterError, parse_letter};
