//! Letter-picking strategies for automated play
//!
//! Used by the simulation to play rounds without a human at the keyboard.

mod strategy;

pub use strategy::{FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
