//! Guesser trait and concrete implementations

use crate::core::GuessEngine;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Polish letters from most to least frequent
const POLISH_FREQUENCY: &str = "AIOEZNRWSCTKYDPMULJŁBGĘHĄÓŻŚĆFŃQŹVX";

/// A strategy for choosing the next letter to submit
pub trait Guesser {
    /// Pick a letter that is in the engine's alphabet, not on the board and
    /// not in `tried`
    ///
    /// Returns `None` when no such letter is left.
    fn next_letter<R: Rng + ?Sized>(
        &self,
        engine: &GuessEngine,
        tried: &FxHashSet<char>,
        rng: &mut R,
    ) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of the guesser while keeping static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum GuesserType {
    /// Most frequent letters first (default)
    Frequency(FrequencyGuesser),
    /// Uniformly random untried letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        engine: &GuessEngine,
        tried: &FxHashSet<char>,
        rng: &mut R,
    ) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(engine, tried, rng),
            Self::Random(g) => g.next_letter(engine, tried, rng),
        }
    }
}

impl GuesserType {
    /// Create guesser from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

fn is_open(letter: char, engine: &GuessEngine, tried: &FxHashSet<char>) -> bool {
    engine.valid_letter(letter) && !engine.already_guessed(letter) && !tried.contains(&letter)
}

/// Frequency guesser
///
/// Walks the Polish letter frequency table, then any alphabet letters the
/// table does not cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        engine: &GuessEngine,
        tried: &FxHashSet<char>,
        _rng: &mut R,
    ) -> Option<char> {
        POLISH_FREQUENCY
            .chars()
            .chain(engine.alphabet().letters().iter().copied())
            .find(|&letter| is_open(letter, engine, tried))
    }
}

/// Random guesser
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        engine: &GuessEngine,
        tried: &FxHashSet<char>,
        rng: &mut R,
    ) -> Option<char> {
        let open: Vec<char> = engine
            .alphabet()
            .letters()
            .iter()
            .copied()
            .filter(|&letter| is_open(letter, engine, tried))
            .collect();

        open.choose(rng).copied()
    }
}
