//! Play session shared by the front ends
//!
//! Holds the phrase library, the wheel and the random source across rounds,
//! and keeps the running statistics.

use crate::core::{Alphabet, GameState, GuessEngine, SecretError};
use crate::phrases::library::pick_secret;
use crate::wheel::{Spin, Wheel};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Error type for rounds that cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No phrases to play")]
    NoPhrases,
    #[error("Unplayable phrase: {0}")]
    Secret(#[from] SecretError),
}

/// Running totals across rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds: usize,
    pub wins: usize,
    pub best_score: u64,
    pub total_score: u64,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Phrases, wheel and randomness for a sequence of rounds
pub struct Session {
    phrases: Vec<String>,
    alphabet: Alphabet,
    wheel: Wheel,
    rng: StdRng,
    pub stats: Statistics,
}

impl Session {
    /// Create a session over a phrase library
    ///
    /// With a seed, the phrase choice and every spin are reproducible.
    #[must_use]
    pub fn new(phrases: Vec<String>, alphabet: Alphabet, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            phrases,
            alphabet,
            wheel: Wheel::default(),
            rng,
            stats: Statistics::default(),
        }
    }

    /// Start a round with a randomly picked phrase
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPhrases` if the library is empty, or
    /// `SessionError::Secret` if the picked phrase cannot be played.
    pub fn new_round(&mut self) -> Result<GuessEngine, SessionError> {
        let Some(secret) = pick_secret(&self.phrases, &mut self.rng) else {
            return Err(SessionError::NoPhrases);
        };
        Ok(GuessEngine::with_alphabet(secret, self.alphabet.clone())?)
    }

    /// Spin the wheel for the next turn
    pub fn spin(&mut self) -> Spin {
        self.wheel.spin(&mut self.rng)
    }

    /// Count a finished round in the statistics
    ///
    /// Rounds still in progress are not counted.
    pub fn record(&mut self, engine: &GuessEngine) {
        match engine.state() {
            GameState::Next => return,
            GameState::Win => self.stats.wins += 1,
            GameState::Lose => {}
        }

        self.stats.rounds += 1;
        self.stats.total_score += engine.score();
        self.stats.best_score = self.stats.best_score.max(engine.score());

        info!(
            "Session: {} rounds, {} won, best score {}",
            self.stats.rounds, self.stats.wins, self.stats.best_score
        );
    }

    #[inline]
    #[must_use]
    pub const fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    #[inline]
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
