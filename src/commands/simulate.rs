//! Simulation command
//!
//! Plays many rounds automatically and gathers statistics.

use crate::core::{Alphabet, GameState, GuessEngine, MAX_FAULTS, SecretError};
use crate::guesser::{Guesser, GuesserType};
use crate::wheel::Wheel;
use indicatif::ProgressBar;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: u64,
    pub guesser: GuesserType,
    pub alphabet: Alphabet,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            seed: 0,
            guesser: GuesserType::from_name("frequency"),
            alphabet: Alphabet::default(),
        }
    }
}

/// Error type for simulations that cannot start
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("No phrases to play")]
    NoPhrases,
    #[error("Unplayable phrase: {0}")]
    Secret(#[from] SecretError),
}

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub secret: String,
    pub state: GameState,
    pub score: u64,
    pub faults: u8,
    pub turns: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub rounds: Vec<RoundRecord>,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_score: f64,
    pub best_score: u64,
    pub average_turns: f64,
    pub fault_distribution: FxHashMap<u8, usize>,
    pub duration: Duration,
}

/// Play a single round with the given guesser
///
/// # Errors
///
/// Returns `SecretError` if the phrase cannot be played.
pub fn play_round<G: Guesser>(
    guesser: &G,
    secret: &str,
    alphabet: &Alphabet,
    rng: &mut StdRng,
) -> Result<RoundRecord, SecretError> {
    let mut engine = GuessEngine::with_alphabet(secret, alphabet.clone())?;
    let mut wheel = Wheel::default();
    let mut tried: FxHashSet<char> = FxHashSet::default();
    let mut turns = 0;

    while !engine.is_finished() {
        let Some(letter) = guesser.next_letter(&engine, &tried, rng) else {
            break;
        };
        tried.insert(letter);

        let spin = wheel.spin(rng);
        engine.next_turn(letter, spin.score);
        turns += 1;
    }

    debug!(
        "Simulated '{}': {} after {turns} turns",
        engine.secret(),
        engine.state()
    );

    Ok(RoundRecord {
        secret: engine.secret(),
        state: engine.state(),
        score: engine.score(),
        faults: engine.faults(),
        turns,
    })
}

/// Run the simulation across the phrase library
///
/// Rounds cycle through `phrases` in order and run in parallel; round `i`
/// uses its own generator seeded with `seed + i`, so results do not depend
/// on scheduling. The progress bar is cleared whether or not the run
/// succeeds.
///
/// # Errors
///
/// Returns `SimulationError::NoPhrases` for an empty library, or the first
/// unplayable phrase.
pub fn run_simulation(
    config: &SimulationConfig,
    phrases: &[String],
    progress: &ProgressBar,
) -> Result<SimulationResult, SimulationError> {
    if phrases.is_empty() {
        progress.finish_and_clear();
        return Err(SimulationError::NoPhrases);
    }

    info!(
        "Simulating {} rounds with the {} guesser (seed {})",
        config.rounds,
        config.guesser.name(),
        config.seed
    );

    let start = Instant::now();

    let rounds = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let secret = &phrases[index % phrases.len()];
            let record = play_round(&config.guesser, secret, &config.alphabet, &mut rng);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>();

    let duration = start.elapsed();
    progress.finish_and_clear();
    let rounds = rounds?;

    let total = rounds.len();
    let wins = rounds.iter().filter(|r| r.state == GameState::Win).count();
    let losses = rounds.iter().filter(|r| r.state == GameState::Lose).count();
    let total_score: u64 = rounds.iter().map(|r| r.score).sum();
    let total_turns: usize = rounds.iter().map(|r| r.turns).sum();

    let mut fault_distribution: FxHashMap<u8, usize> = FxHashMap::default();
    for record in &rounds {
        *fault_distribution.entry(record.faults).or_insert(0) += 1;
    }

    let ratio = |value: f64| value / total.max(1) as f64;

    Ok(SimulationResult {
        wins,
        losses,
        win_rate: ratio(wins as f64) * 100.0,
        average_score: ratio(total_score as f64),
        best_score: rounds.iter().map(|r| r.score).max().unwrap_or(0),
        average_turns: ratio(total_turns as f64),
        fault_distribution,
        duration,
        rounds,
    })
}

/// Fault counts a round can end with, for reporting
#[must_use]
pub fn fault_buckets() -> std::ops::RangeInclusive<u8> {
    0..=MAX_FAULTS
}
