//! Wheel of Fortune
//!
//! A word-guessing game for the terminal: spin the wheel, guess a letter,
//! collect points for every occurrence, and don't miss three times.
//!
//! # Quick Start
//!
//! ```rust
//! use wheel_of_fortune::core::{GameState, GuessEngine};
//! use wheel_of_fortune::wheel::Wheel;
//!
//! let mut engine = GuessEngine::new("Koło fortuny").unwrap();
//! let mut wheel = Wheel::default();
//!
//! let spin = wheel.spin(&mut rand::rng());
//! let state = engine.next_turn('O', spin.score);
//! assert_eq!(state, GameState::Next);
//! println!("{} (score {})", engine.guess(), engine.score());
//! ```

// Core game logic
pub mod core;

// Score wheel
pub mod wheel;

// Built-in phrase library
pub mod phrases;

// Rounds, wheel and randomness across a play session
pub mod session;

// Automated letter choice
pub mod guesser;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
