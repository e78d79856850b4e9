//! Phrase library for Wheel of Fortune
//!
//! Provides the built-in phrases compiled into the binary.

mod embedded;
pub mod library;

pub use embedded::{PHRASES, PHRASES_COUNT};
