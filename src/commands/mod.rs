//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{
    RoundRecord, SimulationConfig, SimulationError, SimulationResult, play_round, run_simulation,
};
