//! Formatting utilities for terminal output

use crate::core::{BLANK, GuessEngine, MAX_FAULTS};

/// Format the board with a space between cells
///
/// A space in the phrase ends up as three spaces, keeping words apart.
#[must_use]
pub fn format_board(engine: &GuessEngine) -> String {
    engine
        .mask()
        .iter()
        .map(|cell| String::from(cell.unwrap_or(BLANK)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One mark per fault, filled for faults already made
#[must_use]
pub fn fault_bar(faults: u8) -> String {
    let made = usize::from(faults.min(MAX_FAULTS));
    let open = usize::from(MAX_FAULTS) - made;
    format!("{}{}", "✖".repeat(made), "·".repeat(open))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
