//! Simple text mode
//!
//! Line-based game loop without the TUI

use crate::core::{GameState, GuessEngine, MAX_FAULTS, parse_letter};
use crate::output::formatters::{fault_bar, format_board};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const BANNER: &str = "
╔══════════════════════════════════════════════════════════════╗
║                 Wheel of Fortune - Text Mode                 ║
╚══════════════════════════════════════════════════════════════╝

Spin the wheel, then guess a letter. Every occurrence of the";

const RULE: &str = "────────────────────────────────────────────────────────────";

/// What the player asked for at the spin prompt
enum RoundControl {
    Continue,
    NewRound,
    Quit,
}

/// Run the text mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// round can be started from the phrase library.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple_with(session, &mut input, &mut output)
}

/// Run the text mode on any reader and writer
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails or if no round can be
/// started from the phrase library.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{BANNER}")?;
    writeln!(
        output,
        "letter pays what the wheel shows. {MAX_FAULTS} misses and you lose!\n"
    )?;
    writeln!(output, "Type 'quit' to exit or 'new' for a new round\n")?;

    loop {
        let mut engine = session.new_round()?;
        writeln!(
            output,
            "🎡 New round! {} letters to guess.\n",
            engine.remaining()
        )?;

        loop {
            print_board(output, &engine)?;

            match read_spin_command(input, output)? {
                RoundControl::Quit => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                RoundControl::NewRound => {
                    writeln!(output, "\n🔄 New round started!\n")?;
                    break;
                }
                RoundControl::Continue => {}
            }

            let spin = session.spin();
            writeln!(
                output,
                "The wheel stops at {}",
                spin.score.to_string().bright_yellow().bold()
            )?;

            let Some(letter) = read_letter(input, output, &engine)? else {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            };

            let hidden_before = engine.remaining();
            let state = engine.next_turn(letter, spin.score);
            let found = hidden_before - engine.remaining();

            if found == 0 {
                let faults = engine.faults();
                let miss = format!("❌ No '{letter}' in the phrase! Faults {faults}/{MAX_FAULTS}");
                writeln!(output, "{}", miss.red())?;
            } else {
                let points = u64::from(spin.score) * found as u64;
                let hit = format!("✓ {found} × '{letter}' for {points} points");
                writeln!(output, "{}", hit.green())?;
            }

            if state.is_terminal() {
                session.record(&engine);
                print_round_end(output, &engine)?;

                let again = read_line(input, output, "Play again? (yes/no)")?;
                let again = again.unwrap_or_default().to_lowercase();
                if matches!(again.as_str(), "yes" | "y") {
                    writeln!(output)?;
                    break;
                }
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn print_board<W: Write>(output: &mut W, engine: &GuessEngine) -> io::Result<()> {
    writeln!(output, "{RULE}")?;
    writeln!(output, "  {}", format_board(engine).bright_white().bold())?;
    writeln!(
        output,
        "  Score: {}, Faults {}/{MAX_FAULTS} {}",
        engine.score(),
        engine.faults(),
        fault_bar(engine.faults())
    )?;
    writeln!(output, "{RULE}")
}

fn print_round_end<W: Write>(output: &mut W, engine: &GuessEngine) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    match engine.state() {
        GameState::Win => writeln!(
            output,
            "{}",
            format!("🎉 You have Won! Your score is {}", engine.score())
                .bright_green()
                .bold()
        )?,
        GameState::Lose => {
            writeln!(
                output,
                "{}",
                format!("💥 You have lost! Your score is {}", engine.score())
                    .bright_red()
                    .bold()
            )?;
            writeln!(output, "The phrase was: {}", engine.secret())?;
        }
        GameState::Next => {}
    }
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())
}

fn read_spin_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<RoundControl> {
    let Some(line) = read_line(input, output, "Press Enter to spin")? else {
        return Ok(RoundControl::Quit);
    };

    Ok(match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => RoundControl::Quit,
        "new" | "n" => RoundControl::NewRound,
        _ => RoundControl::Continue,
    })
}

/// Ask until the player types an acceptable letter; `None` at end of input
fn read_letter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    engine: &GuessEngine,
) -> io::Result<Option<char>> {
    loop {
        let Some(line) = read_line(input, output, "Guess a letter")? else {
            return Ok(None);
        };

        match parse_letter(&line, engine) {
            Ok(letter) => return Ok(Some(letter)),
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
