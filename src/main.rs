//! Wheel of Fortune - CLI
//!
//! Word-guessing game with TUI and text modes, plus a headless simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, info};
use wheel_of_fortune::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::Alphabet,
    guesser::GuesserType,
    output::print_simulation_result,
    phrases::{
        PHRASES,
        library::{phrases_from_slice, validate_phrase},
    },
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "wheel_of_fortune",
    about = "Wheel of Fortune: spin the wheel, guess the letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play this phrase instead of a random one from the built-in library
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Alphabet: polish (default, A-Z plus Ą Ń Ł Ó Ź Ż Ć Ę) or latin
    #[arg(
        short,
        long,
        global = true,
        default_value = "polish",
        ignore_case = true,
        value_parser = ["polish", "pl", "latin", "en"]
    )]
    alphabet: String,

    /// Seed for phrase choice and wheel spins
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (no TUI)
    Simple,

    /// Play many rounds automatically and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Letter strategy: frequency (default) or random
        #[arg(
            short,
            long,
            default_value = "frequency",
            value_parser = ["frequency", "random"]
        )]
        guesser: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the phrase library from the -s flag or the embedded list
fn load_phrases(secret: Option<&str>) -> Result<Vec<String>> {
    match secret {
        Some(text) => {
            let phrase = validate_phrase(text).context("Invalid --secret")?;
            Ok(vec![phrase])
        }
        None => Ok(phrases_from_slice(PHRASES)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let phrases = load_phrases(cli.secret.as_deref())?;
    let alphabet = Alphabet::from_name(&cli.alphabet);
    info!(
        "Loaded {} phrases, alphabet of {} letters",
        phrases.len(),
        alphabet.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(phrases, alphabet, cli.seed),
        Commands::Simple => {
            let mut session = Session::new(phrases, alphabet, cli.seed);
            run_simple(&mut session)
        }
        Commands::Simulate { rounds, guesser } => {
            run_simulate_command(rounds, &guesser, cli.seed, alphabet, &phrases)
        }
    }
}

fn run_play_command(phrases: Vec<String>, alphabet: Alphabet, seed: Option<u64>) -> Result<()> {
    use wheel_of_fortune::interactive::{App, run_tui};

    let session = Session::new(phrases, alphabet, seed);
    let app = App::new(session)?;
    run_tui(app)
}

fn run_simulate_command(
    rounds: usize,
    guesser: &str,
    seed: Option<u64>,
    alphabet: Alphabet,
    phrases: &[String],
) -> Result<()> {
    let mut config = SimulationConfig::new(rounds);
    config.guesser = GuesserType::from_name(guesser);
    config.alphabet = alphabet;
    if let Some(seed) = seed {
        config.seed = seed;
    }

    println!("🎡 Simulating {rounds} rounds...");

    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let result = run_simulation(&config, phrases, &pb)?;
    print_simulation_result(&config, &result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_polish_and_play() {
        let cli = Cli::try_parse_from(["wheel_of_fortune"]).unwrap();
        assert_eq!(cli.alphabet, "polish");
        assert!(cli.command.is_none());
    }

    #[test]
    fn alphabet_names_are_checked() {
        let cli = Cli::try_parse_from(["wheel_of_fortune", "--alphabet", "en"]).unwrap();
        assert_eq!(Alphabet::from_name(&cli.alphabet).len(), 26);

        let typo = Cli::try_parse_from(["wheel_of_fortune", "--alphabet", "latn"]);
        assert!(typo.is_err());
    }

    #[test]
    fn guesser_names_are_checked() {
        let args = ["wheel_of_fortune", "simulate", "--guesser", "smart"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn secret_must_be_long_enough() {
        assert!(load_phrases(Some("ab")).is_err());
        assert_eq!(load_phrases(Some(" Lalka ")).unwrap(), vec!["Lalka"]);
        assert_eq!(load_phrases(None).unwrap().len(), PHRASES.len());
    }
}
