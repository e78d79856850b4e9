//! TUI application state and logic

use crate::core::{GameState, GuessEngine, MAX_FAULTS, parse_letter};
use crate::session::{Session, SessionError};
use crate::wheel::Spin;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const ROUND_OVER_HINT: &str = "Press 'n' for new round or 'q' to quit.";

/// Application state
pub struct App {
    pub session: Session,
    pub engine: GuessEngine,
    pub input_mode: InputMode,
    pub last_spin: Option<Spin>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub misses: Vec<char>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for the player to spin
    Spin,
    /// Wheel stopped, waiting for a letter
    Letter,
    /// Round won or lost
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no round can be started from the session's
    /// phrase library.
    pub fn new(mut session: Session) -> Result<Self, SessionError> {
        let engine = session.new_round()?;

        Ok(Self {
            session,
            engine,
            input_mode: InputMode::Spin,
            last_spin: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome to the Wheel of Fortune!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press SPACE to spin the wheel.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            misses: Vec::new(),
            should_quit: false,
        })
    }

    /// Spin the wheel and ask for a letter
    pub fn spin(&mut self) {
        if self.input_mode != InputMode::Spin {
            return;
        }

        let spin = self.session.spin();
        self.last_spin = Some(spin);
        self.input_mode = InputMode::Letter;
        self.input_buffer.clear();
        self.add_message(
            &format!("The wheel stops at {}. Guess a letter!", spin.score),
            MessageStyle::Info,
        );
    }

    /// Play the typed letter for the current spin
    ///
    /// Invalid input leaves the spin in place so the player can retry.
    pub fn submit_letter(&mut self) {
        if self.input_mode != InputMode::Letter {
            return;
        }
        let Some(spin) = self.last_spin else {
            return;
        };

        let letter = match parse_letter(&self.input_buffer, &self.engine) {
            Ok(letter) => letter,
            Err(e) => {
                self.input_buffer.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        let hidden_before = self.engine.remaining();
        let state = self.engine.next_turn(letter, spin.score);
        let found = hidden_before - self.engine.remaining();
        debug!("Guess '{letter}' for {}: {found} found", spin.score);

        if found == 0 {
            if !self.misses.contains(&letter) {
                self.misses.push(letter);
            }
            self.add_message(
                &format!(
                    "No '{letter}' in the phrase! Faults {}/{MAX_FAULTS}",
                    self.engine.faults()
                ),
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!(
                    "{found} × '{letter}' for {} points",
                    u64::from(spin.score) * found as u64
                ),
                MessageStyle::Success,
            );
        }

        match state {
            GameState::Next => self.input_mode = InputMode::Spin,
            GameState::Win => {
                self.finish_round();
                self.add_message(
                    &format!("🎉 You have Won! Your score is {}", self.engine.score()),
                    MessageStyle::Success,
                );
                self.add_message(ROUND_OVER_HINT, MessageStyle::Info);
            }
            GameState::Lose => {
                self.finish_round();
                self.add_message(
                    &format!("You have lost! Your score is {}", self.engine.score()),
                    MessageStyle::Error,
                );
                self.add_message(
                    &format!("The phrase was: {}", self.engine.secret()),
                    MessageStyle::Info,
                );
                self.add_message(ROUND_OVER_HINT, MessageStyle::Info);
            }
        }
    }

    fn finish_round(&mut self) {
        self.session.record(&self.engine);
        self.input_mode = InputMode::RoundOver;
    }

    /// Start a new round with a fresh phrase
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the picked phrase cannot be played.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        self.engine = self.session.new_round()?;
        self.input_mode = InputMode::Spin;
        self.last_spin = None;
        self.input_buffer.clear();
        self.misses.clear();
        self.messages.clear();
        self.add_message(
            "New round started! Press SPACE to spin.",
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Spin => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(' ') | KeyCode::Enter => app.spin(),
                    _ => {}
                },
                InputMode::Letter => match key.code {
                    // One letter at most; typing again replaces it
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_buffer.clear();
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_letter(),
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => {
                        if let Err(e) = app.new_round() {
                            app.add_message(&e.to_string(), MessageStyle::Error);
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
