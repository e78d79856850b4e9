//! TUI rendering with ratatui
//!
//! Board, wheel and score panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BLANK, MAX_FAULTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Board
            Constraint::Min(12),   // Wheel and score
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Wheel
            Constraint::Percentage(65), // Score and messages
        ])
        .split(chunks[2]);

    render_wheel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 WHEEL OF FORTUNE - Have fun!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let tile = Style::default()
        .fg(Color::Black)
        .bg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    // Hidden letters show on silver tiles; once the round is over the
    // missing ones are shown in red.
    let spans: Vec<Span> = app
        .engine
        .mask()
        .iter()
        .zip(app.engine.secret().chars())
        .flat_map(|(cell, secret_ch)| {
            let cell_span = match cell {
                Some(' ') => Span::raw("   "),
                Some(ch) => Span::styled(format!(" {ch} "), tile),
                None if app.engine.is_finished() => {
                    Span::styled(format!(" {secret_ch} "), tile.fg(Color::Red))
                }
                None => Span::styled(format!(" {BLANK} "), tile),
            };
            [cell_span, Span::raw(" ")]
        })
        .collect();

    let board = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Secret ({} hidden) ", app.engine.remaining()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_wheel(f: &mut Frame, app: &App, area: Rect) {
    let landed = app.last_spin.map(|spin| spin.segment);

    let items: Vec<ListItem> = app
        .session
        .wheel()
        .segments()
        .iter()
        .enumerate()
        .map(|(index, &score)| {
            let (marker, style) = if landed == Some(index) {
                (
                    "▶",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if index % 2 == 0 {
                (" ", Style::default().fg(Color::LightRed))
            } else {
                (" ", Style::default().fg(Color::LightBlue))
            };
            ListItem::new(format!("{marker} {score:>5}")).style(style)
        })
        .collect();

    let wheel = List::new(items).block(
        Block::default()
            .title(" Wheel ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(wheel, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Length(3), // Faults gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_faults(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let misses: String = app
        .misses
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.engine.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(", Faults {}/{MAX_FAULTS}", app.engine.faults())),
        ]),
        Line::from(vec![
            Span::raw("Missed:  "),
            Span::styled(misses, Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_faults(f: &mut Frame, app: &App, area: Rect) {
    let faults = app.engine.faults().min(MAX_FAULTS);
    let percent = u16::from(faults) * 100 / u16::from(MAX_FAULTS);

    let gauge = Gauge::default()
        .block(Block::default().title(" Faults ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{faults}/{MAX_FAULTS}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Spin => (" Press SPACE or ENTER to spin the wheel ", "", Color::Cyan),
        InputMode::Letter => (
            " Guess a letter and press ENTER... ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | Press 'n' for new round or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &app.session.stats;

    let rounds = Paragraph::new(format!(
        "Rounds: {} | Win Rate: {:.0}%",
        stats.rounds,
        stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let best =
        Paragraph::new(format!("Best score: {}", stats.best_score)).alignment(Alignment::Center);
    f.render_widget(best, chunks[1]);

    let library = Paragraph::new(format!("Phrases: {}", app.session.phrases().len()))
        .alignment(Alignment::Center);
    f.render_widget(library, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Spin => "q: Quit | SPACE: Spin",
        InputMode::Letter => "Enter: Submit | Ctrl-C: Quit",
        InputMode::RoundOver => "q: Quit | n: New Round",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::session::Session;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(secret: &str) -> App {
        let session = Session::new(vec![secret.to_string()], Alphabet::polish(), Some(11));
        App::new(session).unwrap()
    }

    #[test]
    fn renders_hidden_board_and_score() {
        let app = app("kot");
        let text = screen(&app);

        assert!(text.contains("Secret (3 hidden)"));
        assert!(text.contains(" _ "));
        assert!(text.contains("Score: 0, Faults 0/3"));
        assert!(text.contains("5000"));
    }

    #[test]
    fn renders_revealed_letters_and_misses() {
        let mut app = app("kot");
        app.spin();
        app.input_buffer = "o".to_string();
        app.submit_letter();
        app.spin();
        app.input_buffer = "x".to_string();
        app.submit_letter();

        let text = screen(&app);
        assert!(text.contains(" O "));
        assert!(text.contains("Missed:  X"));
        assert!(text.contains("Faults 1/3"));
    }

    #[test]
    fn renders_round_over_prompt() {
        let mut app = app("kot");
        for letter in ["x", "y", "z"] {
            app.spin();
            app.input_buffer = letter.to_string();
            app.submit_letter();
        }

        let text = screen(&app);
        assert!(text.contains("Round over"));
        assert!(text.contains(" K "));
    }
}
