//! TUI application state and logic

use crate::core::MAX_GUESSES;
use crate::dictionary::Dictionary;
use crate::game::{GameBoard, GameStatus, SubmitOutcome};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub board: GameBoard<Dictionary>,
    pub fixed_answer: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Wrap a board; `fixed_answer` is reused for every new game if set
    #[must_use]
    pub fn new(board: GameBoard<Dictionary>, fixed_answer: Option<String>) -> Self {
        let mut app = Self {
            board,
            fixed_answer,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Guess the five-letter word in six tries.",
            MessageStyle::Info,
        );
        app.report_warnings();
        app
    }

    /// Apply one key press. Logging is off while this runs: the TUI owns
    /// the terminal and stderr output would land on the alternate screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        crate::logging::silenced(|| self.dispatch_key(key));
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.board.status().is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game over: the board takes no more input
                }
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.board.type_char(c);
            }
            KeyCode::Backspace => {
                self.board.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.board.submit() {
            SubmitOutcome::Accepted { status, .. } => match status {
                GameStatus::Won => {
                    let guess_count = self.board.guesses().len();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    self.stats.guess_distribution[guess_count] += 1;

                    let celebration = match guess_count {
                        1 => "🎯 HOLE IN ONE!",
                        2 => "🔥 MAGNIFICENT! Two guesses!",
                        3 => "✨ SPLENDID! Three guesses!",
                        4 => "👏 GREAT JOB! Four guesses!",
                        5 => "🎉 NICE WORK! Five guesses!",
                        _ => "😅 PHEW! Got it in six!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    self.stats.total_games += 1;
                    let reveal = format!("The word was {}", self.board.answer());
                    self.add_message(&reveal, MessageStyle::Error);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::InProgress => {
                    let remaining = self.board.remaining_guesses();
                    self.add_message(
                        &format!("{remaining} guesses remaining"),
                        MessageStyle::Info,
                    );
                }
            },
            SubmitOutcome::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    pub fn new_game(&mut self) {
        let answer = match &self.fixed_answer {
            Some(answer) => Some(answer.clone()),
            None => self
                .board
                .validator()
                .random_answer(&mut rand::rng())
                .map(|word| word.text().to_string()),
        };

        let Some(answer) = answer else {
            self.add_message("No words available for a new game!", MessageStyle::Error);
            return;
        };

        self.board.reset(&answer);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.report_warnings();
    }

    fn report_warnings(&mut self) {
        let warnings: Vec<String> = self
            .board
            .warnings()
            .iter()
            .map(|w| format!("Warning: {w}"))
            .collect();
        for warning in warnings {
            self.add_message(&warning, MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = res?;
    tracing::info!(
        games = stats.total_games,
        won = stats.games_won,
        "session finished"
    );
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
