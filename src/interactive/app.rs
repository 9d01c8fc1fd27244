//! TUI application state and logic

use crate::core::{Difficulty, Digit};
use crate::game::{Outcome, Session, SessionError};
use crate::output::formatters::{feedback_message, win_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long error messages stay on screen
pub const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

/// How often the event loop wakes up to expire messages
const TICK: Duration = Duration::from_millis(200);

/// Messages kept on screen at once
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.announce_round();
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('e') => self.set_difficulty(Difficulty::Easy),
            KeyCode::Char('h') => self.set_difficulty(Difficulty::Hard),
            KeyCode::Char(c) => {
                if let Some(digit) = Digit::from_char(c) {
                    self.enter_digit(digit);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => self.session.backspace(),
            KeyCode::Left => self.session.move_left(),
            KeyCode::Right => self.session.move_right(),
            KeyCode::Home => self.session.focus(0),
            KeyCode::End => {
                let last = self.session.input().len().saturating_sub(1);
                self.session.focus(last);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn enter_digit(&mut self, digit: Digit) {
        if let Err(e) = self.session.enter_digit(digit) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(Outcome::Won { attempts }) => {
                self.messages.clear();
                let text = win_message(self.session.round().secret(), attempts);
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(Outcome::Miss(score)) => {
                let round = self.session.round().attempt_count();
                self.add_message(&feedback_message(score, round), MessageStyle::Info);
            }
            // Nothing to submit yet
            Err(SessionError::IncompleteGuess) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_round();
        self.messages.clear();
        self.announce_round();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
        self.messages.clear();
        self.announce_round();
    }

    /// Add a message; errors expire after [`ERROR_TIMEOUT`]
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        let expires_at = (style == MessageStyle::Error).then(|| Instant::now() + ERROR_TIMEOUT);
        self.messages.push(Message {
            text: text.to_string(),
            style,
            expires_at,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Drop expired messages; nothing expires once the round is won
    pub fn expire_messages(&mut self, now: Instant) {
        if self.session.is_won() {
            return;
        }
        self.messages
            .retain(|msg| msg.expires_at.is_none_or(|deadline| now < deadline));
    }

    fn announce_round(&mut self) {
        let difficulty = self.session.difficulty();
        let text = if difficulty.allows_duplicates() {
            format!(
                "New {difficulty} game: guess {} digits (repeats allowed)",
                difficulty.code_length()
            )
        } else {
            format!(
                "New {difficulty} game: guess {} different digits",
                difficulty.code_length()
            )
        };
        self.add_message(&text, MessageStyle::Info);
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.expire_messages(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
