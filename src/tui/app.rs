//! Application state and key handling for the terminal frontend.

use crate::games::tictactoe::{GameStatus, MoveError, Player, Position, pick_move};
use crate::session::{BotTicket, GameMode, GameSession};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Which screen the frontend is showing.
#[derive(Debug)]
pub enum Screen {
    /// Mode selection.
    Welcome {
        /// Highlighted mode entry.
        cursor: usize,
    },
    /// An active game.
    Game {
        /// The running session.
        session: GameSession,
        /// Highlighted board square.
        cursor: Position,
    },
}

/// Messages delivered to the event loop from scheduled work.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A delayed bot reply, carrying the ticket it was scheduled under.
    BotReply {
        /// Expectations captured at scheduling time.
        ticket: BotTicket,
        /// The square the bot chose.
        position: Position,
    },
}

/// What the event loop should do after a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// Leave the application.
    Quit,
    /// Deliver `AppEvent::BotReply` after the bot's thinking delay.
    ScheduleBot {
        /// Ticket the reply must re-validate against.
        ticket: BotTicket,
        /// The square the bot chose.
        position: Position,
    },
}

/// The two entries on the welcome screen, in display order.
pub const MODES: [GameMode; 2] = [GameMode::Single, GameMode::Duel];

/// Main application state.
pub struct App {
    screen: Screen,
    status: String,
    rng: ChaCha8Rng,
}

impl App {
    /// Creates the application, optionally skipping the welcome screen
    /// and optionally seeding the bot's randomness.
    pub fn new(mode: Option<GameMode>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut app = Self {
            screen: Screen::Welcome { cursor: 0 },
            status: String::new(),
            rng,
        };
        if let Some(mode) = mode {
            app.start_game(mode);
        }
        app
    }

    /// Returns the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    fn start_game(&mut self, mode: GameMode) {
        info!(mode = mode.name(), "starting game");
        self.screen = Screen::Game {
            session: GameSession::new(mode),
            cursor: Position::Center,
        };
        self.status = "Player X to move".to_string();
    }

    /// Handles a keypress, returning what the event loop should do next.
    #[instrument(skip(self))]
    pub fn on_key(&mut self, key: KeyCode) -> Action {
        match &mut self.screen {
            Screen::Welcome { cursor } => match key {
                KeyCode::Up => {
                    *cursor = cursor.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down => {
                    *cursor = (*cursor + 1).min(MODES.len() - 1);
                    Action::None
                }
                KeyCode::Enter => {
                    let mode = MODES[*cursor];
                    self.start_game(mode);
                    Action::None
                }
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Screen::Game { cursor, .. } => match key {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('b') | KeyCode::Esc => {
                    self.screen = Screen::Welcome { cursor: 0 };
                    self.status = String::new();
                    Action::None
                }
                KeyCode::Char('r') => {
                    self.restart();
                    Action::None
                }
                KeyCode::Left => {
                    *cursor = step(*cursor, -1, 0);
                    Action::None
                }
                KeyCode::Right => {
                    *cursor = step(*cursor, 1, 0);
                    Action::None
                }
                KeyCode::Up => {
                    *cursor = step(*cursor, 0, -1);
                    Action::None
                }
                KeyCode::Down => {
                    *cursor = step(*cursor, 0, 1);
                    Action::None
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let index = cursor.to_index();
                    self.play(index)
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    match c.to_digit(10) {
                        Some(digit) if (1..=9).contains(&digit) => self.play(digit as usize - 1),
                        _ => Action::None,
                    }
                }
                _ => Action::None,
            },
        }
    }

    /// Applies a human move and, in single-player mode, schedules the
    /// bot's reply.
    fn play(&mut self, index: usize) -> Action {
        let Screen::Game { session, .. } = &mut self.screen else {
            return Action::None;
        };

        let mark = session.game().state().current_player();
        match session.human_move(mark, index) {
            Ok(()) => {}
            Err(err @ (MoveError::SquareOccupied(_) | MoveError::GameOver)) => {
                // Stray input, keep the state and tell the player
                debug!(%err, "move ignored");
                self.status = err.to_string();
                return Action::None;
            }
            Err(err) => {
                self.status = err.to_string();
                return Action::None;
            }
        }

        self.refresh_status();

        let Screen::Game { session, .. } = &mut self.screen else {
            return Action::None;
        };
        if let Some(ticket) = session.bot_ticket() {
            let board = session.game().state().board();
            if let Some(position) = pick_move(board, ticket.mark(), &mut self.rng) {
                self.status = "Bot is thinking...".to_string();
                return Action::ScheduleBot { ticket, position };
            }
        }
        Action::None
    }

    /// Applies a delayed bot reply; stale replies are dropped.
    #[instrument(skip(self))]
    pub fn bot_reply(&mut self, ticket: BotTicket, position: Position) {
        let Screen::Game { session, .. } = &mut self.screen else {
            return;
        };
        match session.apply_bot_reply(ticket, position) {
            Ok(true) => self.refresh_status(),
            Ok(false) => debug!("stale bot reply dropped"),
            Err(err) => self.status = err.to_string(),
        }
    }

    fn restart(&mut self) {
        if let Screen::Game { session, cursor } = &mut self.screen {
            session.restart();
            *cursor = Position::Center;
            self.status = "Player X to move".to_string();
        }
    }

    fn refresh_status(&mut self) {
        let Screen::Game { session, .. } = &self.screen else {
            return;
        };
        let state = session.game().state();
        self.status = match state.status() {
            GameStatus::InProgress => format!("Player {} to move", state.current_player()),
            GameStatus::Won(winner) => match session.mode() {
                GameMode::Single if *winner == Player::X => {
                    "You won! Press 'r' to play again".to_string()
                }
                GameMode::Single => "Bot won! Press 'r' to play again".to_string(),
                GameMode::Duel => format!("{winner} won! Press 'r' to play again"),
            },
            GameStatus::Draw => "It's a draw! Press 'r' to play again".to_string(),
        };
    }
}

/// Moves the board cursor by one square, clamped to the grid.
fn step(pos: Position, dx: i32, dy: i32) -> Position {
    let index = pos.to_index() as i32;
    let col = (index % 3 + dx).clamp(0, 2);
    let row = (index / 3 + dy).clamp(0, 2);
    Position::from_index((row * 3 + col) as usize).unwrap_or(pos)
}
