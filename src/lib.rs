//! Tic-tac-toe with a heuristic bot and a local duel mode.
//!
//! # Architecture
//!
//! - **Engine** ([`games::tictactoe`]): board state, the move state
//!   machine, win/draw rules, and bot move selection. UI-independent.
//! - **Session** ([`GameSession`]): game lifecycle per mode, reset, and
//!   the guard that keeps a delayed bot reply from landing on a game it
//!   was not computed against.
//! - **Frontend** ([`tui`]): welcome screen for mode selection plus the
//!   game screen, rendered with ratatui.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.make_move(Player::X, 4)?;
//! game.make_move(Player::O, 0)?;
//! assert_eq!(game.state().status(), &GameStatus::InProgress);
//! # Ok::<(), tictactoe_duel::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod games;
mod session;
pub mod tui;

// Crate-level exports - engine types
pub use games::tictactoe::{
    Board, Game, GameState, GameStatus, Move, MoveError, Player, Position, Square, apply_move,
    check_winner, is_draw, is_full, pick_move,
};

// Crate-level exports - session management
pub use session::{BotTicket, GameMode, GameSession};
