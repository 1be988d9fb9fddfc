//! Tic-tac-toe engine: board state, rules, move application, bot.
//!
//! The engine is UI-independent. Frontends hold a [`GameState`] (or the
//! [`Game`] facade), feed it moves, and render what comes back.

mod action;
mod bot;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use bot::pick_move;
pub use engine::{Game, apply_move};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant,
};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, GameState, GameStatus, Player, Square};
