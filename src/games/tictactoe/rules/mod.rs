//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state according to the rules.
//! Rules are separated from board storage so the engine, the bot, and
//! the invariant checks can all share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
