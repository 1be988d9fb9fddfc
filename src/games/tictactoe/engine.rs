//! Move application and the turn state machine.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{GameState, GameStatus, Player};
use tracing::instrument;

/// Applies a move to a game state, returning the successor state.
///
/// Preconditions, checked in order:
/// 1. the game must still be in progress,
/// 2. the mover must be the current player,
/// 3. the target square must be empty.
///
/// On success the mark is placed, the status is re-evaluated, and the
/// turn passes to the other player only if the game is still in
/// progress. The input state is never modified; the caller owns storage.
///
/// # Errors
///
/// [`MoveError::GameOver`], [`MoveError::WrongPlayer`], or
/// [`MoveError::SquareOccupied`] when a precondition fails.
#[instrument(skip(state, mov), fields(position = ?mov.position(), player = ?mov.player()))]
pub fn apply_move(state: &GameState, mov: Move) -> Result<GameState, MoveError> {
    if state.status().is_terminal() {
        return Err(MoveError::GameOver);
    }
    if mov.player() != state.current_player() {
        return Err(MoveError::WrongPlayer(mov.player()));
    }
    if !state.board().is_empty(mov.position()) {
        return Err(MoveError::SquareOccupied(mov.position()));
    }

    let mut next = state.clone();
    next.place(mov);

    if let Some(winner) = rules::check_winner(next.board()) {
        next.set_status(GameStatus::Won(winner));
    } else if rules::is_full(next.board()) {
        next.set_status(GameStatus::Draw);
    } else {
        next.pass_turn();
    }

    assert_invariants(&next);
    Ok(next)
}

/// Tic-tac-toe game engine owning one [`GameState`].
///
/// A convenience facade over [`apply_move`] for callers that hold the
/// state for the lifetime of a game and address squares by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Makes a move for `player` at board index 0-8.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] for an index outside 0-8, plus the
    /// [`apply_move`] precondition errors. The state is unchanged on any
    /// error.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, player: Player, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidPosition(index))?;
        self.state = apply_move(&self.state, Move::new(player, position))?;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
