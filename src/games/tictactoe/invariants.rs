//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use super::rules;
use super::types::{GameState, GameStatus, Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: players alternate turns, X first.
///
/// Move history must show X, O, X, O, ... and, while the game is in
/// progress, the current player must be the next in that sequence.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player() != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player() == window[1].player() {
                return false;
            }
        }

        if state.status() != &GameStatus::InProgress {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: the board grows monotonically from the history.
///
/// Every square written once, every history entry still on the board,
/// nothing on the board that history does not account for.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let occupied = state
            .board()
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        if occupied != history.len() {
            return false;
        }

        for (i, mov) in history.iter().enumerate() {
            if state.board().get(mov.position()) != Square::Occupied(mov.player()) {
                return false;
            }
            if history[..i].iter().any(|m| m.position() == mov.position()) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each square is written at most once and matches the move history"
    }
}

/// Invariant: the status agrees with the rules evaluation of the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Won(player) => rules::check_winner(state.board()) == Some(*player),
            GameStatus::Draw => rules::is_draw(state.board()),
            GameStatus::InProgress => {
                rules::check_winner(state.board()).is_none() && !rules::is_full(state.board())
            }
        }
    }

    fn description() -> &'static str {
        "Game status matches the board (won, draw, or in progress)"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
    StatusConsistentInvariant,
);

/// Asserts that all game invariants hold (debug builds only).
pub(crate) fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        warn!(?violations, "game invariants violated");
        debug_assert!(false, "game invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::super::action::Move;
    use super::super::engine::apply_move;
    use super::super::position::Position;
    use super::*;

    fn played(moves: &[(Player, Position)]) -> GameState {
        let mut state = GameState::new();
        for &(player, position) in moves {
            state = apply_move(&state, Move::new(player, position)).unwrap();
        }
        state
    }

    #[test]
    fn fresh_game_satisfies_all_invariants() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn invariants_hold_after_legal_moves() {
        let state = played(&[
            (Player::X, Position::Center),
            (Player::O, Position::TopLeft),
            (Player::X, Position::BottomRight),
        ]);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn corrupted_board_is_detected() {
        let mut state = played(&[(Player::X, Position::Center)]);
        // Write a square behind the engine's back
        state.place(Move::new(Player::X, Position::Center));

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn status_mismatch_is_detected() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Won(Player::X));

        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn two_invariants_compose_as_a_set() {
        type TwoInvariants = (AlternatingTurnInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
