//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::Player;
    use super::*;

    #[test]
    fn empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn full_board_without_winner_is_draw() {
        // X O X / X O O / O X X
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_winner_is_not_draw() {
        // O O O / X X O / X O X
        let marks = [
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
