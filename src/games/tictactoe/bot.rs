//! Heuristic move selection for the bot opponent.

use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Selects the bot's next move.
///
/// Priority tiers, first match wins:
/// 1. complete an own line,
/// 2. block a line the opponent would complete,
/// 3. take the center,
/// 4. take a random empty corner,
/// 5. take a random empty square.
///
/// Ties in the first two tiers resolve to the lowest index; randomness is
/// consumed only by the last two tiers, so a seeded `rng` makes whole
/// games reproducible. The heuristic is greedy and can be outplayed (it
/// does not look for forks); callers must not expect optimal play.
///
/// Returns `None` when the board has no empty square, which is a caller
/// error: the bot is never to move on a finished board.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng + ?Sized>(board: &Board, mark: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = winning_move(board, mark) {
        debug!(position = ?pos, "bot completes own line");
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, mark.opponent()) {
        debug!(position = ?pos, "bot blocks opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        debug!(position = ?pos, "bot takes corner");
        return Some(pos);
    }

    let open = Position::valid_moves(board);
    open.choose(rng).copied()
}

/// Lowest-index empty square that completes a line for `mark`, if any.
fn winning_move(board: &Board, mark: Player) -> Option<Position> {
    Position::ALL.iter().copied().find(|&pos| {
        if !board.is_empty(pos) {
            return false;
        }
        let mut probe = board.clone();
        probe.set(pos, Square::Occupied(mark));
        rules::check_winner(&probe) == Some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            if let Some(player) = mark {
                board.set(pos, Square::Occupied(player));
            }
        }
        board
    }

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn takes_winning_square_over_blocking() {
        // O completes the middle row at 5 even though X threatens at 2
        let board = board_from([X, X, E, O, O, E, E, E, E]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            pick_move(&board, Player::O, &mut rng),
            Some(Position::MiddleRight)
        );
    }

    #[test]
    fn blocks_opponent_when_no_win_available() {
        let board = board_from([X, X, E, E, O, E, E, E, E]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            pick_move(&board, Player::O, &mut rng),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn prefers_center_when_no_threats() {
        let board = board_from([X, E, E, E, E, E, E, E, E]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(pick_move(&board, Player::O, &mut rng), Some(Position::Center));
    }

    #[test]
    fn picks_among_empty_corners_when_center_taken() {
        let board = board_from([E, E, E, E, X, E, E, E, E]);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pos = pick_move(&board, Player::O, &mut rng).unwrap();
            assert!(Position::CORNERS.contains(&pos));
            seen.insert(pos);
        }
        // Uniform choice should hit more than one corner across seeds
        assert!(seen.len() > 1);
    }

    #[test]
    fn falls_back_to_random_empty_square() {
        // Corners and center occupied, no winning or blocking square;
        // only 3 and 5 remain
        let board = board_from([X, O, X, E, X, E, O, X, O]);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pos = pick_move(&board, Player::O, &mut rng).unwrap();
            assert!(matches!(pos, Position::MiddleLeft | Position::MiddleRight));
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn returns_the_single_remaining_square() {
        let board = board_from([X, O, X, X, O, O, O, X, E]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            pick_move(&board, Player::X, &mut rng),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn full_board_yields_no_move() {
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(pick_move(&board, Player::O, &mut rng), None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let board = board_from([E, E, E, E, X, E, E, E, E]);
        let a = pick_move(&board, Player::O, &mut ChaCha8Rng::seed_from_u64(7));
        let b = pick_move(&board, Player::O, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
