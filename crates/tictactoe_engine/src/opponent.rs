//! Computer opponent: a uniformly random empty square.

use crate::types::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty square, or `None` on a full board.
///
/// The random source is passed in so tests can seed it.
#[instrument(skip(board, rng))]
pub fn choose_reply<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = board.empty_positions().choose(rng).copied();
    debug!(?choice, "Computer chose square");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_reply() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_reply(&board, &mut rng), None);
    }

    #[test]
    fn test_only_empty_square_is_chosen() {
        let mut board = Board::new();
        for pos in &Position::ALL[..8] {
            board.set(*pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_reply(&board, &mut rng), Some(Position::ALL[8]));
    }

    #[test]
    fn test_replies_cover_every_empty_square() {
        let mut board = Board::new();
        board.set(Position::ALL[4], Square::Occupied(Player::X));
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<_> = (0..500)
            .filter_map(|_| choose_reply(&board, &mut rng))
            .collect();

        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&Position::ALL[4]));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let a = choose_reply(&board, &mut StdRng::seed_from_u64(5));
        let b = choose_reply(&board, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
