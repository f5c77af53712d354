//! Property-based invariant tests for the game engine.
//!
//! Generates seeds and arbitrary (often illegal) move sequences, and checks
//! the engine's invariants after every call.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{GameEngine, MoveOutcome, Player, Rejection};

fn off_board() -> impl Strategy<Value = (i64, i64)> {
    prop_oneof![
        (any::<i64>(), 3i64..),
        (3i64.., any::<i64>()),
        (i64::MIN..0, any::<i64>()),
        (any::<i64>(), i64::MIN..0),
    ]
}

proptest! {
    #[test]
    fn out_of_range_moves_change_nothing(
        seed in any::<u64>(),
        prefix in prop::collection::vec((0i64..3, 0i64..3), 0..4),
        (row, col) in off_board(),
    ) {
        let mut engine = GameEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        for (r, c) in prefix {
            engine.apply_move(r, c);
        }
        let before = serde_json::to_vec(&engine.current_state()).expect("serialize");

        let outcome = engine.apply_move(row, col);

        let after = serde_json::to_vec(&engine.current_state()).expect("serialize");
        prop_assert_eq!(outcome, MoveOutcome::Ignored(Rejection::OutOfBounds));
        prop_assert_eq!(before, after);
    }

    #[test]
    fn occupancy_never_decreases_and_turn_is_x_while_running(
        seed in any::<u64>(),
        moves in prop::collection::vec((-1i64..4, -1i64..4), 0..30),
    ) {
        let mut engine = GameEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        let id = engine.current_state().game_id;
        let mut occupied = 0;

        for (row, col) in moves {
            let before = engine.current_state();
            let outcome = engine.apply_move(row, col);
            let after = engine.current_state();

            prop_assert!(after.board.occupied_count() >= occupied);
            occupied = after.board.occupied_count();
            prop_assert_eq!(after.game_id, id);

            match outcome {
                MoveOutcome::Ignored(_) => {
                    prop_assert_eq!(&before, &after);
                }
                MoveOutcome::Applied { .. } => {
                    prop_assert!(!before.game_over);
                }
            }
            if !after.game_over {
                prop_assert_eq!(after.player_turn, Player::X);
                prop_assert_eq!(after.status.as_str(), "");
            }
        }
    }
}
