//! Property-based tests using proptest.

use crate::board::attacks::is_in_check;
use crate::board::{Color, Position};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position
fn random_game(seed: u64, num_moves: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = vec![Position::new()];
    for _ in 0..num_moves {
        let Some(pos) = positions.last() else { break };
        let Some(mv) = pos.random_move(&mut rng) else { break };
        let next = pos.apply(&mv);
        positions.push(next);
    }
    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: decoding the encoded position gives the same position back
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in random_game(seed, num_moves) {
            let fen = pos.to_fen();
            let decoded = Position::try_from_fen(&fen).unwrap();
            prop_assert_eq!(&decoded, &pos);
            prop_assert_eq!(decoded.to_fen(), fen);
        }
    }

    /// Property: a validated move never leaves the mover's king attacked
    #[test]
    fn prop_no_self_check(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        for pair in game.windows(2) {
            let mover = pair[0].side_to_move();
            prop_assert!(!is_in_check(pair[1].board(), mover));
            prop_assert_eq!(pair[1].side_to_move(), mover.opponent());
        }
    }

    /// Property: every enumerated move passes the validator
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        if let Some(pos) = game.last() {
            let moves = pos.legal_moves();
            prop_assert_eq!(pos.has_legal_move(), !moves.is_empty());
            for mv in &moves {
                prop_assert!(pos.is_legal(mv), "{} rejected in {}", mv, pos);
            }
        }
    }

    /// Property: move counters follow the side to move
    #[test]
    fn prop_fullmove_counts_black_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pair in random_game(seed, num_moves).windows(2) {
            let expected = pair[0].fullmove_number()
                + u32::from(pair[0].side_to_move() == Color::Black);
            prop_assert_eq!(pair[1].fullmove_number(), expected);
        }
    }

    /// Property: terminal statuses agree with the move list
    #[test]
    fn prop_terminal_iff_no_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        if let Some(pos) = random_game(seed, num_moves).last() {
            prop_assert_eq!(pos.status().is_terminal(), pos.legal_moves().is_empty());
        }
    }
}
