use super::{mv, sq};
use crate::board::{Color, Move, MoveParseError, Piece, Position};

fn after(fen: &str, m: &str) -> String {
    let pos = Position::from_fen(fen);
    let m = mv(m);
    assert!(pos.is_legal(&m), "{m} should be legal in {fen}");
    pos.apply(&m).to_fen()
}

#[test]
fn test_opening_moves_update_metadata() {
    let p1 = Position::new().apply(&mv("e2e4"));
    assert_eq!(
        p1.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    let p2 = p1.apply(&mv("e7e5"));
    assert_eq!(
        p2.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
    let p3 = p2.apply(&mv("g1f3"));
    assert_eq!(
        p3.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_apply_leaves_input_untouched() {
    let start = Position::new();
    let _ = start.apply(&mv("d2d4"));
    assert_eq!(start, Position::new());
}

#[test]
fn test_castling_moves_the_rook() {
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"),
        "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1"
    );
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1c1"),
        "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1"
    );
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8"),
        "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2"
    );
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8g8"),
        "r4rk1/8/8/8/8/8/8/R3K2R w KQ - 1 2"
    );
}

#[test]
fn test_rook_and_king_moves_clear_rights() {
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "h1h2"),
        "r3k2r/8/8/8/8/8/7R/R3K3 b Qkq - 1 1"
    );
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1e2"),
        "r3k2r/8/8/8/8/8/4K3/R6R b kq - 1 1"
    );
}

#[test]
fn test_capture_on_corner_clears_both_rights() {
    assert_eq!(
        after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1a8"),
        "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1"
    );
}

#[test]
fn test_rights_keyed_on_square_not_piece() {
    // A queen leaving h1 still clears the white kingside right
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2Q w K - 0 1");
    let next = pos.apply(&mv("h1h5"));
    assert!(!next.castling_rights().has(Color::White, true));
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    assert_eq!(
        after(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            "e5d6"
        ),
        "rnbqkbnr/ppp1pppp/3P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
    );
}

#[test]
fn test_en_passant_target_only_after_double_step() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    assert_eq!(pos.apply(&mv("e2e4")).en_passant_target(), Some(sq("e3")));
    assert_eq!(pos.apply(&mv("e2e3")).en_passant_target(), None);
    let black = Position::from_fen("4k3/3p4/8/8/8/8/8/4K3 b - e3 0 1");
    assert_eq!(black.apply(&mv("d7d5")).en_passant_target(), Some(sq("d6")));
    assert_eq!(black.apply(&mv("e8f8")).en_passant_target(), None);
}

#[test]
fn test_promotion_defaults_to_queen() {
    assert_eq!(
        after("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7a8"),
        "Q7/8/8/8/8/8/8/K1k5 b - - 0 1"
    );
    assert_eq!(
        after("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7a8n"),
        "N7/8/8/8/8/8/8/K1k5 b - - 0 1"
    );
    assert_eq!(
        after("4k3/8/8/8/8/8/p7/4K3 b - - 5 40", "a2a1r"),
        "4k3/8/8/8/8/8/8/r3K3 w - - 0 41"
    );
}

#[test]
fn test_halfmove_clock() {
    let quiet = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 7 20");
    assert_eq!(quiet.apply(&mv("a1a5")).halfmove_clock(), 8);
    let capture = Position::from_fen("4k3/8/8/r7/8/8/8/R3K3 w - - 7 20");
    assert_eq!(capture.apply(&mv("a1a5")).halfmove_clock(), 0);
    let pawn = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 7 20");
    assert_eq!(pawn.apply(&mv("e2e3")).halfmove_clock(), 0);
}

#[test]
fn test_saturated_counters_return_input() {
    let halfmove = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 4294967295 1");
    assert_eq!(halfmove.apply(&mv("a1a2")), halfmove);
    // A capture resets the clock, so no overflow
    let capture = Position::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 4294967295 1");
    assert_eq!(capture.apply(&mv("a1a2")).halfmove_clock(), 0);

    let fullmove = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 4294967295");
    assert_eq!(fullmove.apply(&mv("e8e7")), fullmove);
    let white = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 4294967295");
    assert_eq!(white.apply(&mv("a1a2")).fullmove_number(), u32::MAX);
}

#[test]
fn test_inconsistent_moves_return_input() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    assert_eq!(pos.apply(&mv("c4c5")), pos);
    assert_eq!(pos.apply(&mv("a7a8k")), pos);
    assert_eq!(
        pos.apply(&Move::with_promotion(sq("a7"), sq("a8"), Piece::Pawn)),
        pos
    );
}

#[test]
fn test_play_reports_illegal_moves() {
    let start = Position::new();
    assert_eq!(
        start.play_uci("e2e5"),
        Err(MoveParseError::IllegalMove {
            notation: "e2e5".to_string()
        })
    );
    assert!(matches!(
        start.play_uci("e2"),
        Err(MoveParseError::InvalidLength { len: 2 })
    ));
    let next = start.play_uci("e2e4").unwrap();
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(next.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
}
