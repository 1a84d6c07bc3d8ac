use rand::rngs::StdRng;
use rand::SeedableRng;

use super::sq;
use crate::board::{BoardAnalysis, Color, GameStatus, Position};

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
const FOOLS_MATE_NO_RIGHTS: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 1 3";
const STALEMATE: &str = "k7/8/KQ6/8/8/8/8/8 b - - 0 1";

#[test]
fn test_start_position_is_ongoing() {
    let pos = Position::new();
    assert_eq!(pos.status(), GameStatus::Ongoing);
    assert_eq!(pos.legal_moves().len(), 20);
    assert!(pos.has_legal_move());
}

#[test]
fn test_fools_mate() {
    let status = Position::from_fen(FOOLS_MATE).status();
    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(status.reason(), Some("checkmate"));
    assert_eq!(status.winner(), Some(Color::Black));
    assert!(status.is_terminal());
    assert!(status.in_check());
}

#[test]
fn test_fools_mate_without_castling_rights() {
    let pos = Position::from_fen(FOOLS_MATE_NO_RIGHTS);
    assert_eq!(pos.status().winner(), Some(Color::Black));
    assert!(pos.legal_moves().is_empty());
    assert_eq!(pos.to_fen(), FOOLS_MATE_NO_RIGHTS);
}

#[test]
fn test_stalemate() {
    let pos = Position::from_fen(STALEMATE);
    let status = pos.status();
    assert_eq!(status, GameStatus::Stalemate);
    assert_eq!(status.reason(), Some("stalemate"));
    assert_eq!(status.winner(), None);
    assert!(!status.in_check());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_single_and_double_check() {
    let check = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert_eq!(check.status(), GameStatus::Check);
    assert!(!check.status().is_terminal());

    let double = Position::from_fen("4k3/8/8/1B6/8/8/8/4R1K1 b - - 0 1");
    assert_eq!(double.status(), GameStatus::DoubleCheck);
}

#[test]
fn test_double_check_only_king_moves() {
    let pos = Position::from_fen("4k3/8/8/rB6/8/8/8/4R1K1 b - - 0 1");
    // a5 rook can take the bishop or block the e-file, never both
    assert_eq!(pos.status(), GameStatus::DoubleCheck);
    assert!(pos
        .legal_moves()
        .iter()
        .all(|m| m.from() == sq("e8")));
}

#[test]
fn test_smothered_mate() {
    let pos = Position::from_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(
        pos.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_back_rank_mate_by_black() {
    let pos = Position::from_fen("6k1/8/8/8/8/8/5PPP/3r2K1 w - - 0 1");
    assert_eq!(pos.status().winner(), Some(Color::Black));
}

#[test]
fn test_missing_kings_are_tolerated() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R7 w - - 0 1");
    assert_eq!(pos.status(), GameStatus::Ongoing);
    assert_eq!(pos.analyze(), BoardAnalysis::default());
    let bare = Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1");
    assert_eq!(bare.status(), GameStatus::Stalemate);
}

#[test]
fn test_analyze_double_check() {
    let analysis = Position::from_fen("4k3/8/8/1B6/8/8/8/4R1K1 b - - 0 1").analyze();
    assert_eq!(analysis.attacking_pieces, vec![sq("b5"), sq("e1")]);
    assert_eq!(analysis.king_in_check, Some(sq("e8")));
    assert!(analysis.is_double_check);
    assert!(analysis.pinned_pieces.is_empty());
}

#[test]
fn test_analyze_pins_without_check() {
    let analysis = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").analyze();
    assert!(analysis.attacking_pieces.is_empty());
    assert_eq!(analysis.king_in_check, None);
    assert!(!analysis.is_double_check);
    assert_eq!(analysis.pinned_pieces, vec![sq("e2")]);
}

#[test]
fn test_legal_moves_probe_queen_promotion() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promos: Vec<String> = pos
        .legal_moves()
        .iter()
        .filter(|m| m.from() == sq("a7"))
        .map(ToString::to_string)
        .collect();
    assert_eq!(promos, vec!["a7a8q".to_string()]);
}

#[test]
fn test_random_move_is_legal_and_reproducible() {
    let pos = Position::new();
    let a = pos.random_move(&mut StdRng::seed_from_u64(7)).unwrap();
    let b = pos.random_move(&mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(pos.is_legal(&a));
    let stalemate = Position::from_fen(STALEMATE);
    assert_eq!(stalemate.random_move(&mut StdRng::seed_from_u64(7)), None);
}

#[test]
fn test_status_display() {
    assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
    assert_eq!(
        GameStatus::Checkmate {
            winner: Color::White
        }
        .to_string(),
        "checkmate, white wins"
    );
}
