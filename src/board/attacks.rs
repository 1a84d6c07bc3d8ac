//! Attack and pin detection.
//!
//! Everything here is a brute-force scan of the 64 squares, so results come
//! back in rank-major, file-minor order and are deterministic.

use super::geometry::{attack_reach, is_diagonal, is_straight, path_clear};
use super::{Board, Color, Piece, Square};

/// Squares holding a `by` piece that attacks `target`, in scan order.
///
/// The target square itself is skipped. Every attacker is listed once; no
/// attempt is made to merge batteries or x-rays.
#[must_use]
pub fn attackers_of(board: &Board, target: Square, by: Color) -> Vec<Square> {
    board
        .pieces_of(by)
        .filter(|&(sq, piece)| sq != target && attack_reach(board, by, piece, sq, target))
        .map(|(sq, _)| sq)
        .collect()
}

/// Check if a square is attacked by any piece of the given color
#[must_use]
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(sq, piece)| sq != square && attack_reach(board, by, piece, sq, square))
}

/// Pieces of `color.opponent()` giving check to `color`'s king.
///
/// Empty when `color` has no king on the board.
#[must_use]
pub fn king_attackers(board: &Board, color: Color) -> Vec<Square> {
    match board.find_king(color) {
        Some(king) => attackers_of(board, king, color.opponent()),
        None => Vec::new(),
    }
}

/// Check if the `color` king is currently attacked
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

/// Whether the `color` piece on `square` is pinned to its own king.
///
/// The piece must share a rank, file or diagonal with the king with nothing
/// in between. Walking outward from the piece, away from the king, the first
/// occupied square must hold an enemy rook or queen (rank and file) or an
/// enemy bishop or queen (diagonal). Kings are never pinned.
///
/// This is narrower than a plain alignment test: a piece screened from its
/// king by another piece is not reported, even with an enemy slider behind it.
#[must_use]
pub fn is_pinned(board: &Board, square: Square, color: Color) -> bool {
    match board.piece_at(square) {
        Some((c, piece)) if c == color && piece != Piece::King => {}
        _ => return false,
    }
    let Some(king) = board.find_king(color) else {
        return false;
    };

    let straight = is_straight(king, square);
    if !straight && !is_diagonal(king, square) {
        return false;
    }
    if !path_clear(board, king, square) {
        return false;
    }

    let step_r = (square.row() as isize - king.row() as isize).signum();
    let step_c = (square.col() as isize - king.col() as isize).signum();

    let mut current = square.offset(step_r, step_c);
    while let Some(sq) = current {
        if let Some((c, piece)) = board.piece_at(sq) {
            if c == color {
                return false;
            }
            return if straight {
                piece.attacks_straight()
            } else {
                piece.attacks_diagonally()
            };
        }
        current = sq.offset(step_r, step_c);
    }
    false
}

/// Every pinned `color` piece, in scan order
#[must_use]
pub fn pinned_pieces(board: &Board, color: Color) -> Vec<Square> {
    if board.find_king(color).is_none() {
        return Vec::new();
    }
    board
        .pieces_of(color)
        .map(|(sq, _)| sq)
        .filter(|&sq| is_pinned(board, sq, color))
        .collect()
}
