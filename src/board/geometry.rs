//! Per-piece movement geometry.
//!
//! Pure predicates over a [`Board`]: nothing here knows whose turn it is,
//! whether a king is in check, or about castling and en passant.

use super::{Board, Color, Piece, Square};

#[inline]
fn deltas(from: Square, to: Square) -> (isize, isize) {
    (
        to.row() as isize - from.row() as isize,
        to.col() as isize - from.col() as isize,
    )
}

/// True if `from` and `to` share a rank or a file
#[inline]
#[must_use]
pub fn is_straight(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}

/// True if `from` and `to` share a diagonal
#[inline]
#[must_use]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr != 0 && dr.abs() == dc.abs()
}

/// Whether every square strictly between `from` and `to` is empty.
///
/// Walks unit steps along the rank, file or diagonal joining the two squares.
/// Squares that are not aligned have no such line; the answer is `false`.
#[must_use]
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    if !is_straight(from, to) && !is_diagonal(from, to) {
        return false;
    }
    let (dr, dc) = deltas(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut current = from.offset(step_r, step_c);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_r, step_c);
    }
    false
}

/// Whether a `color` `piece` on `from` can move to `to` by its movement rules.
///
/// Ignores turn order, check, castling and en passant. Sliders need a clear
/// path. Pawns advance one square onto an empty square, two from their start
/// row when both squares ahead are empty, or step diagonally forward onto an
/// enemy piece. Occupancy of `to` by a friendly piece is not checked here
/// except for pawn captures.
#[must_use]
pub fn piece_reach(board: &Board, color: Color, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece {
        Piece::Pawn => pawn_reach(board, color, from, to),
        Piece::Knight => knight_reach(from, to),
        Piece::Bishop => is_diagonal(from, to) && path_clear(board, from, to),
        Piece::Rook => is_straight(from, to) && path_clear(board, from, to),
        Piece::Queen => {
            (is_straight(from, to) || is_diagonal(from, to)) && path_clear(board, from, to)
        }
        Piece::King => king_reach(from, to),
    }
}

/// Whether a `color` `piece` on `from` attacks `to`.
///
/// Same as [`piece_reach`] except that pawns only ever attack diagonally
/// forward, whether or not anything stands on `to`.
#[must_use]
pub fn attack_reach(board: &Board, color: Color, piece: Piece, from: Square, to: Square) -> bool {
    match piece {
        Piece::Pawn => pawn_attacks(color, from, to),
        _ => piece_reach(board, color, piece, from, to),
    }
}

/// The pawn capture pattern: one row forward, one column sideways
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr == color.pawn_direction() && dc.abs() == 1
}

fn pawn_reach(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction();
    let (dr, dc) = deltas(from, to);

    if dc == 0 {
        if dr == dir {
            return board.is_empty(to);
        }
        if dr == 2 * dir && from.row() == color.pawn_start_row() {
            let passed = from.offset(dir, 0);
            return passed.is_some_and(|sq| board.is_empty(sq)) && board.is_empty(to);
        }
        return false;
    }

    pawn_attacks(color, from, to) && board.color_on(to) == Some(color.opponent())
}

fn knight_reach(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn king_reach(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    from != to && dr.abs() <= 1 && dc.abs() <= 1
}
