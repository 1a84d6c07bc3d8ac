use log::trace;

use super::attacks::{is_in_check, is_square_attacked};
use super::geometry::{pawn_attacks, piece_reach};
use super::{Board, CastlingRights, Move, MoveKind, Piece, Position, Square};

/// Why a move was turned down; only ever surfaces in trace logs.
#[derive(Debug, Clone, Copy)]
enum Rejection {
    NullMove,
    NoPieceToMove,
    OwnPieceOnTarget,
    BadPromotionPiece,
    Castling,
    EnPassant,
    Geometry,
    LeavesKingInCheck,
}

impl Position {
    /// Decide whether `mv` is legal for the side to move.
    ///
    /// Checks, in order: the move goes somewhere; the source holds a piece of
    /// the side to move; the target does not hold one; the requested
    /// promotion piece (if any) is one a pawn can become; the piece can get
    /// there (with special rules for castling and en passant); and the
    /// mover's king is safe on the resulting board.
    ///
    /// A promotion letter on a move that does not promote is ignored.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        match self.check_move(mv) {
            Ok(()) => true,
            Err(reason) => {
                trace!("rejected {mv} in {}: {reason:?}", self.to_fen());
                false
            }
        }
    }

    fn check_move(&self, mv: &Move) -> Result<(), Rejection> {
        let (from, to) = (mv.from(), mv.to());
        let us = self.side_to_move;

        if from == to {
            return Err(Rejection::NullMove);
        }
        let piece = match self.board.piece_at(from) {
            Some((color, piece)) if color == us => piece,
            _ => return Err(Rejection::NoPieceToMove),
        };
        if self.board.color_on(to) == Some(us) {
            return Err(Rejection::OwnPieceOnTarget);
        }
        if mv.promotion().is_some_and(|p| !p.is_promotion_target()) {
            return Err(Rejection::BadPromotionPiece);
        }

        if is_castling_shape(piece, from, to) {
            if !self.castling_allowed(from, to) {
                return Err(Rejection::Castling);
            }
        } else if is_en_passant_shape(&self.board, piece, from, to) {
            if !self.en_passant_allowed(from, to) {
                return Err(Rejection::EnPassant);
            }
        } else if !piece_reach(&self.board, us, piece, from, to) {
            return Err(Rejection::Geometry);
        }

        let mut scratch = self.board;
        Self::simulate(&mut scratch, piece, from, to);
        if is_in_check(&scratch, us) {
            return Err(Rejection::LeavesKingInCheck);
        }
        Ok(())
    }

    /// Castling: right held, king and rook on their home squares, nothing in
    /// between, and none of the king's start, passed or end squares attacked.
    fn castling_allowed(&self, from: Square, to: Square) -> bool {
        let us = self.side_to_move;
        let row = us.back_row();
        if from != Square(row, 4) {
            return false;
        }
        let kingside = to.col() > from.col();
        if !self.castling_rights.has(us, kingside) {
            return false;
        }
        let rook_home = CastlingRights::rook_home(us, kingside);
        if self.board.piece_at(rook_home) != Some((us, Piece::Rook)) {
            return false;
        }

        let between: &[usize] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        if !between.iter().all(|&col| self.board.is_empty(Square(row, col))) {
            return false;
        }

        let passed = Square(row, (from.col() + to.col()) / 2);
        let them = us.opponent();
        [from, passed, to]
            .iter()
            .all(|&sq| !is_square_attacked(&self.board, sq, them))
    }

    /// En passant: the target square matches, the pawn steps diagonally
    /// forward, and an enemy pawn sits beside it on the destination file.
    fn en_passant_allowed(&self, from: Square, to: Square) -> bool {
        let us = self.side_to_move;
        self.en_passant_target == Some(to)
            && pawn_attacks(us, from, to)
            && self.board.piece_at(Square(from.row(), to.col())) == Some((us.opponent(), Piece::Pawn))
    }

    /// Play the bare piece movement on a scratch board for the king-safety test.
    fn simulate(board: &mut Board, piece: Piece, from: Square, to: Square) {
        if is_en_passant_shape(board, piece, from, to) {
            board.remove_piece(Square(from.row(), to.col()));
        }
        if is_castling_shape(piece, from, to) {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            board.relocate(rook_from, rook_to);
        }
        board.relocate(from, to);
    }

    /// Category of `mv` in this position.
    ///
    /// Derived from the board alone; the move is not checked for legality.
    /// Returns [`MoveKind::Normal`] when the source square is empty.
    #[must_use]
    pub fn classify(&self, mv: &Move) -> MoveKind {
        let (from, to) = (mv.from(), mv.to());
        let Some((color, piece)) = self.board.piece_at(from) else {
            return MoveKind::Normal;
        };
        let capture = self
            .board
            .color_on(to)
            .is_some_and(|c| c == color.opponent());

        if is_castling_shape(piece, from, to) {
            return if to.col() > from.col() {
                MoveKind::CastleKingside
            } else {
                MoveKind::CastleQueenside
            };
        }
        if piece == Piece::Pawn {
            if is_en_passant_shape(&self.board, piece, from, to)
                && self.en_passant_target == Some(to)
            {
                return MoveKind::EnPassant;
            }
            if to.row() == color.promotion_row() {
                return MoveKind::Promotion { capture };
            }
        }
        if capture {
            MoveKind::Capture
        } else {
            MoveKind::Normal
        }
    }
}

/// King moving two columns along its row
pub(crate) fn is_castling_shape(piece: Piece, from: Square, to: Square) -> bool {
    piece == Piece::King && from.row() == to.row() && from.col().abs_diff(to.col()) == 2
}

/// Pawn moving diagonally onto an empty square
pub(crate) fn is_en_passant_shape(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    piece == Piece::Pawn && from.col() != to.col() && board.is_empty(to)
}

/// Rook source and destination for a castling king move
pub(crate) fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    let kingside = to.col() > from.col();
    (
        Square(from.row(), if kingside { 7 } else { 0 }),
        Square(from.row(), if kingside { 5 } else { 3 }),
    )
}
