use log::warn;

use super::error::MoveParseError;
use super::validate::{castling_rook_squares, is_castling_shape, is_en_passant_shape};
use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Play `mv` and return the resulting position.
    ///
    /// Assumes the move has already passed [`Position::is_legal`]. Handles
    /// the castling rook, the en passant capture and promotion (to a queen
    /// when no piece is named), then updates castling rights, the en passant
    /// target, both counters and the side to move.
    ///
    /// When the move cannot be played at all (empty source square, a
    /// promotion to pawn or king, or a move counter already at `u32::MAX`)
    /// the position is returned unchanged.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Position {
        let (from, to) = (mv.from(), mv.to());
        let Some((color, piece)) = self.board.piece_at(from) else {
            warn!("apply {mv}: no piece on {from}, position unchanged");
            return self.clone();
        };
        if let Some(promo) = mv.promotion().filter(|p| !p.is_promotion_target()) {
            warn!("apply {mv}: cannot promote to {promo}, position unchanged");
            return self.clone();
        }

        let mut next = self.clone();
        let board = &mut next.board;

        let en_passant = is_en_passant_shape(board, piece, from, to)
            && self.en_passant_target == Some(to);
        if en_passant {
            board.remove_piece(Square(from.row(), to.col()));
        }
        if is_castling_shape(piece, from, to) {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            board.relocate(rook_from, rook_to);
        }

        let captured = board.relocate(from, to);

        if piece == Piece::Pawn && to.row() == color.promotion_row() {
            let promo = mv.promotion().unwrap_or(Piece::Queen);
            board.set_piece(to, color, promo);
        }

        if piece == Piece::King {
            next.castling_rights.remove_color(color);
        }
        next.castling_rights.remove_for_square(from);
        next.castling_rights.remove_for_square(to);

        next.en_passant_target = if piece == Piece::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Square((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        let halfmove = if piece == Piece::Pawn || captured.is_some() || en_passant {
            Some(0)
        } else {
            self.halfmove_clock.checked_add(1)
        };
        let fullmove = if self.side_to_move == Color::Black {
            self.fullmove_number.checked_add(1)
        } else {
            Some(self.fullmove_number)
        };
        let (Some(halfmove), Some(fullmove)) = (halfmove, fullmove) else {
            warn!("apply {mv}: move counter overflow, position unchanged");
            return self.clone();
        };
        next.halfmove_clock = halfmove;
        next.fullmove_number = fullmove;
        next.side_to_move = self.side_to_move.opponent();

        next
    }

    /// Validate and apply `mv`.
    ///
    /// # Errors
    /// Returns [`MoveParseError::IllegalMove`] if the move is not legal here.
    pub fn play(&self, mv: &Move) -> Result<Position, MoveParseError> {
        if !self.is_legal(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        Ok(self.apply(mv))
    }

    /// Parse a move in long algebraic notation (`e2e4`, `e7e8q`) and play it.
    ///
    /// # Errors
    /// Returns the parse error for malformed text, or
    /// [`MoveParseError::IllegalMove`] for a well-formed move that is not legal.
    pub fn play_uci(&self, notation: &str) -> Result<Position, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.play(&mv)
    }
}
