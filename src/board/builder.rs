//! Fluent builder for test and puzzle positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let pos = PositionBuilder::new()
//!     .piece("e1".parse::<Square>().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse::<Square>().unwrap(), Color::Black, Piece::King)
//!     .piece("a7".parse::<Square>().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(pos.to_fen(), "4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
//! ```

use super::{CastlingRights, Color, Piece, Position, Square};

/// Builds a [`Position`] square by square instead of from FEN.
///
/// Nothing is checked: kings may be missing and castling rights need not
/// match the pieces.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Start from an empty board
    #[must_use]
    pub const fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Start from the standard initial position
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::new(),
        }
    }

    /// Place a piece, replacing whatever stood there
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.board.set_piece(square, color, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.board.remove_piece(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    /// Replace all castling rights
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling_rights = rights;
        self
    }

    /// Grant a single castling right
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.position.castling_rights.set(color, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Option<Square>) -> Self {
        self.position.en_passant_target = target;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.position.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.position.fullmove_number = number;
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_matches_new() {
        assert_eq!(PositionBuilder::starting_position().build(), Position::new());
    }

    #[test]
    fn test_pieces_and_metadata() {
        let pos = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .castle(Color::White, true)
            .side_to_move(Color::Black)
            .halfmove_clock(3)
            .fullmove_number(12)
            .build();
        assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/4K2R b K - 3 12");
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(sq("a1"))
            .castling(CastlingRights::none())
            .build();
        assert!(pos.piece_at(sq("a1")).is_none());
        assert!(pos.piece_at(sq("b1")).is_some());
        assert!(pos.castling_rights().is_empty());
    }

    #[test]
    fn test_en_passant_target() {
        let pos = PositionBuilder::new().en_passant(Some(sq("d6"))).build();
        assert_eq!(pos.en_passant_target(), Some(sq("d6")));
    }
}
