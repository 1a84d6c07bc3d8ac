use super::{CastlingRights, Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid of optional pieces.
///
/// Indexed by [`Square`], so row 0 is rank 8. Board values are small and
/// `Copy`; validation works on scratch copies instead of undoing moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(7, col), Color::White, *piece);
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Clear a square, returning whatever stood there
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// Returns the piece previously on `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let moving = self.remove_piece(from);
        std::mem::replace(&mut self.squares[to.0][to.1], moving)
    }

    /// First king of `color` in scan order, if any
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Every occupied square in rank-major, file-minor order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Occupied squares of one color in scan order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    /// Number of pieces of a given color and type
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces_of(color).filter(|(_, p)| *p == piece).count()
    }
}

/// A complete game position: board plus the metadata carried by FEN.
///
/// Positions are values. Nothing in this crate mutates a position handed to
/// it; [`Position::apply`] returns a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Position::empty()
        }
    }

    /// An empty board, white to move, no rights, move 1
    #[must_use]
    pub const fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Shorthand for `self.board().piece_at(sq)`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
