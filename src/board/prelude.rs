//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let pos = Position::new();
//! assert_eq!(pos.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    BoardAnalysis, CastlingRights, Color, FenError, GameStatus, Move, MoveKind, MoveParseError,
    Piece, Position, PositionBuilder, Square,
};
