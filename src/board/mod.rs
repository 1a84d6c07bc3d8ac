//! Chess positions and the rules that govern them.
//!
//! A [`Position`] is an immutable value decoded from FEN. The engine answers
//! whether a move is legal, produces the position after a legal move, and
//! classifies positions (check, double check, checkmate, stalemate).
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStatus, Position};
//!
//! let pos = Position::new();
//! println!("Starting position has {} legal moves", pos.legal_moves().len());
//!
//! let after = pos.play_uci("e2e4").unwrap();
//! assert_eq!(after.status(), GameStatus::Ongoing);
//! ```

mod apply;
pub mod attacks;
mod builder;
mod error;
mod fen;
pub mod geometry;
pub mod prelude;
mod state;
mod status;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, Position};
pub use status::{BoardAnalysis, GameStatus};
pub use types::{CastlingRights, Color, Move, MoveKind, Piece, Square};
