//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate, row 0 = rank 8
//! - `Move` and `MoveKind` - candidate moves and their derived category
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece};
pub use square::Square;
