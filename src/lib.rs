pub mod board;
pub mod oracle;

pub use board::{Color, GameStatus, Move, Piece, Position, Square};
