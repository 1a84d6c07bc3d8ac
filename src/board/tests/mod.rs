//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Attackers, checks and pins
//! - `validate.rs` - Move legality and move classification
//! - `apply.rs` - Position updates after a move
//! - `status.rs` - Check, mate and stalemate detection
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod apply;
mod proptest;
mod status;

use crate::board::{Move, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

pub(super) fn legal(fen: &str, m: &str) -> bool {
    Position::from_fen(fen).is_legal(&mv(m))
}
