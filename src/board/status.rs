//! Game-state classification and tactical analysis.

use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::{king_attackers, pinned_pieces};
use super::{Color, Move, Piece, Position, Square};

/// Outcome of classifying a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    DoubleCheck,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// True when the game is over
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// The end-of-game reason, `"checkmate"` or `"stalemate"`
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            GameStatus::Checkmate { .. } => Some("checkmate"),
            GameStatus::Stalemate => Some("stalemate"),
            _ => None,
        }
    }

    /// True when the side to move is in check (including mate)
    #[must_use]
    pub const fn in_check(self) -> bool {
        matches!(
            self,
            GameStatus::Check | GameStatus::DoubleCheck | GameStatus::Checkmate { .. }
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::DoubleCheck => f.write_str("double check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Tactical snapshot for the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardAnalysis {
    /// Enemy pieces giving check, in scan order
    pub attacking_pieces: Vec<Square>,
    /// The king's square when it is in check
    pub king_in_check: Option<Square>,
    pub is_double_check: bool,
    /// Own pieces pinned to the king, in scan order
    pub pinned_pieces: Vec<Square>,
}

impl Position {
    /// Classify the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let us = self.side_to_move;
        let attackers = king_attackers(&self.board, us);
        let can_move = self.has_legal_move();

        let status = match (attackers.len(), can_move) {
            (0, false) => GameStatus::Stalemate,
            (0, true) => GameStatus::Ongoing,
            (_, false) => GameStatus::Checkmate {
                winner: us.opponent(),
            },
            (1, true) => GameStatus::Check,
            (_, true) => GameStatus::DoubleCheck,
        };
        debug!("{} -> {status} ({} attackers)", self.to_fen(), attackers.len());
        status
    }

    /// Attackers, check and pins for the side to move
    #[must_use]
    pub fn analyze(&self) -> BoardAnalysis {
        let us = self.side_to_move;
        let attacking_pieces = king_attackers(&self.board, us);
        let king_in_check = if attacking_pieces.is_empty() {
            None
        } else {
            self.board.find_king(us)
        };
        BoardAnalysis {
            is_double_check: attacking_pieces.len() >= 2,
            king_in_check,
            pinned_pieces: pinned_pieces(&self.board, us),
            attacking_pieces,
        }
    }

    /// Every legal move for the side to move.
    ///
    /// Tries every destination for every piece of the side to move and keeps
    /// what [`Position::is_legal`] accepts. Pawn moves onto the last rank are
    /// listed once, promoting to a queen.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.candidate_moves().filter(|mv| self.is_legal(mv)).collect()
    }

    /// True if the side to move has at least one legal move
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.candidate_moves().any(|mv| self.is_legal(&mv))
    }

    /// A uniformly chosen legal move, or `None` when there is none
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.legal_moves().choose(rng).copied()
    }

    fn candidate_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let us = self.side_to_move;
        self.board.pieces_of(us).flat_map(move |(from, piece)| {
            Square::all().filter(move |&to| to != from).map(move |to| {
                if piece == Piece::Pawn && to.row() == us.promotion_row() {
                    Move::with_promotion(from, to, Piece::Queen)
                } else {
                    Move::new(from, to)
                }
            })
        })
    }
}
