//! Integration seam for an external move-suggestion oracle.
//!
//! The oracle is a separate engine process speaking a line-based text
//! protocol. This crate never talks to it directly: callers implement
//! [`MoveOracle`] over whatever transport they have, and [`choose_move`]
//! combines its answers with the rules engine, falling back to a random
//! legal move when the oracle is unavailable or answers with nonsense.

mod bot;
mod response;
mod settings;

use std::fmt;

pub use bot::{choose_move, evaluate_position, BotMove, MoveSource};
pub use response::{parse_bestmove, parse_score, Evaluation};
pub use settings::{is_opening, OracleConfig, SearchLimit, SearchSettings, Strength, MAX_SKILL};

use crate::board::attacks::is_in_check;
use crate::board::{Color, Move, Piece, Position};

/// Why the oracle could not answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// No oracle process is running
    NotRunning,
    /// No reply within the settings' timeout
    TimedOut,
    /// The oracle replied with a line that could not be understood
    Protocol(String),
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::NotRunning => write!(f, "Oracle is not running"),
            Unavailable::TimedOut => write!(f, "Oracle did not reply in time"),
            Unavailable::Protocol(line) => write!(f, "Unexpected oracle reply '{line}'"),
        }
    }
}

impl std::error::Error for Unavailable {}

/// A source of suggested moves and evaluations.
pub trait MoveOracle {
    /// Whether the oracle is up and ready for requests
    fn is_available(&self) -> bool;

    /// Ask for a move in the position given as FEN.
    ///
    /// `Ok(None)` means the oracle answered but has no move to offer.
    fn suggest_move(
        &mut self,
        fen: &str,
        settings: &SearchSettings,
    ) -> Result<Option<Move>, Unavailable>;

    /// Ask for a score of the position given as FEN
    fn evaluate(&mut self, fen: &str, settings: &SearchSettings)
        -> Result<Evaluation, Unavailable>;

    /// Oracle name (for logging)
    fn name(&self) -> &str {
        "oracle"
    }
}

impl Position {
    /// Whether the position is sane enough to hand to an oracle.
    ///
    /// Requires exactly one king per side and that the side that just moved
    /// is not left in check.
    #[must_use]
    pub fn is_queryable(&self) -> bool {
        Color::BOTH
            .iter()
            .all(|&color| self.board.count(color, Piece::King) == 1)
            && !is_in_check(&self.board, self.side_to_move.opponent())
    }
}
