//! Parsing helpers for oracle reply lines.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Unavailable;
use crate::board::Move;

/// Score reported by the oracle, from the point of view of the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evaluation {
    Centipawns(i32),
    /// Moves to mate; negative when the side to move is getting mated
    Mate(i32),
}

/// `+1.23`, `-0.50`, `#3`, `#-3`
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Evaluation::Centipawns(cp) => write!(f, "{:+.2}", f64::from(cp) / 100.0),
            Evaluation::Mate(n) if n > 0 => write!(f, "#{n}"),
            Evaluation::Mate(n) => write!(f, "#-{}", n.unsigned_abs()),
        }
    }
}

/// Parse a `bestmove` line.
///
/// `bestmove (none)` means the oracle sees no move and yields `Ok(None)`.
/// Anything after the move (such as a `ponder` suggestion) is ignored.
///
/// # Errors
/// [`Unavailable::Protocol`] if the line is not a `bestmove` line or the
/// move text cannot be parsed.
pub fn parse_bestmove(line: &str) -> Result<Option<Move>, Unavailable> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return Err(Unavailable::Protocol(line.to_string()));
    }
    match tokens.next() {
        Some("(none)") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| Unavailable::Protocol(line.to_string())),
        None => Err(Unavailable::Protocol(line.to_string())),
    }
}

/// Extract the score from an `info` line, if it carries one.
///
/// Understands `score cp N` and `score mate N`; bound markers such as
/// `lowerbound` after the value are ignored.
#[must_use]
pub fn parse_score(line: &str) -> Option<Evaluation> {
    let mut tokens = line.split_whitespace().skip_while(|t| *t != "score").skip(1);
    let kind = tokens.next()?;
    let value: i32 = tokens.next()?.parse().ok()?;
    match kind {
        "cp" => Some(Evaluation::Centipawns(value)),
        "mate" => Some(Evaluation::Mate(value)),
        _ => None,
    }
}
