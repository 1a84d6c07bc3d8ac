//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Returns true if no right is left
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color (its king moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Remove the right tied to a rook home corner, if `sq` is one.
    ///
    /// Keyed on square identity: vacating or landing on a1/h1/a8/h8 clears the
    /// matching flag whichever piece was involved.
    pub fn remove_for_square(&mut self, sq: Square) {
        if let Some((color, kingside)) = Self::corner_owner(sq) {
            self.remove(color, kingside);
        }
    }

    /// The rook home corner for a castling right
    #[must_use]
    pub const fn rook_home(color: Color, kingside: bool) -> Square {
        Square(color.back_row(), if kingside { 7 } else { 0 })
    }

    /// Parse a single FEN castling character (`K`, `Q`, `k` or `q`)
    #[must_use]
    pub const fn from_fen_char(c: char) -> Option<(Color, bool)> {
        match c {
            'K' => Some((Color::White, true)),
            'Q' => Some((Color::White, false)),
            'k' => Some((Color::Black, true)),
            'q' => Some((Color::Black, false)),
            _ => None,
        }
    }

    const fn corner_owner(sq: Square) -> Option<(Color, bool)> {
        match (sq.0, sq.1) {
            (7, 7) => Some((Color::White, true)),
            (7, 0) => Some((Color::White, false)),
            (0, 7) => Some((Color::Black, true)),
            (0, 0) => Some((Color::Black, false)),
            _ => None,
        }
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN castling field in canonical `KQkq` order, `-` when empty
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (c, bit) in [
            ('K', CASTLE_WHITE_K),
            ('Q', CASTLE_WHITE_Q),
            ('k', CASTLE_BLACK_K),
            ('q', CASTLE_BLACK_Q),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical() {
        let mut rights = CastlingRights::none();
        assert_eq!(rights.to_string(), "-");
        rights.set(Color::Black, false);
        rights.set(Color::White, true);
        assert_eq!(rights.to_string(), "Kq");
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
    }

    #[test]
    fn test_remove_for_corner_square() {
        let mut rights = CastlingRights::all();
        rights.remove_for_square("h1".parse().unwrap());
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.remove_for_square("e4".parse().unwrap());
        assert_eq!(rights.to_string(), "Qkq");
        rights.remove_for_square("a8".parse().unwrap());
        assert_eq!(rights.to_string(), "Qk");
    }

    #[test]
    fn test_remove_color() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::Black);
        assert_eq!(rights.to_string(), "KQ");
    }

    #[test]
    fn test_rook_home() {
        assert_eq!(CastlingRights::rook_home(Color::White, true).to_string(), "h1");
        assert_eq!(CastlingRights::rook_home(Color::Black, false).to_string(), "a8");
    }
}
