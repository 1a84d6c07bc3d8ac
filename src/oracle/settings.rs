//! Oracle configuration and per-move search settings.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Highest skill level the text protocol accepts
pub const MAX_SKILL: u8 = 20;

/// Bot strength on the 1-17 scale offered to players.
///
/// Out-of-range levels are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Strength(u8);

impl Strength {
    pub const MIN: Strength = Strength(1);
    pub const MAX: Strength = Strength(17);

    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level < Self::MIN.0 {
            Self::MIN
        } else if level > Self::MAX.0 {
            Self::MAX
        } else {
            Strength(level)
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Strength::MIN
    }
}

impl From<u8> for Strength {
    fn from(level: u8) -> Self {
        Strength::new(level)
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// How long the oracle may think about one request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    Depth(u32),
    MoveTime(Duration),
}

/// Everything an oracle needs to answer one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSettings {
    /// 0-20
    pub skill_level: u8,
    pub limit: SearchLimit,
    /// How long to wait for the reply before giving up
    pub timeout: Duration,
}

impl SearchSettings {
    /// Settings for a bot move at `strength`.
    ///
    /// Weak levels cap the skill and search to a fixed depth; middle levels
    /// search by move time; the top three use full skill. Opening positions
    /// get shorter limits throughout.
    #[must_use]
    pub fn for_strength(strength: Strength, opening: bool) -> Self {
        let lvl = strength.level();
        let ms = |millis: u64| SearchLimit::MoveTime(Duration::from_millis(millis));
        let secs = Duration::from_secs;

        match lvl {
            1..=5 => SearchSettings {
                skill_level: (lvl * 2).min(10),
                limit: SearchLimit::Depth(u32::from(lvl) + if opening { 1 } else { 2 }),
                timeout: secs(if opening { 1 } else { 3 }),
            },
            6..=10 => SearchSettings {
                skill_level: (lvl + 5).min(15),
                limit: ms(if opening {
                    500
                } else {
                    1000 + u64::from(lvl - 5) * 500
                }),
                timeout: secs(if opening { 2 } else { 5 }),
            },
            11..=14 => SearchSettings {
                skill_level: (lvl + 5).min(MAX_SKILL),
                limit: ms(if opening {
                    1000
                } else {
                    3000 + u64::from(lvl - 10) * 1000
                }),
                timeout: secs(if opening { 3 } else { 8 }),
            },
            _ => {
                let limit = match lvl {
                    15 => ms(if opening { 2000 } else { 8000 }),
                    16 => SearchLimit::Depth(if opening { 12 } else { 18 }),
                    _ => ms(if opening { 3000 } else { 15000 }),
                };
                SearchSettings {
                    skill_level: MAX_SKILL,
                    limit,
                    timeout: secs(if opening { 5 } else { 20 }),
                }
            }
        }
    }

    /// Settings for a position evaluation: full skill, fixed move time
    #[must_use]
    pub fn for_evaluation(config: &OracleConfig, opening: bool) -> Self {
        let movetime = if opening {
            config.opening_evaluation_movetime
        } else {
            config.evaluation_movetime
        };
        SearchSettings {
            skill_level: MAX_SKILL,
            limit: SearchLimit::MoveTime(movetime),
            timeout: movetime + config.evaluation_grace,
        }
    }

    /// `setoption name Skill Level value N`
    #[must_use]
    pub fn skill_command(&self) -> String {
        format!("setoption name Skill Level value {}", self.skill_level)
    }

    /// `go depth N` or `go movetime N`
    #[must_use]
    pub fn go_command(&self) -> String {
        match self.limit {
            SearchLimit::Depth(depth) => format!("go depth {depth}"),
            SearchLimit::MoveTime(time) => format!("go movetime {}", time.as_millis()),
        }
    }
}

/// Bot and evaluation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OracleConfig {
    pub strength: Strength,
    /// Skip the oracle and always play a random legal move
    pub random_bot: bool,
    /// Play a random legal move when the oracle cannot answer
    pub random_fallback: bool,
    pub evaluation_movetime: Duration,
    pub opening_evaluation_movetime: Duration,
    /// Extra wait on top of the evaluation move time
    pub evaluation_grace: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            strength: Strength::default(),
            random_bot: false,
            random_fallback: true,
            evaluation_movetime: Duration::from_millis(10_000),
            opening_evaluation_movetime: Duration::from_millis(2_000),
            evaluation_grace: Duration::from_millis(3_000),
        }
    }
}

/// Whether `position` still counts as the opening: within the first ten
/// moves, or at most 20 halfmoves since the last capture or pawn move.
#[must_use]
pub fn is_opening(position: &Position) -> bool {
    position.fullmove_number() <= 10 || position.halfmove_clock() <= 20
}
