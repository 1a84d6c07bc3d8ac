use std::fmt;

use log::{debug, info, warn};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::settings::{is_opening, OracleConfig, SearchSettings, Strength};
use super::{Evaluation, MoveOracle};
use crate::board::{Move, Position};

/// Where a bot move came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveSource {
    Oracle(Strength),
    /// Random bot requested by configuration
    Random,
    /// Random move played because the oracle could not answer
    RandomFallback,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Oracle(strength) => write!(f, "oracle {strength}"),
            MoveSource::Random => f.write_str("random bot"),
            MoveSource::RandomFallback => f.write_str("random bot (fallback)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BotMove {
    pub mv: Move,
    pub source: MoveSource,
}

/// Pick a move for the side to move.
///
/// With `random_bot` set the oracle is skipped. Otherwise the oracle is asked
/// when it is available and the position is queryable; its reply is used only
/// if it is a legal move. In every other case a random legal move is played
/// if `random_fallback` allows it. Returns `None` when no move can be found.
pub fn choose_move<O, R>(
    position: &Position,
    oracle: &mut O,
    config: &OracleConfig,
    rng: &mut R,
) -> Option<BotMove>
where
    O: MoveOracle + ?Sized,
    R: Rng + ?Sized,
{
    if config.random_bot {
        return pick_random(position, rng, MoveSource::Random);
    }

    if let Some(mv) = ask_oracle(position, oracle, config.strength) {
        let source = MoveSource::Oracle(config.strength);
        info!("{mv} from {source}");
        return Some(BotMove { mv, source });
    }

    if config.random_fallback {
        pick_random(position, rng, MoveSource::RandomFallback)
    } else {
        None
    }
}

fn ask_oracle<O>(position: &Position, oracle: &mut O, strength: Strength) -> Option<Move>
where
    O: MoveOracle + ?Sized,
{
    if !oracle.is_available() {
        warn!("{} unavailable", oracle.name());
        return None;
    }
    if !position.is_queryable() {
        warn!("not querying {} about {position}", oracle.name());
        return None;
    }

    let fen = position.to_fen();
    let settings = SearchSettings::for_strength(strength, is_opening(position));
    debug!(
        "asking {} at {strength}: {} / {}",
        oracle.name(),
        settings.skill_command(),
        settings.go_command()
    );

    match oracle.suggest_move(&fen, &settings) {
        Ok(Some(mv)) if position.is_legal(&mv) => Some(mv),
        Ok(Some(mv)) => {
            warn!("{} suggested illegal move {mv} in {fen}", oracle.name());
            None
        }
        Ok(None) => {
            warn!("{} has no move in {fen}", oracle.name());
            None
        }
        Err(e) => {
            warn!("{}: {e}", oracle.name());
            None
        }
    }
}

fn pick_random<R: Rng + ?Sized>(
    position: &Position,
    rng: &mut R,
    source: MoveSource,
) -> Option<BotMove> {
    let mv = position.random_move(rng)?;
    info!("{mv} from {source}");
    Some(BotMove { mv, source })
}

/// Ask the oracle for a score of `position`.
///
/// Returns `None` when the oracle is unavailable, the position is not
/// queryable, or no score came back.
pub fn evaluate_position<O>(
    position: &Position,
    oracle: &mut O,
    config: &OracleConfig,
) -> Option<Evaluation>
where
    O: MoveOracle + ?Sized,
{
    if !oracle.is_available() || !position.is_queryable() {
        return None;
    }
    let settings = SearchSettings::for_evaluation(config, is_opening(position));
    debug!("evaluating with {}", settings.go_command());
    match oracle.evaluate(&position.to_fen(), &settings) {
        Ok(eval) => Some(eval),
        Err(e) => {
            warn!("{}: {e}", oracle.name());
            None
        }
    }
}
