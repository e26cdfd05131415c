//! Battle loop: repeated resolution until a side can no longer fight.

use serde::{Deserialize, Serialize};

use super::resolver::{resolve_round, ForceCount, RoundRecord};
use super::rng::DieSource;

/// Winning side of a finished battle, when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attacker,
    Defender,
}

/// Terminal state of one battle plus the full round history that produced it.
/// The history is rebuilt from scratch on every battle invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub remaining: ForceCount,
    pub winner: Option<Side>,
    pub rounds: Vec<RoundRecord>,
}

/// A battle may start only while the attacker can spare a die and the
/// defender still holds units. Re-check after every battle before offering
/// another.
pub fn can_initiate(forces: ForceCount) -> bool {
    forces.attackers > 1 && forces.defenders > 0
}

/// Winner, if either side has been wiped out. An attacker reduced to a single
/// unit has not lost; the battle simply cannot continue.
pub fn winner(remaining: ForceCount) -> Option<Side> {
    if remaining.attackers == 0 {
        Some(Side::Defender)
    } else if remaining.defenders == 0 {
        Some(Side::Attacker)
    } else {
        None
    }
}

/// Run rounds until the attacker is down to a single unit or the defender is
/// eliminated, feeding each round's remainder into the next. The first round
/// always happens; callers gate entry with [can_initiate].
///
/// Terminates: while both stop conditions are false, at least one die pair is
/// compared per round, so the combined unit count strictly decreases.
pub fn run_blitz(forces: ForceCount, dice: &mut impl DieSource) -> BattleReport {
    let mut rounds = Vec::new();
    let mut current = forces;
    loop {
        let record = resolve_round(current, dice);
        current = record.remaining;
        rounds.push(record);
        if current.attackers <= 1 || current.defenders == 0 {
            break;
        }
    }
    BattleReport {
        remaining: current,
        winner: winner(current),
        rounds,
    }
}

/// Single-roll variant: exactly one round regardless of the outcome.
pub fn run_single_roll(forces: ForceCount, dice: &mut impl DieSource) -> BattleReport {
    let record = resolve_round(forces, dice);
    let remaining = record.remaining;
    BattleReport {
        remaining,
        winner: winner(remaining),
        rounds: vec![record],
    }
}
