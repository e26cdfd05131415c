//! Interactive battle session: the mutable shell over the pure resolver.

use super::blitz::{can_initiate, run_blitz, run_single_roll, BattleReport};
use super::resolver::ForceCount;
use super::rng::{DieSource, Rng};

/// Owns the current force counts and the most recent battle's history for one
/// interactive session.
///
/// Missing or cleared input is the "no value" state: battle actions are
/// disabled rather than failing, and [BattleSession::can_attack] reports
/// whether they are available. Each battle replaces the previous report, and
/// its remainder becomes the next battle's starting forces.
#[derive(Debug)]
pub struct BattleSession<S = Rng> {
    forces: Option<ForceCount>,
    report: Option<BattleReport>,
    dice: S,
}

impl BattleSession<Rng> {
    pub fn new() -> Self {
        Self::with_dice(Rng::from_entropy())
    }
}

impl Default for BattleSession<Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DieSource> BattleSession<S> {
    pub fn with_dice(dice: S) -> Self {
        Self {
            forces: None,
            report: None,
            dice,
        }
    }

    /// Update the force counts from raw input. Either side missing leaves the
    /// session in the "no value" state.
    pub fn set_forces(&mut self, attackers: Option<u32>, defenders: Option<u32>) {
        self.forces = match (attackers, defenders) {
            (Some(attackers), Some(defenders)) => Some(ForceCount::new(attackers, defenders)),
            _ => None,
        };
    }

    pub fn forces(&self) -> Option<ForceCount> {
        self.forces
    }

    /// Report of the most recent battle, if one has been fought since the
    /// last reset.
    pub fn last_report(&self) -> Option<&BattleReport> {
        self.report.as_ref()
    }

    pub fn can_attack(&self) -> bool {
        self.forces.is_some_and(can_initiate)
    }

    /// Resolve a single round. Returns `None` without touching state when the
    /// session cannot legally attack.
    pub fn roll(&mut self) -> Option<&BattleReport> {
        self.battle(|forces, dice| run_single_roll(forces, dice))
    }

    /// Blitz to a terminal state.
    pub fn blitz(&mut self) -> Option<&BattleReport> {
        self.battle(|forces, dice| run_blitz(forces, dice))
    }

    fn battle(
        &mut self,
        run: impl FnOnce(ForceCount, &mut S) -> BattleReport,
    ) -> Option<&BattleReport> {
        let forces = self.forces.filter(|forces| can_initiate(*forces))?;
        let report = run(forces, &mut self.dice);
        self.forces = Some(report.remaining);
        self.report = Some(report);
        self.report.as_ref()
    }

    /// Discard forces and history. Explicit user action.
    pub fn reset(&mut self) {
        self.forces = None;
        self.report = None;
    }
}
