//! Monte Carlo win-odds estimation: run many independent blitzes from one
//! starting position and aggregate the outcomes.
//!
//! Battle `i` is seeded with `seed.wrapping_add(i)`, so the estimate for a
//! fixed seed is reproducible and independent of how the iteration space is
//! partitioned across workers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battle::{run_blitz, ForceCount, Rng, Side};
use crate::parallel::batch_ranges;

/// Aggregated outcome of an odds run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsEstimate {
    pub battles: u32,
    pub attacker_wins: u32,
    pub attacker_win_rate: f64,
    pub avg_attackers_remaining: f64,
    pub avg_defenders_remaining: f64,
}

/// Estimate attacker odds over `battles` independent blitzes.
pub fn estimate_odds(forces: ForceCount, battles: u32, seed: u64) -> OddsEstimate {
    let tally = run_range(forces, 0, battles as usize, seed);
    tally.into_estimate(battles)
}

/// Like [estimate_odds] but distributes battles across all CPU cores via
/// Rayon. Produces the same estimate as the sequential run for the same seed.
pub fn estimate_odds_parallel(forces: ForceCount, battles: u32, seed: u64) -> OddsEstimate {
    let ranges = batch_ranges(battles as usize, rayon::current_num_threads());
    let tally = ranges
        .into_par_iter()
        .map(|(start, end)| run_range(forces, start, end, seed))
        .reduce(Tally::default, Tally::merge);
    tally.into_estimate(battles)
}

/// Integer tallies so that merge order cannot perturb the result.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u64,
    attackers_remaining: u64,
    defenders_remaining: u64,
}

impl Tally {
    fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            attackers_remaining: self.attackers_remaining + other.attackers_remaining,
            defenders_remaining: self.defenders_remaining + other.defenders_remaining,
        }
    }

    fn into_estimate(self, battles: u32) -> OddsEstimate {
        let divisor = f64::from(battles.max(1));
        OddsEstimate {
            battles,
            attacker_wins: self.wins as u32,
            attacker_win_rate: self.wins as f64 / divisor,
            avg_attackers_remaining: self.attackers_remaining as f64 / divisor,
            avg_defenders_remaining: self.defenders_remaining as f64 / divisor,
        }
    }
}

fn run_range(forces: ForceCount, start: usize, end: usize, seed: u64) -> Tally {
    let mut tally = Tally::default();
    for battle in start..end {
        let mut rng = Rng::new(seed.wrapping_add(battle as u64));
        let report = run_blitz(forces, &mut rng);
        if report.winner == Some(Side::Attacker) {
            tally.wins += 1;
        }
        tally.attackers_remaining += u64::from(report.remaining.attackers);
        tally.defenders_remaining += u64::from(report.remaining.defenders);
    }
    tally
}
