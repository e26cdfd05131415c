//! Single-round dice battle resolution.
//!
//! Standard Risk-style rules: the attacker must leave one unit behind and may
//! commit at most three dice, the defender commits at most two, both bounded
//! by available units. Dice are paired by rank and ties go to the defender.

use serde::{Deserialize, Serialize};

use super::rng::DieSource;

/// Most dice the attacker may commit to one round.
pub const MAX_ATTACK_DICE: u32 = 3;
/// Most dice the defender may commit to one round.
pub const MAX_DEFEND_DICE: u32 = 2;

/// Units remaining on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceCount {
    pub attackers: u32,
    pub defenders: u32,
}

impl ForceCount {
    pub fn new(attackers: u32, defenders: u32) -> Self {
        Self {
            attackers,
            defenders,
        }
    }
}

/// One resolver invocation: the dice drawn (descending) and the losses they
/// inflicted. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub attack_dice: Vec<u8>,
    pub defend_dice: Vec<u8>,
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub remaining: ForceCount,
}

/// Resolve one round of combat.
///
/// Excess attacker dice beyond the defender's count are never compared and
/// cannot cost the attacker units. Remaining counts saturate at zero, so the
/// function is total even for degenerate inputs the battle loop never
/// produces.
pub fn resolve_round(forces: ForceCount, dice: &mut impl DieSource) -> RoundRecord {
    let attack_count = forces.attackers.saturating_sub(1).min(MAX_ATTACK_DICE);
    let defend_count = forces.defenders.min(MAX_DEFEND_DICE);

    let attack_dice = draw_sorted(attack_count, dice);
    let defend_dice = draw_sorted(defend_count, dice);

    let mut attacker_losses = 0_u32;
    let mut defender_losses = 0_u32;
    for (rank, defend_roll) in defend_dice.iter().enumerate() {
        match attack_dice.get(rank) {
            Some(attack_roll) if attack_roll > defend_roll => defender_losses += 1,
            Some(_) => attacker_losses += 1,
            None => {}
        }
    }

    let remaining = ForceCount {
        attackers: forces.attackers.saturating_sub(attacker_losses),
        defenders: forces.defenders.saturating_sub(defender_losses),
    };

    RoundRecord {
        attack_dice,
        defend_dice,
        attacker_losses,
        defender_losses,
        remaining,
    }
}

/// Draw `count` dice and sort them highest first.
fn draw_sorted(count: u32, dice: &mut impl DieSource) -> Vec<u8> {
    let mut drawn: Vec<u8> = (0..count).map(|_| dice.roll_die()).collect();
    drawn.sort_unstable_by(|a, b| b.cmp(a));
    drawn
}
