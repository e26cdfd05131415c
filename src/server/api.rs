//! JSON payload builders for the battle API. Pure string-in/string-out so the
//! router (and its tests) never touch a socket.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::battle::{
    can_initiate, entropy_seed, run_blitz, run_single_roll, BattleReport, ForceCount, Rng,
};
use crate::odds::{estimate_odds_parallel, OddsEstimate};

pub const DEFAULT_ODDS_BATTLES: u32 = 10_000;
pub const MAX_ODDS_BATTLES: u32 = 1_000_000;

#[derive(Debug, Clone, Deserialize)]
pub struct BattleRequest {
    pub attackers: Option<u32>,
    pub defenders: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsRequest {
    pub attackers: Option<u32>,
    pub defenders: Option<u32>,
    pub battles: Option<u32>,
    pub seed: Option<u64>,
}

/// Input echo carried on every successful response. `seed` is the seed that
/// was actually used, so any battle can be replayed even when the caller left
/// it to OS entropy.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub attackers: u32,
    pub defenders: u32,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleResponse {
    pub status: &'static str,
    pub mode: &'static str,
    pub scenario: ScenarioSummary,
    /// Whether another battle may be initiated from `report.remaining`.
    pub can_continue: bool,
    pub report: BattleReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct OddsResponse {
    pub status: &'static str,
    pub scenario: ScenarioSummary,
    pub estimate: OddsEstimate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub enum BattlePayloadError {
    Parse(serde_json::Error),
    Validation(ValidationErrorResponse),
}

impl fmt::Display for BattlePayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(_) => write!(f, "invalid battle request"),
        }
    }
}

impl std::error::Error for BattlePayloadError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "skirmish-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// POST /api/roll: resolve exactly one round.
pub fn roll_payload(body: &str) -> Result<String, BattlePayloadError> {
    battle_payload(body, "roll", |forces, rng| run_single_roll(forces, rng))
}

/// POST /api/blitz: resolve rounds until a terminal state.
pub fn blitz_payload(body: &str) -> Result<String, BattlePayloadError> {
    battle_payload(body, "blitz", |forces, rng| run_blitz(forces, rng))
}

fn battle_payload(
    body: &str,
    mode: &'static str,
    run: impl FnOnce(ForceCount, &mut Rng) -> BattleReport,
) -> Result<String, BattlePayloadError> {
    let request: BattleRequest = serde_json::from_str(body).map_err(BattlePayloadError::Parse)?;
    let forces = validate_forces(request.attackers, request.defenders)
        .map_err(BattlePayloadError::Validation)?;
    let seed = request.seed.unwrap_or_else(entropy_seed);

    let mut rng = Rng::new(seed);
    let report = run(forces, &mut rng);
    let response = BattleResponse {
        status: "ok",
        mode,
        scenario: ScenarioSummary {
            attackers: forces.attackers,
            defenders: forces.defenders,
            seed,
        },
        can_continue: can_initiate(report.remaining),
        report,
    };
    serde_json::to_string_pretty(&response).map_err(BattlePayloadError::Parse)
}

/// POST /api/odds: Monte Carlo win-odds estimate.
pub fn odds_payload(body: &str) -> Result<String, BattlePayloadError> {
    let request: OddsRequest = serde_json::from_str(body).map_err(BattlePayloadError::Parse)?;
    let forces = validate_forces(request.attackers, request.defenders)
        .map_err(BattlePayloadError::Validation)?;
    let battles = request
        .battles
        .unwrap_or(DEFAULT_ODDS_BATTLES)
        .min(MAX_ODDS_BATTLES);
    let seed = request.seed.unwrap_or_else(entropy_seed);

    let response = OddsResponse {
        status: "ok",
        scenario: ScenarioSummary {
            attackers: forces.attackers,
            defenders: forces.defenders,
            seed,
        },
        estimate: estimate_odds_parallel(forces, battles, seed),
    };
    serde_json::to_string_pretty(&response).map_err(BattlePayloadError::Parse)
}

/// Field-level gate check. Mirrors [can_initiate]: the attacker must field at
/// least two units and the defender at least one.
fn validate_forces(
    attackers: Option<u32>,
    defenders: Option<u32>,
) -> Result<ForceCount, ValidationErrorResponse> {
    let mut errors = Vec::new();

    match attackers {
        None => errors.push(ValidationIssue {
            field: "attackers",
            messages: vec!["attackers is required".to_string()],
        }),
        Some(count) if count <= 1 => errors.push(ValidationIssue {
            field: "attackers",
            messages: vec![format!(
                "attacker needs at least 2 units to roll, got {count}"
            )],
        }),
        Some(_) => {}
    }

    match defenders {
        None => errors.push(ValidationIssue {
            field: "defenders",
            messages: vec!["defenders is required".to_string()],
        }),
        Some(0) => errors.push(ValidationIssue {
            field: "defenders",
            messages: vec!["defender has no units left".to_string()],
        }),
        Some(_) => {}
    }

    if let (Some(attackers), Some(defenders)) = (attackers, defenders) {
        if errors.is_empty() {
            return Ok(ForceCount::new(attackers, defenders));
        }
    }

    Err(ValidationErrorResponse {
        status: "error",
        message: "Validation failed",
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_forces_accepts_minimal_legal_battle() {
        let forces = validate_forces(Some(2), Some(1)).expect("gate should pass");
        assert_eq!(forces, ForceCount::new(2, 1));
    }

    #[test]
    fn validate_forces_collects_issues_for_both_sides() {
        let err = validate_forces(Some(1), Some(0)).expect_err("gate should fail");
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.errors[0].field, "attackers");
        assert_eq!(err.errors[1].field, "defenders");
    }

    #[test]
    fn validate_forces_treats_missing_input_as_disabled() {
        let err = validate_forces(None, Some(3)).expect_err("gate should fail");
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "attackers");
    }
}
