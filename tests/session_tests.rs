use skirmish::battle::{BattleSession, ForceCount, ScriptedDice};

fn session() -> BattleSession<ScriptedDice> {
    // High attack dice, low defend dice: the attacker wins every comparison.
    BattleSession::with_dice(ScriptedDice::new([6, 6, 6, 1, 1]))
}

#[test]
fn session_starts_disabled() {
    let mut session = session();
    assert!(!session.can_attack());
    assert!(session.roll().is_none());
    assert!(session.blitz().is_none());
    assert!(session.last_report().is_none());
}

#[test]
fn partial_input_keeps_actions_disabled() {
    let mut session = session();
    session.set_forces(Some(5), None);
    assert!(!session.can_attack());
    assert!(session.forces().is_none());

    session.set_forces(None, Some(3));
    assert!(!session.can_attack());
}

#[test]
fn roll_updates_forces_from_the_remainder() {
    let mut session = session();
    session.set_forces(Some(5), Some(4));
    assert!(session.can_attack());

    let report = session.roll().expect("gate passes").clone();
    assert_eq!(report.rounds.len(), 1);
    assert_eq!(session.forces(), Some(report.remaining));
}

#[test]
fn gate_violation_is_a_no_op() {
    let mut session = session();
    session.set_forces(Some(1), Some(1));

    assert!(session.roll().is_none());
    assert_eq!(session.forces(), Some(ForceCount::new(1, 1)));
    assert!(session.last_report().is_none());
}

#[test]
fn each_battle_replaces_the_previous_history() {
    let mut session = session();
    session.set_forces(Some(6), Some(5));

    let first_rounds = session.roll().expect("gate passes").rounds.clone();
    assert_eq!(first_rounds.len(), 1);

    let report = session.blitz().expect("gate passes").clone();
    assert!(report.remaining.attackers <= 1 || report.remaining.defenders == 0);
    // The stored report is the blitz, not the earlier roll.
    assert_eq!(
        session.last_report().map(|r| r.rounds.len()),
        Some(report.rounds.len())
    );
}

#[test]
fn blitz_runs_to_a_terminal_state_and_disables_the_gate() {
    let mut session = session();
    session.set_forces(Some(8), Some(3));

    let report = session.blitz().expect("gate passes").clone();
    assert!(report.remaining.attackers <= 1 || report.remaining.defenders == 0);
    assert!(!session.can_attack());
}

#[test]
fn reset_returns_to_the_no_value_state() {
    let mut session = session();
    session.set_forces(Some(4), Some(2));
    session.roll().expect("gate passes");

    session.reset();
    assert!(session.forces().is_none());
    assert!(session.last_report().is_none());
    assert!(!session.can_attack());
}
