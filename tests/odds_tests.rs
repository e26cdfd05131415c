use skirmish::battle::ForceCount;
use skirmish::odds::{estimate_odds, estimate_odds_parallel};
use skirmish::parallel::{run_odds_batches, WorkerPool};

#[test]
fn fixed_seed_is_reproducible() {
    let forces = ForceCount::new(8, 6);
    let first = estimate_odds(forces, 500, 7);
    let second = estimate_odds(forces, 500, 7);
    assert_eq!(first, second);
}

#[test]
fn different_seeds_move_the_estimate() {
    let forces = ForceCount::new(8, 6);
    let a = estimate_odds(forces, 500, 7);
    let b = estimate_odds(forces, 500, 8);
    // Same battle count, different outcomes drawn.
    assert_eq!(a.battles, b.battles);
    assert_ne!(a, b);
}

#[test]
fn parallel_matches_sequential_exactly() {
    let forces = ForceCount::new(12, 9);
    let sequential = estimate_odds(forces, 2_000, 42);
    let parallel = estimate_odds_parallel(forces, 2_000, 42);
    assert_eq!(sequential, parallel);
}

#[test]
fn pinned_worker_count_does_not_change_the_estimate() {
    let forces = ForceCount::new(12, 9);
    let sequential = estimate_odds(forces, 1_000, 5);
    let pinned = run_odds_batches(forces, 1_000, 5, &WorkerPool::with_workers(2));
    assert_eq!(sequential, pinned);
}

#[test]
fn overwhelming_attacker_nearly_always_wins() {
    let estimate = estimate_odds(ForceCount::new(10, 1), 1_000, 7);
    assert_eq!(estimate.battles, 1_000);
    assert!(estimate.attacker_win_rate > 0.9, "win rate {}", estimate.attacker_win_rate);
    assert!(estimate.avg_defenders_remaining < 0.05);
    assert!(estimate.avg_attackers_remaining > 1.0);
}

#[test]
fn outnumbered_attacker_nearly_always_loses() {
    let estimate = estimate_odds(ForceCount::new(2, 10), 1_000, 7);
    assert!(estimate.attacker_win_rate < 0.1, "win rate {}", estimate.attacker_win_rate);
}

#[test]
fn win_rate_stays_in_bounds() {
    let estimate = estimate_odds(ForceCount::new(5, 5), 300, 3);
    assert!((0.0..=1.0).contains(&estimate.attacker_win_rate));
    assert!(u64::from(estimate.attacker_wins) <= 300);
}

#[test]
fn zero_battles_yield_a_zeroed_estimate() {
    let estimate = estimate_odds(ForceCount::new(5, 5), 0, 1);
    assert_eq!(estimate.battles, 0);
    assert_eq!(estimate.attacker_wins, 0);
    assert_eq!(estimate.attacker_win_rate, 0.0);
    assert_eq!(estimate.avg_attackers_remaining, 0.0);
}
