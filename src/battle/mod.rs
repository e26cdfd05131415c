pub mod blitz;
pub mod export;
pub mod resolver;
pub mod rng;
pub mod session;

pub use blitz::{can_initiate, run_blitz, run_single_roll, winner, BattleReport, Side};
pub use export::write_history_csv;
pub use resolver::{resolve_round, ForceCount, RoundRecord, MAX_ATTACK_DICE, MAX_DEFEND_DICE};
pub use rng::{entropy_seed, DieSource, Rng, ScriptedDice, DIE_SIDES};
pub use session::BattleSession;
