//! Risk-style dice battle simulation: single-round resolution, the blitz
//! loop, Monte Carlo win odds, and the CLI/HTTP surfaces that expose them.

pub mod battle;
pub mod cli;
pub mod odds;
pub mod parallel;
pub mod server;
