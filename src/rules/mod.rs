//! Battle rules: the turn state machine and its command surface.
//!
//! `Battle` is the only type that moves a `BattleState` between phases.
//! Build one with `Battle::new(seed)` or `Battle::builder()`.

pub mod engine;

pub use engine::{Battle, BattleBuilder, BattleOutcome, BattleStatistics};
