//! Error types.
//!
//! `BattleError` covers caller-facing gameplay rejections. They never
//! change state and the caller is free to retry with different input.
//!
//! `IntegrityError` is different: it reports a broken invariant found by
//! [`BattleState::validate`](super::BattleState::validate) and means the
//! engine itself is in a bad state.

use thiserror::Error;

/// A command that was rejected without side effects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("invalid card index {index} (hand has {hand_size} cards)")]
    InvalidIndex { index: usize, hand_size: usize },

    #[error("not enough MP: need {needed}, have {available}")]
    InsufficientResource { needed: i64, available: i64 },

    #[error("cannot {action} now")]
    WrongPhase { action: &'static str },

    #[error("this turn is skipped, no cards can be played")]
    TurnSkipped,
}

/// A single broken invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("player HP {hp} outside 0..={max_hp}")]
    PlayerHp { hp: i64, max_hp: i64 },

    #[error("player MP {mp} outside 0..={max_mp}")]
    PlayerMp { mp: i64, max_mp: i64 },

    #[error("player armor is negative ({0})")]
    NegativeArmor(i64),

    #[error("player attack is negative ({0})")]
    NegativeAttack(i64),

    #[error("enemy HP {hp} outside 0..={max_hp}")]
    EnemyHp { hp: i64, max_hp: i64 },

    #[error("hand holds {size} cards, capacity is {capacity}")]
    HandOverflow { size: usize, capacity: usize },
}

/// Structural-integrity failure: one or more invariants do not hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("battle state corrupted: {}", .violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct IntegrityError {
    pub violations: Vec<IntegrityViolation>,
}
