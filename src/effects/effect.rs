//! Effect definitions.
//!
//! Effects are the atomic battle mutations shared by cards and compass
//! events. They are plain data; [`EffectResolver`](super::EffectResolver)
//! is the only place that interprets them.

use serde::{Deserialize, Serialize};

/// An atomic battle effect.
///
/// ## Attack
///
/// - `AddAttack`: raise this turn's attack (settled later)
/// - `ReduceAttack`: lower this turn's attack, floored at 0
/// - `HalveAttack`: halve attack, floored at 1, only when above 1
/// - `RaiseBaseAttack`: permanent base attack increase
/// - `DirectDamage`: damage the enemy immediately
///
/// ## Vitals
///
/// - `GainArmor`, `Heal`, `TakeDamage`, `RestoreMp`, `LoseMp`
///
/// ## Cards
///
/// - `DrawCards`: draw into the hand
/// - `DiscardRandom`: move a random hand card to discard
/// - `InjectNegativeCard`: put a random negative card on top of the deck
///
/// ## Pending flags
///
/// - `SkipNextTurn`, `DoubleNextAttack`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    // === Attack ===
    AddAttack(i64),
    ReduceAttack(i64),
    HalveAttack,
    RaiseBaseAttack(i64),
    DirectDamage(i64),

    // === Vitals ===
    GainArmor(i64),
    Heal(i64),
    TakeDamage(i64),
    RestoreMp(i64),
    LoseMp(i64),

    // === Cards ===
    DrawCards(usize),
    DiscardRandom,
    InjectNegativeCard,

    // === Pending flags ===
    SkipNextTurn,
    DoubleNextAttack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_serialization() {
        let effects = vec![Effect::AddAttack(6), Effect::DrawCards(2), Effect::DoubleNextAttack];
        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: Vec<Effect> = serde_json::from_str(&json).unwrap();
        assert_eq!(effects, deserialized);
    }
}
