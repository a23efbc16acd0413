//! Compass events.
//!
//! A `CompassEvent` is a named, described [`Effect`] that fires when the
//! compass needle stops on a negative or lucky slot. The two catalogs are
//! fixed; selection within a catalog is uniform.

use serde::{Deserialize, Serialize};

use crate::core::BattleState;
use crate::effects::{Effect, EffectResolver};

/// Which catalog an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Negative,
    Lucky,
}

/// A named compass event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassEvent {
    pub name: String,
    pub description: String,
    pub kind: EventKind,
    pub effect: Effect,
}

impl CompassEvent {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: EventKind,
        effect: Effect,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            effect,
        }
    }

    /// Log the event and apply its effect.
    pub fn fire(&self, state: &mut BattleState) {
        state.log(format!("Compass event: {}!", self.name));
        state.log(format!("Effect: {}", self.description));
        EffectResolver::apply(state, &self.effect, &self.name);
    }
}

/// The six negative events.
#[must_use]
pub fn negative_events() -> Vec<CompassEvent> {
    use EventKind::Negative;
    vec![
        CompassEvent::new(
            "Curse Erosion",
            "A curse card is added to your deck",
            Negative,
            Effect::InjectNegativeCard,
        ),
        CompassEvent::new("Dark Energy", "You lose 3 HP", Negative, Effect::TakeDamage(3)),
        CompassEvent::new("Distraction", "Skip the next card phase", Negative, Effect::SkipNextTurn),
        CompassEvent::new("Mana Burn", "You lose 2 MP", Negative, Effect::LoseMp(2)),
        CompassEvent::new(
            "Waning Strength",
            "Your attack drops by 2",
            Negative,
            Effect::ReduceAttack(2),
        ),
        CompassEvent::new("Unease", "Discard a random card", Negative, Effect::DiscardRandom),
    ]
}

/// The six lucky events.
#[must_use]
pub fn lucky_events() -> Vec<CompassEvent> {
    use EventKind::Lucky;
    vec![
        CompassEvent::new("Holy Blessing", "Restore 15 HP", Lucky, Effect::Heal(15)),
        CompassEvent::new("Mana Surge", "Gain 3 MP", Lucky, Effect::RestoreMp(3)),
        CompassEvent::new(
            "Battle Frenzy",
            "Your next attack deals double damage",
            Lucky,
            Effect::DoubleNextAttack,
        ),
        CompassEvent::new("Perfect Defense", "Gain 10 armor", Lucky, Effect::GainArmor(10)),
        CompassEvent::new("Inspiration", "Draw 2 extra cards", Lucky, Effect::DrawCards(2)),
        CompassEvent::new(
            "Power Awakening",
            "Attack permanently increases by 1",
            Lucky,
            Effect::RaiseBaseAttack(1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::basic_cards;
    use crate::core::{BattleConfig, GameRng};

    #[test]
    fn test_catalogs() {
        let negative = negative_events();
        let lucky = lucky_events();

        assert_eq!(negative.len(), 6);
        assert_eq!(lucky.len(), 6);
        assert!(negative.iter().all(|e| e.kind == EventKind::Negative));
        assert!(lucky.iter().all(|e| e.kind == EventKind::Lucky));
    }

    #[test]
    fn test_fire_logs_name_then_description() {
        let mut state = BattleState::new(&BattleConfig::default(), basic_cards(), GameRng::new(1));
        let event = CompassEvent::new("Perfect Defense", "Gain 10 armor", EventKind::Lucky, Effect::GainArmor(10));

        event.fire(&mut state);

        assert_eq!(state.player.armor, 10);
        let lines = state.log.recent(3);
        assert_eq!(lines[0], "Compass event: Perfect Defense!");
        assert_eq!(lines[1], "Effect: Gain 10 armor");
    }
}
