//! Event registry: the two compass event tables.
//!
//! `EventRegistry::trigger` maps a landed compass category to an outcome:
//! nothing for normal slots, a uniformly chosen event from the matching
//! table otherwise.

use serde::{Deserialize, Serialize};

use super::event::{lucky_events, negative_events, CompassEvent};
use crate::compass::CompassCategory;
use crate::core::BattleState;

/// Catalog sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStatistics {
    pub negative_events: usize,
    pub lucky_events: usize,
    pub total_events: usize,
}

/// Negative and lucky event tables.
#[derive(Clone, Debug)]
pub struct EventRegistry {
    negative: Vec<CompassEvent>,
    lucky: Vec<CompassEvent>,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl EventRegistry {
    /// The standard six-and-six tables.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_tables(negative_events(), lucky_events())
    }

    /// Custom tables.
    #[must_use]
    pub fn with_tables(negative: Vec<CompassEvent>, lucky: Vec<CompassEvent>) -> Self {
        Self { negative, lucky }
    }

    /// Resolve the category the compass landed on.
    ///
    /// Returns the event that fired, if any.
    pub fn trigger(&self, category: CompassCategory, state: &mut BattleState) -> Option<&CompassEvent> {
        let table = match category {
            CompassCategory::Normal => {
                state.log("The compass turns quietly...");
                return None;
            }
            CompassCategory::Negative => &self.negative,
            CompassCategory::Lucky => &self.lucky,
        };

        let event = state.rng.choose(table)?;
        event.fire(state);
        Some(event)
    }

    #[must_use]
    pub fn negative(&self) -> &[CompassEvent] {
        &self.negative
    }

    #[must_use]
    pub fn lucky(&self) -> &[CompassEvent] {
        &self.lucky
    }

    #[must_use]
    pub fn statistics(&self) -> EventStatistics {
        EventStatistics {
            negative_events: self.negative.len(),
            lucky_events: self.lucky.len(),
            total_events: self.negative.len() + self.lucky.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::basic_cards;
    use crate::core::{BattleConfig, GameRng};
    use crate::effects::Effect;
    use crate::triggers::EventKind;

    fn state(seed: u64) -> BattleState {
        let mut state = BattleState::new(&BattleConfig::default(), basic_cards(), GameRng::new(seed));
        state.fill_hand();
        state
    }

    #[test]
    fn test_normal_only_logs() {
        let registry = EventRegistry::standard();
        let mut state = state(1);
        let player = state.player.clone();

        let fired = registry.trigger(CompassCategory::Normal, &mut state);

        assert!(fired.is_none());
        assert_eq!(state.player, player);
        assert_eq!(state.log.recent(1), vec!["The compass turns quietly..."]);
    }

    #[test]
    fn test_negative_and_lucky_pick_from_matching_table() {
        let registry = EventRegistry::standard();
        for seed in 0..20 {
            let mut state = state(seed);
            let fired = registry.trigger(CompassCategory::Negative, &mut state).unwrap();
            assert_eq!(fired.kind, EventKind::Negative);

            let fired = registry.trigger(CompassCategory::Lucky, &mut state).unwrap();
            assert_eq!(fired.kind, EventKind::Lucky);
        }
    }

    #[test]
    fn test_every_event_reachable() {
        let registry = EventRegistry::standard();
        let mut seen = std::collections::HashSet::new();
        let mut state = state(7);
        for _ in 0..200 {
            if let Some(event) = registry.trigger(CompassCategory::Lucky, &mut state) {
                seen.insert(event.name.clone());
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_custom_table() {
        let only = CompassEvent::new("Rain", "Gain 1 armor", EventKind::Lucky, Effect::GainArmor(1));
        let registry = EventRegistry::with_tables(Vec::new(), vec![only]);
        let mut state = state(1);

        registry.trigger(CompassCategory::Lucky, &mut state);
        assert_eq!(state.player.armor, 1);

        assert!(registry.trigger(CompassCategory::Negative, &mut state).is_none());
    }

    #[test]
    fn test_statistics() {
        let stats = EventRegistry::standard().statistics();
        assert_eq!(stats.negative_events, 6);
        assert_eq!(stats.lucky_events, 6);
        assert_eq!(stats.total_events, 12);
        assert_eq!(EventRegistry::default().negative().len(), 6);
        assert_eq!(EventRegistry::default().lucky().len(), 6);
    }
}
