//! Effect resolution - executing effects on battle state.
//!
//! `EffectResolver::apply` is the one dispatcher for every [`Effect`],
//! whether it comes from a card or a compass event. Each arm mutates the
//! state and appends a log line prefixed with the source's name.

use crate::cards::negative_cards;
use crate::core::BattleState;

use super::Effect;

/// Resolves effects on battle state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `effect` to `state`. `source` names the card or event.
    pub fn apply(state: &mut BattleState, effect: &Effect, source: &str) {
        match effect {
            Effect::AddAttack(amount) => {
                state.player.atk += amount;
                let atk = state.player.atk;
                state.log(format!("{source}: attack +{amount} (now {atk})"));
            }

            Effect::ReduceAttack(amount) => {
                state.player.atk = (state.player.atk - amount).max(0);
                let atk = state.player.atk;
                state.log(format!("{source}: attack -{amount} (now {atk})"));
            }

            Effect::HalveAttack => {
                if state.player.atk > 1 {
                    state.player.atk = (state.player.atk / 2).max(1);
                    let atk = state.player.atk;
                    state.log(format!("{source}: attack halved to {atk}"));
                } else {
                    state.log(format!("{source}: attack is already at its minimum"));
                }
            }

            Effect::RaiseBaseAttack(amount) => {
                state.player.base_atk += amount;
                state.player.atk += amount;
                state.log(format!("{source}: attack permanently +{amount}"));
            }

            Effect::DirectDamage(amount) => {
                let dealt = state.enemy.take_damage(*amount);
                let name = state.enemy.name.clone();
                state.log(format!("{source} deals {dealt} damage to {name}"));
            }

            Effect::GainArmor(amount) => {
                state.player.add_armor(*amount);
                state.log(format!("{source}: gained {amount} armor"));
            }

            Effect::Heal(amount) => {
                let healed = state.player.heal(*amount);
                state.log(format!("{source}: restored {healed} HP"));
            }

            Effect::TakeDamage(amount) => {
                let lost = state.player.take_damage(*amount);
                state.log(format!("{source}: lost {lost} HP"));
            }

            Effect::RestoreMp(amount) => {
                let restored = state.player.restore_mp(*amount);
                state.log(format!("{source}: gained {restored} MP"));
            }

            Effect::LoseMp(amount) => {
                let lost = state.player.lose_mp(*amount);
                state.log(format!("{source}: lost {lost} MP"));
            }

            Effect::DrawCards(count) => {
                let drawn = state.draw_cards(*count);
                let noun = if drawn == 1 { "card" } else { "cards" };
                state.log(format!("{source}: drew {drawn} {noun}"));
            }

            Effect::DiscardRandom => {
                let hand = state.zones.hand_count();
                let discarded = state
                    .rng
                    .gen_index(hand)
                    .and_then(|index| state.zones.remove_card_from_hand(index))
                    .map(|card| card.name.clone());
                match discarded {
                    Some(name) => state.log(format!("{source}: discarded {name}")),
                    None => state.log(format!("{source}: hand is empty, nothing to discard")),
                }
            }

            Effect::InjectNegativeCard => {
                let pool = negative_cards();
                if let Some(card) = state.rng.choose(&pool).cloned() {
                    let name = card.name.clone();
                    state.zones.add_negative_card(card);
                    state.log(format!("{source}: a {name} was added to your deck"));
                }
            }

            Effect::SkipNextTurn => {
                state.pending.skip_next_turn = true;
                state.log(format!("{source}: the next card phase will be skipped"));
            }

            Effect::DoubleNextAttack => {
                state.pending.double_next_attack = true;
                state.log(format!("{source}: the next attack deals double damage"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{basic_cards, CardCategory};
    use crate::core::{BattleConfig, GameRng};

    fn state() -> BattleState {
        let mut state = BattleState::new(&BattleConfig::default(), basic_cards(), GameRng::new(3));
        state.fill_hand();
        state
    }

    #[test]
    fn test_attack_effects() {
        let mut state = state();

        EffectResolver::apply(&mut state, &Effect::AddAttack(6), "Strike");
        assert_eq!(state.player.atk, 7);

        EffectResolver::apply(&mut state, &Effect::ReduceAttack(2), "Waning Strength");
        assert_eq!(state.player.atk, 5);

        EffectResolver::apply(&mut state, &Effect::ReduceAttack(9), "Waning Strength");
        assert_eq!(state.player.atk, 0);
    }

    #[test]
    fn test_halve_attack() {
        let mut state = state();
        state.player.atk = 13;
        EffectResolver::apply(&mut state, &Effect::HalveAttack, "Weakness");
        assert_eq!(state.player.atk, 6);

        state.player.atk = 3;
        EffectResolver::apply(&mut state, &Effect::HalveAttack, "Weakness");
        assert_eq!(state.player.atk, 1);

        EffectResolver::apply(&mut state, &Effect::HalveAttack, "Weakness");
        assert_eq!(state.player.atk, 1);
        assert!(state.log.recent(1)[0].contains("minimum"));
    }

    #[test]
    fn test_raise_base_attack_survives_turn_reset() {
        let mut state = state();
        EffectResolver::apply(&mut state, &Effect::RaiseBaseAttack(1), "Power Awakening");
        assert_eq!(state.player.atk, 2);

        state.player.reset_for_new_turn();
        assert_eq!(state.player.atk, 2);
        assert_eq!(state.player.base_atk, 2);
    }

    #[test]
    fn test_direct_damage() {
        let mut state = state();
        EffectResolver::apply(&mut state, &Effect::DirectDamage(15), "Fireball");
        assert_eq!(state.enemy.hp, 65);
        assert_eq!(state.log.recent(1), vec!["Fireball deals 15 damage to Forest Goblin"]);
    }

    #[test]
    fn test_vital_effects() {
        let mut state = state();
        state.player.hp = 50;

        EffectResolver::apply(&mut state, &Effect::GainArmor(8), "Block");
        EffectResolver::apply(&mut state, &Effect::TakeDamage(5), "Drain");
        assert_eq!(state.player.armor, 3);
        assert_eq!(state.player.hp, 50);

        EffectResolver::apply(&mut state, &Effect::Heal(12), "Heal");
        assert_eq!(state.player.hp, 62);

        EffectResolver::apply(&mut state, &Effect::LoseMp(2), "Mana Burn");
        assert_eq!(state.player.mp, 13);
        EffectResolver::apply(&mut state, &Effect::RestoreMp(3), "Mana Surge");
        assert_eq!(state.player.mp, 15);
    }

    #[test]
    fn test_discard_random() {
        let mut state = state();
        assert_eq!(state.zones.hand_count(), 5);

        EffectResolver::apply(&mut state, &Effect::DiscardRandom, "Unease");

        assert_eq!(state.zones.hand_count(), 4);
        assert_eq!(state.zones.discard_count(), 1);
    }

    #[test]
    fn test_discard_random_empty_hand() {
        let mut state = BattleState::new(&BattleConfig::default(), Vec::new(), GameRng::new(3));

        EffectResolver::apply(&mut state, &Effect::DiscardRandom, "Unease");

        assert_eq!(state.zones.discard_count(), 0);
        assert!(state.log.recent(1)[0].contains("hand is empty"));
    }

    #[test]
    fn test_inject_negative_card() {
        let mut state = state();
        let before = state.zones.total_cards();

        EffectResolver::apply(&mut state, &Effect::InjectNegativeCard, "Curse Erosion");

        assert_eq!(state.zones.total_cards(), before + 1);
        let top = state.zones.deck().next().unwrap();
        assert_eq!(top.category, CardCategory::Negative);
    }

    #[test]
    fn test_draw_cards_respects_capacity() {
        let mut state = state();
        state.zones.remove_card_from_hand(0);

        EffectResolver::apply(&mut state, &Effect::DrawCards(2), "Inspiration");

        assert_eq!(state.zones.hand_count(), 5);
        assert_eq!(state.log.recent(1), vec!["Inspiration: drew 1 card"]);
    }

    #[test]
    fn test_flags() {
        let mut state = state();
        EffectResolver::apply(&mut state, &Effect::SkipNextTurn, "Curse");
        EffectResolver::apply(&mut state, &Effect::DoubleNextAttack, "Battle Frenzy");
        assert!(state.pending.skip_next_turn);
        assert!(state.pending.double_next_attack);
    }

    #[test]
    fn test_draw_cards_full_hand_logs_zero() {
        let mut state = state();

        EffectResolver::apply(&mut state, &Effect::DrawCards(2), "Inspiration");

        assert_eq!(state.zones.hand_count(), 5);
        assert_eq!(state.log.recent(1), vec!["Inspiration: drew 0 cards"]);
    }
}
