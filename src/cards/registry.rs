//! Card registry: the fixed card library and starting deck.
//!
//! The library has two halves. Basic cards make up the starting deck;
//! negative cards only enter a battle when a compass event injects them.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardCategory, CardId};
use crate::core::GameRng;
use crate::effects::Effect;

pub const STRIKE: CardId = CardId::new(1);
pub const HEAVY_BLOW: CardId = CardId::new(2);
pub const FIREBALL: CardId = CardId::new(3);
pub const BLOCK: CardId = CardId::new(4);
pub const IRON_WILL: CardId = CardId::new(5);
pub const HEAL: CardId = CardId::new(6);
pub const GREATER_HEAL: CardId = CardId::new(7);

pub const CURSE: CardId = CardId::new(101);
pub const DRAIN: CardId = CardId::new(102);
pub const WEAKNESS: CardId = CardId::new(103);

/// The basic cards, in catalog order.
#[must_use]
pub fn basic_cards() -> Vec<Card> {
    vec![
        Card::new(STRIKE, "Strike", CardCategory::Attack, Effect::AddAttack(6))
            .with_compass_points(1)
            .with_description("Increase attack by 6"),
        Card::new(HEAVY_BLOW, "Heavy Blow", CardCategory::Attack, Effect::AddAttack(12))
            .with_cost(2)
            .with_compass_points(2)
            .with_description("Increase attack by 12"),
        Card::new(FIREBALL, "Fireball", CardCategory::Attack, Effect::DirectDamage(15))
            .with_cost(3)
            .with_compass_points(3)
            .with_description("Deal 15 damage directly"),
        Card::new(BLOCK, "Block", CardCategory::Defense, Effect::GainArmor(8))
            .with_cost(1)
            .with_compass_points(1)
            .with_description("Gain 8 armor"),
        Card::new(IRON_WILL, "Iron Will", CardCategory::Defense, Effect::GainArmor(15))
            .with_cost(2)
            .with_compass_points(1)
            .with_description("Gain 15 armor"),
        Card::new(HEAL, "Heal", CardCategory::Heal, Effect::Heal(12))
            .with_cost(2)
            .with_compass_points(1)
            .with_description("Restore 12 HP"),
        Card::new(GREATER_HEAL, "Greater Heal", CardCategory::Heal, Effect::Heal(20))
            .with_cost(4)
            .with_compass_points(2)
            .with_description("Restore 20 HP"),
    ]
}

/// The negative cards compass events may inject. Free and compass-neutral.
#[must_use]
pub fn negative_cards() -> Vec<Card> {
    vec![
        Card::new(CURSE, "Curse", CardCategory::Negative, Effect::SkipNextTurn)
            .with_description("Skip the next turn"),
        Card::new(DRAIN, "Drain", CardCategory::Negative, Effect::TakeDamage(5))
            .with_description("Lose 5 HP"),
        Card::new(WEAKNESS, "Weakness", CardCategory::Negative, Effect::HalveAttack)
            .with_description("Halve attack"),
    ]
}

/// Registry of every card definition.
///
/// ## Example
///
/// ```
/// use compass_duel::cards::{registry, CardRegistry};
///
/// let library = CardRegistry::standard();
/// let strike = library.get(registry::STRIKE).unwrap();
/// assert_eq!(strike.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the basic and negative catalogs.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for card in basic_cards().into_iter().chain(negative_cards()) {
            registry.register(card);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Look up a card definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build the starting deck: `copies` of every basic card, shuffled.
#[must_use]
pub fn starting_deck(copies: usize, rng: &mut GameRng) -> Vec<Card> {
    let mut deck: Vec<Card> = basic_cards()
        .into_iter()
        .flat_map(|card| std::iter::repeat(card).take(copies))
        .collect();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(basic_cards().len(), 7);
        assert_eq!(negative_cards().len(), 3);
        assert_eq!(CardRegistry::standard().len(), 10);
        assert!(CardRegistry::new().is_empty());
    }

    #[test]
    fn test_lookup() {
        let library = CardRegistry::standard();

        let fireball = library.get(FIREBALL).unwrap();
        assert!(fireball.is_direct_damage);
        assert_eq!(fireball.mp_cost, 3);
        assert_eq!(fireball.compass_points, 3);

        let curse = library.get(CURSE).unwrap();
        assert_eq!(curse.category, CardCategory::Negative);
        assert_eq!(curse.mp_cost, 0);

        assert!(library.get(CardId::new(999)).is_none());
    }

    #[test]
    fn test_only_fireball_is_direct_damage() {
        let direct: Vec<_> = basic_cards()
            .into_iter()
            .filter(|c| c.is_direct_damage)
            .map(|c| c.id)
            .collect();
        assert_eq!(direct, vec![FIREBALL]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut library = CardRegistry::standard();
        library.register(basic_cards().remove(0));
    }

    #[test]
    fn test_starting_deck_composition() {
        let mut rng = GameRng::new(42);
        let deck = starting_deck(3, &mut rng);

        assert_eq!(deck.len(), 21);
        for card in basic_cards() {
            assert_eq!(deck.iter().filter(|c| c.id == card.id).count(), 3);
        }
        assert!(deck.iter().all(|c| c.category != CardCategory::Negative));
    }

    #[test]
    fn test_starting_deck_is_seeded() {
        let a = starting_deck(3, &mut GameRng::new(5));
        let b = starting_deck(3, &mut GameRng::new(5));
        assert_eq!(a, b);
    }
}
