//! Card definitions - static card data.
//!
//! A `Card` is an immutable template: name, cost, how far it pushes the
//! compass and the [`Effect`] it applies. Piles hold clones, so changing
//! one copy can never affect another.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// Identifies the kind of card ("Strike"), not one copy in a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Broad card category, used for display and grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Attack,
    Defense,
    Heal,
    /// Injected by compass events; never part of the starting deck.
    Negative,
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardCategory::Attack => "attack",
            CardCategory::Defense => "defense",
            CardCategory::Heal => "heal",
            CardCategory::Negative => "negative",
        };
        f.write_str(name)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use compass_duel::cards::{Card, CardCategory, CardId};
/// use compass_duel::effects::Effect;
///
/// let jab = Card::new(CardId::new(99), "Jab", CardCategory::Attack, Effect::AddAttack(2))
///     .with_cost(0)
///     .with_compass_points(1)
///     .with_description("Increase attack by 2");
///
/// assert_eq!(jab.mp_cost, 0);
/// assert!(!jab.is_direct_damage);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub category: CardCategory,
    /// MP spent to play the card.
    pub mp_cost: i64,
    /// Compass steps advanced after the card resolves.
    pub compass_points: i64,
    pub effect: Effect,
    pub description: String,
    /// Deals damage immediately instead of adding to attack.
    pub is_direct_damage: bool,
}

impl Card {
    /// Create a free card that does not move the compass.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, category: CardCategory, effect: Effect) -> Self {
        let is_direct_damage = matches!(effect, Effect::DirectDamage(_));
        Self {
            id,
            name: name.into(),
            category,
            mp_cost: 0,
            compass_points: 0,
            effect,
            description: String::new(),
            is_direct_damage,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, mp_cost: i64) -> Self {
        self.mp_cost = mp_cost;
        self
    }

    #[must_use]
    pub fn with_compass_points(mut self, points: i64) -> Self {
        self.compass_points = points;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the player has enough MP to play this card.
    #[must_use]
    pub fn can_play(&self, player: &Player) -> bool {
        player.mp >= self.mp_cost
    }
}
