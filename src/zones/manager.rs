//! Zone manager for the deck, hand and discard pile.
//!
//! The `ZoneManager` owns every card copy in a battle and moves them
//! between three piles:
//! - the deck, an ordered draw queue (front = next draw)
//! - the hand, bounded by `max_hand_size`
//! - the discard pile, which is shuffled back into the deck on demand

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Inline storage for the usual five-card hand.
pub type Hand = SmallVec<[Card; 5]>;

/// Pile sizes, for display and bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStatistics {
    pub deck_count: usize,
    pub hand_count: usize,
    pub discard_count: usize,
    pub total_cards: usize,
    pub hand_full: bool,
}

/// Deck, hand and discard for one battle.
///
/// ## Usage
///
/// ```
/// use compass_duel::cards::basic_cards;
/// use compass_duel::core::GameRng;
/// use compass_duel::zones::ZoneManager;
///
/// let mut rng = GameRng::new(1);
/// let mut zones = ZoneManager::new(basic_cards(), 5);
///
/// assert_eq!(zones.fill_hand(&mut rng), 5);
/// assert_eq!(zones.deck_count(), 2);
/// assert!(zones.is_hand_full());
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    deck: VecDeque<Card>,
    hand: Hand,
    discard: Vec<Card>,
    max_hand_size: usize,
    /// Hand slot of the card currently being played.
    in_play: Option<usize>,
}

impl ZoneManager {
    /// Create a manager whose deck is `deck` in the given order.
    #[must_use]
    pub fn new(deck: Vec<Card>, max_hand_size: usize) -> Self {
        Self {
            deck: deck.into(),
            hand: Hand::new(),
            discard: Vec::new(),
            max_hand_size,
            in_play: None,
        }
    }

    /// Draw up to `count` cards into the hand.
    ///
    /// Stops early when the hand is full. An empty deck is refilled from
    /// the discard pile; when both are empty drawing stops.
    /// Returns the number of cards drawn.
    pub fn draw_cards(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;

        for _ in 0..count {
            if self.is_hand_full() {
                break;
            }
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
            }
            match self.deck.pop_front() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }

        drawn
    }

    /// Draw until the hand is full.
    pub fn fill_hand(&mut self, rng: &mut GameRng) -> usize {
        let needed = self.max_hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return 0;
        }
        self.draw_cards(needed, rng)
    }

    /// Take a card out of the hand without discarding it.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        self.in_play = match self.in_play {
            Some(played) if played == index => None,
            Some(played) if played > index => Some(played - 1),
            other => other,
        };
        Some(self.hand.remove(index))
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Move a hand card to the discard pile.
    ///
    /// Returns the discarded card, or `None` if `index` is out of range.
    pub fn remove_card_from_hand(&mut self, index: usize) -> Option<&Card> {
        let card = self.take_from_hand(index)?;
        self.discard.push(card);
        self.discard.last()
    }

    /// Put an injected negative card on top of the deck.
    pub fn add_negative_card(&mut self, card: Card) {
        self.deck.push_front(card);
    }

    /// Mark the hand card at `index` as being played.
    ///
    /// The card stays in the hand until `finish_play`; its slot follows
    /// any hand removals in between.
    pub fn begin_play(&mut self, index: usize) -> Option<&Card> {
        let card = self.hand.get(index)?;
        self.in_play = Some(index);
        Some(card)
    }

    /// Move the card being played to the discard pile.
    ///
    /// Returns false when it already left the hand.
    pub fn finish_play(&mut self) -> bool {
        match self.in_play.take() {
            Some(index) => self.remove_card_from_hand(index).is_some(),
            None => false,
        }
    }

    /// Gather every card back into a freshly shuffled deck and deal a
    /// new hand.
    pub fn reset_for_new_battle(&mut self, rng: &mut GameRng) {
        let mut pool: Vec<Card> = self.deck.drain(..).collect();
        pool.extend(self.hand.drain(..));
        pool.append(&mut self.discard);
        self.in_play = None;
        rng.shuffle(&mut pool);
        self.deck = pool.into();

        self.fill_hand(rng);
    }

    fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        let mut pile = std::mem::take(&mut self.discard);
        rng.shuffle(&mut pile);
        debug!(cards = pile.len(), "reshuffled discard pile into deck");
        self.deck = pile.into();
    }

    // === Queries ===

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Deck cards in draw order.
    pub fn deck(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck.iter()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    #[must_use]
    pub fn is_hand_full(&self) -> bool {
        self.hand.len() >= self.max_hand_size
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    #[must_use]
    pub fn statistics(&self) -> ZoneStatistics {
        ZoneStatistics {
            deck_count: self.deck_count(),
            hand_count: self.hand_count(),
            discard_count: self.discard_count(),
            total_cards: self.total_cards(),
            hand_full: self.is_hand_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{basic_cards, negative_cards};

    fn cards(n: usize) -> Vec<Card> {
        basic_cards().into_iter().cycle().take(n).collect()
    }

    #[test]
    fn test_draw_in_order() {
        let mut rng = GameRng::new(1);
        let deck = basic_cards();
        let mut zones = ZoneManager::new(deck.clone(), 5);

        assert_eq!(zones.draw_cards(2, &mut rng), 2);
        assert_eq!(zones.hand()[0], deck[0]);
        assert_eq!(zones.hand()[1], deck[1]);
        assert_eq!(zones.deck_count(), 5);
    }

    #[test]
    fn test_draw_stops_at_capacity() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(10), 5);

        assert_eq!(zones.draw_cards(8, &mut rng), 5);
        assert_eq!(zones.hand_count(), 5);
        assert_eq!(zones.fill_hand(&mut rng), 0);
        assert_eq!(zones.deck_count(), 5);
    }

    #[test]
    fn test_reshuffle_when_deck_empty() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(Vec::new(), 5);
        for card in cards(3) {
            zones.discard(card);
        }

        assert_eq!(zones.draw_cards(1, &mut rng), 1);
        assert_eq!(zones.hand_count(), 1);
        assert_eq!(zones.deck_count(), 2);
        assert_eq!(zones.discard_count(), 0);
    }

    #[test]
    fn test_draw_stops_when_everything_empty() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(2), 5);

        assert_eq!(zones.fill_hand(&mut rng), 2);
        assert_eq!(zones.draw_cards(3, &mut rng), 0);
        assert_eq!(zones.total_cards(), 2);
    }

    #[test]
    fn test_remove_card_from_hand() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(5), 5);
        zones.fill_hand(&mut rng);
        let second = zones.hand()[1].clone();

        let removed = zones.remove_card_from_hand(1).cloned();

        assert_eq!(removed, Some(second.clone()));
        assert_eq!(zones.hand_count(), 4);
        assert_eq!(zones.discard_pile(), &[second]);

        assert!(zones.remove_card_from_hand(9).is_none());
        assert_eq!(zones.hand_count(), 4);
        assert_eq!(zones.discard_count(), 1);
    }

    #[test]
    fn test_negative_card_goes_on_top() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(4), 5);
        let curse = negative_cards().remove(0);

        zones.add_negative_card(curse.clone());
        zones.draw_cards(1, &mut rng);

        assert_eq!(zones.hand()[0], curse);
        assert_eq!(zones.total_cards(), 5);
    }

    #[test]
    fn test_play_slot_follows_removals() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(7), 5);
        zones.fill_hand(&mut rng);
        let played = zones.hand()[3].clone();

        assert_eq!(zones.begin_play(3), Some(&played));
        zones.remove_card_from_hand(1);
        zones.draw_cards(1, &mut rng);

        assert!(zones.finish_play());
        assert_eq!(zones.discard_pile().last(), Some(&played));
        assert_eq!(zones.hand_count(), 4);
        assert_eq!(zones.total_cards(), 7);
    }

    #[test]
    fn test_play_card_removed_early() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(5), 5);
        zones.fill_hand(&mut rng);

        zones.begin_play(2);
        zones.remove_card_from_hand(2);

        assert!(!zones.finish_play());
        assert_eq!(zones.discard_count(), 1);
        assert_eq!(zones.hand_count(), 4);
        assert!(zones.begin_play(9).is_none());
        assert!(!zones.finish_play());
    }

    #[test]
    fn test_reset_for_new_battle_keeps_pool() {
        let mut rng = GameRng::new(9);
        let mut zones = ZoneManager::new(cards(21), 5);
        zones.fill_hand(&mut rng);
        zones.remove_card_from_hand(0);
        zones.remove_card_from_hand(0);
        zones.add_negative_card(negative_cards().remove(1));

        zones.reset_for_new_battle(&mut rng);

        assert_eq!(zones.total_cards(), 22);
        assert_eq!(zones.hand_count(), 5);
        assert_eq!(zones.discard_count(), 0);
        assert_eq!(zones.deck_count(), 17);
    }

    #[test]
    fn test_statistics() {
        let mut rng = GameRng::new(1);
        let mut zones = ZoneManager::new(cards(8), 5);
        zones.fill_hand(&mut rng);
        zones.remove_card_from_hand(0);

        let stats = zones.statistics();
        assert_eq!(stats.deck_count, 3);
        assert_eq!(stats.hand_count, 4);
        assert_eq!(stats.discard_count, 1);
        assert_eq!(stats.total_cards, 8);
        assert!(!stats.hand_full);
    }
}
