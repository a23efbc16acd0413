//! Battle engine: the turn/phase state machine.
//!
//! `Battle` owns one [`BattleState`] and is the only thing that moves it
//! between phases. The presentation layer talks to it through three
//! commands and one query:
//!
//! - `play_card(index)`: card phase only
//! - `enter_settlement()`: attack, enemy retaliation, next turn
//! - `reset()`: start over
//! - `snapshot()`: read-only view
//!
//! ## Settlement order
//!
//! 1. Player attack: `atk - 1` damage (doubled first if pending)
//! 2. End check
//! 3. Enemy attack, end check
//! 4. Turn advance; a pending skip runs settlement again immediately

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{starting_deck, Card, CardId, CardRegistry};
use crate::core::{
    percentage, BattleConfig, BattleError, BattleSnapshot, BattleState, ConfigError, GameRng, Phase,
};
use crate::effects::EffectResolver;
use crate::triggers::{EventRegistry, EventStatistics};

/// How a battle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// Summary numbers for an end-of-battle screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleStatistics {
    pub turns_elapsed: u32,
    pub cards_played: u32,
    pub compass_position: usize,
    pub player_hp_percentage: f64,
    pub enemy_hp_percentage: f64,
    pub outcome: BattleOutcome,
}

/// A running battle.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    state: BattleState,
    events: EventRegistry,
    library: CardRegistry,
}

/// Builder for creating a `Battle`.
#[derive(Default)]
pub struct BattleBuilder {
    config: BattleConfig,
    rng: Option<GameRng>,
    deck: Option<Vec<Card>>,
    events: Option<EventRegistry>,
}

impl BattleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the battle RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    /// Use an existing RNG.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Use `deck` as the draw pile, in this exact order.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Replace the compass event tables.
    pub fn events(mut self, events: EventRegistry) -> Self {
        self.events = Some(events);
        self
    }

    /// Validate the configuration and start the battle.
    pub fn build(self) -> Result<Battle, ConfigError> {
        self.config.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Battle {
        let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);
        let deck = match self.deck {
            Some(deck) => deck,
            None => starting_deck(self.config.starting_copies, &mut rng),
        };

        let mut battle = Battle {
            state: BattleState::new(&self.config, deck, rng),
            config: self.config,
            events: self.events.unwrap_or_default(),
            library: CardRegistry::standard(),
        };
        battle.start();
        battle
    }
}

impl Battle {
    /// Default battle with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        BattleBuilder::new().seed(seed).assemble()
    }

    pub fn builder() -> BattleBuilder {
        BattleBuilder::new()
    }

    fn start(&mut self) {
        let state = &mut self.state;
        state.phase = Phase::CardPhase;
        state.log("=== Battle start ===");
        let intro = format!(
            "Facing {} (HP {}/ATK {})",
            state.enemy.name, state.enemy.hp, state.enemy.atk
        );
        state.log(intro);

        state.fill_hand();
        let held = state.zones.hand_count();
        let noun = if held == 1 { "card" } else { "cards" };
        state.log(format!("Opening hand: {held} {noun}"));
        state.log(format!("Turn {} begins - card phase", state.turn));

        info!(enemy = %state.enemy.name, seed = state.rng.seed(), "battle started");
    }

    // === Commands ===

    /// Play the hand card at `index`.
    ///
    /// Spends MP, applies the card, advances the compass, resolves the
    /// landed slot and then moves the card to the discard pile.
    /// Rejections change nothing.
    pub fn play_card(&mut self, index: usize) -> Result<String, BattleError> {
        let result = self.try_play_card(index);
        if let Err(err) = &result {
            debug!(index, %err, "card play rejected");
        }
        result
    }

    fn try_play_card(&mut self, index: usize) -> Result<String, BattleError> {
        let state = &mut self.state;
        if state.phase != Phase::CardPhase || state.battle_ended {
            return Err(BattleError::WrongPhase { action: "play a card" });
        }
        if state.pending.skip_next_turn {
            return Err(BattleError::TurnSkipped);
        }

        let hand_size = state.zones.hand_count();
        let card = state
            .zones
            .hand()
            .get(index)
            .ok_or(BattleError::InvalidIndex { index, hand_size })?;
        if !card.can_play(&state.player) {
            return Err(BattleError::InsufficientResource {
                needed: card.mp_cost,
                available: state.player.mp,
            });
        }

        let card = state
            .zones
            .begin_play(index)
            .cloned()
            .ok_or(BattleError::InvalidIndex { index, hand_size })?;
        state.player.consume_mp(card.mp_cost);

        // The card stays in hand until its effect and the landed event resolve.
        EffectResolver::apply(state, &card.effect, &card.name);
        let category = state.compass.advance(card.compass_points);
        self.events.trigger(category, state);
        state.zones.finish_play();

        let message = format!("Played {}", card.name);
        state.cards_played += 1;
        state.log(message.clone());

        self.check_battle_end();
        Ok(message)
    }

    /// Run settlement for the current turn.
    ///
    /// When the next turn is skipped, its settlement runs as part of this
    /// call, so the caller never sees a card phase it cannot use.
    pub fn enter_settlement(&mut self) -> Result<String, BattleError> {
        if self.state.phase != Phase::CardPhase || self.state.battle_ended {
            debug!("settlement rejected");
            return Err(BattleError::WrongPhase { action: "enter settlement" });
        }

        loop {
            self.state.phase = Phase::SettlementPhase;
            self.state.log("--- Settlement phase ---");

            self.player_attack();
            if self.check_battle_end() {
                break;
            }

            self.enemy_turn();
            if self.state.battle_ended {
                break;
            }

            if !self.next_turn() {
                break;
            }
        }

        Ok("Settlement complete".to_string())
    }

    /// Start a new battle against a fresh enemy.
    ///
    /// Every card of the previous battle, including injected negative
    /// cards, is shuffled back into the deck.
    pub fn reset(&mut self) -> Result<String, BattleError> {
        let mut state = BattleState::new(&self.config, Vec::new(), self.state.rng.clone());
        std::mem::swap(&mut state.zones, &mut self.state.zones);
        state.zones.reset_for_new_battle(&mut state.rng);
        self.state = state;

        self.start();
        Ok("Battle reset".to_string())
    }

    // === Settlement steps ===

    fn player_attack(&mut self) {
        let state = &mut self.state;
        if !state.enemy.is_alive() {
            return;
        }

        let mut total = state.player.atk;
        if state.pending.take_double_attack() {
            let doubled = total * 2;
            state.log(format!("Double attack! Damage {total} -> {doubled}"));
            total = doubled;
        }

        // The first point of attack is the unarmed floor and deals nothing.
        if total > 1 {
            let dealt = state.enemy.take_damage(total - 1);
            let name = state.enemy.name.clone();
            state.log(format!("Your attack deals {dealt} damage to {name}"));
        } else {
            state.log("Your attack is too weak to deal damage");
        }
    }

    fn enemy_turn(&mut self) {
        let state = &mut self.state;
        if !state.enemy.is_alive() {
            return;
        }

        let lost = state.player.take_damage(state.enemy.attack_damage());
        let name = state.enemy.name.clone();
        state.log(format!("{name} attacks for {lost} damage"));

        self.check_battle_end();
    }

    /// Advance to the next turn. Returns true when that turn is skipped
    /// and must go straight to settlement.
    fn next_turn(&mut self) -> bool {
        let state = &mut self.state;
        state.turn += 1;
        state.phase = Phase::CardPhase;
        state.player.reset_for_new_turn();

        let restored = state.player.restore_mp(self.config.mp_recovery_per_turn);
        if restored > 0 {
            state.log(format!("Recovered {restored} MP"));
        }

        if state.pending.take_skip_turn() {
            state.log(format!("Turn {}: card phase skipped", state.turn));
            return true;
        }

        let drawn = state.fill_hand();
        if drawn > 0 {
            let noun = if drawn == 1 { "card" } else { "cards" };
            state.log(format!("Drew {drawn} {noun}"));
        }
        state.log(format!("Turn {} begins - card phase", state.turn));
        false
    }

    /// Mark the battle over if either side is down. Player death is
    /// checked first.
    fn check_battle_end(&mut self) -> bool {
        let state = &mut self.state;
        if state.battle_ended {
            return true;
        }

        if !state.player.is_alive() {
            state.battle_ended = true;
            state.victory = false;
            state.log("=== Defeat ===");
            state.log("You were defeated...");
        } else if !state.enemy.is_alive() {
            state.battle_ended = true;
            state.victory = true;
            state.log("=== Victory ===");
            let name = state.enemy.name.clone();
            state.log(format!("You defeated {name}!"));
        } else {
            return false;
        }

        info!(turn = state.turn, victory = state.victory, "battle ended");
        true
    }

    // === Queries ===

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(&self.state, self.config.log_tail)
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Direct state access for scenario setup and tooling.
    pub fn state_mut(&mut self) -> &mut BattleState {
        &mut self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Look up a card definition by id.
    #[must_use]
    pub fn card_definition(&self, id: CardId) -> Option<&Card> {
        self.library.get(id)
    }

    #[must_use]
    pub fn event_statistics(&self) -> EventStatistics {
        self.events.statistics()
    }

    #[must_use]
    pub fn outcome(&self) -> BattleOutcome {
        match (self.state.battle_ended, self.state.victory) {
            (false, _) => BattleOutcome::Ongoing,
            (true, true) => BattleOutcome::Victory,
            (true, false) => BattleOutcome::Defeat,
        }
    }

    #[must_use]
    pub fn statistics(&self) -> BattleStatistics {
        let state = &self.state;
        BattleStatistics {
            turns_elapsed: state.turn,
            cards_played: state.cards_played,
            compass_position: state.compass.position(),
            player_hp_percentage: percentage(state.player.hp, state.player.max_hp),
            enemy_hp_percentage: percentage(state.enemy.hp, state.enemy.max_hp),
            outcome: self.outcome(),
        }
    }
}
