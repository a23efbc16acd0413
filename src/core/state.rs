//! Battle state: the single unit of mutation.
//!
//! ## BattleState
//!
//! Everything one battle owns:
//! - Player and enemy
//! - Card piles and the compass
//! - Pending sticky flags
//! - Turn counter, phase and outcome
//! - Battle log and RNG
//!
//! Every effect takes `&mut BattleState`; nothing in the engine touches
//! global state.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::BattleConfig;
use super::entity::{Enemy, Player};
use super::error::{IntegrityError, IntegrityViolation};
use super::rng::GameRng;
use crate::compass::Compass;
use crate::zones::ZoneManager;

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The player may play cards.
    #[default]
    CardPhase,
    /// Attack, retaliation and turn advance are running.
    SettlementPhase,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::CardPhase => f.write_str("CARD_PHASE"),
            Phase::SettlementPhase => f.write_str("SETTLEMENT_PHASE"),
        }
    }
}

/// Effects waiting for a later point in the turn.
///
/// `skip_next_turn` is consumed by the turn transition;
/// `double_next_attack` by the next attack settlement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEffects {
    pub skip_next_turn: bool,
    pub double_next_attack: bool,
}

impl PendingEffects {
    /// Clear and return the skip flag.
    pub fn take_skip_turn(&mut self) -> bool {
        std::mem::take(&mut self.skip_next_turn)
    }

    /// Clear and return the double-attack flag.
    pub fn take_double_attack(&mut self) -> bool {
        std::mem::take(&mut self.double_next_attack)
    }
}

/// Append-only battle log.
///
/// Backed by a persistent vector so snapshots can share it cheaply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vector<String>,
}

impl BattleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Also emitted as a `tracing` debug event.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(target: "compass_duel::battle", "{}", message);
        self.entries.push_back(message);
    }

    /// The last `count` lines, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Complete mutable battle state.
#[derive(Clone, Debug)]
pub struct BattleState {
    pub player: Player,
    pub enemy: Enemy,
    pub zones: ZoneManager,
    pub compass: Compass,
    pub pending: PendingEffects,
    pub log: BattleLog,

    /// Turn number (starts at 1).
    pub turn: u32,
    pub phase: Phase,
    pub battle_ended: bool,
    pub victory: bool,

    /// Cards successfully played this battle.
    pub cards_played: u32,

    pub rng: GameRng,
}

impl BattleState {
    /// Fresh state for `config`, using `deck` in the given order.
    #[must_use]
    pub fn new(config: &BattleConfig, deck: Vec<crate::cards::Card>, rng: GameRng) -> Self {
        Self {
            player: Player::from_config(config),
            enemy: Enemy::from_config(config),
            zones: ZoneManager::new(deck, config.max_hand_size),
            compass: Compass::new(),
            pending: PendingEffects::default(),
            log: BattleLog::new(),
            turn: 1,
            phase: Phase::CardPhase,
            battle_ended: false,
            victory: false,
            cards_played: 0,
            rng,
        }
    }

    /// Append a line to the battle log.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    /// Draw up to `count` cards using the battle RNG.
    pub fn draw_cards(&mut self, count: usize) -> usize {
        self.zones.draw_cards(count, &mut self.rng)
    }

    /// Fill the hand using the battle RNG.
    pub fn fill_hand(&mut self) -> usize {
        self.zones.fill_hand(&mut self.rng)
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        let mut violations = Vec::new();
        let p = &self.player;

        if p.hp < 0 || p.hp > p.max_hp {
            violations.push(IntegrityViolation::PlayerHp { hp: p.hp, max_hp: p.max_hp });
        }
        if p.mp < 0 || p.mp > p.max_mp {
            violations.push(IntegrityViolation::PlayerMp { mp: p.mp, max_mp: p.max_mp });
        }
        if p.armor < 0 {
            violations.push(IntegrityViolation::NegativeArmor(p.armor));
        }
        if p.atk < 0 {
            violations.push(IntegrityViolation::NegativeAttack(p.atk));
        }

        let e = &self.enemy;
        if e.hp < 0 || e.hp > e.max_hp {
            violations.push(IntegrityViolation::EnemyHp { hp: e.hp, max_hp: e.max_hp });
        }

        let hand = self.zones.hand_count();
        let capacity = self.zones.max_hand_size();
        if hand > capacity {
            violations.push(IntegrityViolation::HandOverflow { size: hand, capacity });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(IntegrityError { violations })
        }
    }
}
