//! Read-only battle snapshot for the presentation layer.
//!
//! A `BattleSnapshot` is a plain serializable copy of everything a UI
//! needs to draw one frame. Taking one never mutates the battle.

use serde::{Deserialize, Serialize};

use super::entity::{EnemyStatus, PlayerStatus};
use super::state::{BattleState, Phase};
use crate::cards::{Card, CardCategory};
use crate::compass::CompassStatistics;

/// One card in hand, as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCardView {
    pub index: usize,
    pub name: String,
    pub category: CardCategory,
    pub mp_cost: i64,
    pub compass_points: i64,
    pub description: String,
    pub is_direct_damage: bool,
    /// Affordable, in the card phase, not skipped and not ended.
    pub playable: bool,
}

impl HandCardView {
    fn new(index: usize, card: &Card, playable: bool) -> Self {
        Self {
            index,
            name: card.name.clone(),
            category: card.category,
            mp_cost: card.mp_cost,
            compass_points: card.compass_points,
            description: card.description.clone(),
            is_direct_damage: card.is_direct_damage,
            playable,
        }
    }
}

/// Complete view of a battle at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub turn: u32,
    pub phase: Phase,
    pub battle_ended: bool,
    pub victory: bool,

    pub player: PlayerStatus,
    pub enemy: EnemyStatus,

    pub hand: Vec<HandCardView>,
    pub deck_count: usize,
    pub discard_count: usize,

    pub compass_position: usize,
    pub compass_visual: Vec<String>,
    pub compass_stats: CompassStatistics,

    pub skip_next_turn: bool,
    pub double_next_attack: bool,

    /// Most recent log lines, oldest first.
    pub battle_log: Vec<String>,

    pub state_valid: bool,
    pub errors: Vec<String>,
}

impl BattleSnapshot {
    /// Capture `state`, keeping the last `log_tail` log lines.
    #[must_use]
    pub fn capture(state: &BattleState, log_tail: usize) -> Self {
        let can_act = state.phase == Phase::CardPhase
            && !state.battle_ended
            && !state.pending.skip_next_turn;

        let hand = state
            .zones
            .hand()
            .iter()
            .enumerate()
            .map(|(index, card)| HandCardView::new(index, card, can_act && card.can_play(&state.player)))
            .collect();

        let errors = match state.validate() {
            Ok(()) => Vec::new(),
            Err(err) => err.violations.iter().map(ToString::to_string).collect(),
        };

        Self {
            turn: state.turn,
            phase: state.phase,
            battle_ended: state.battle_ended,
            victory: state.victory,
            player: state.player.status(),
            enemy: state.enemy.status(),
            hand,
            deck_count: state.zones.deck_count(),
            discard_count: state.zones.discard_count(),
            compass_position: state.compass.position(),
            compass_visual: state.compass.visual(),
            compass_stats: state.compass.statistics(),
            skip_next_turn: state.pending.skip_next_turn,
            double_next_attack: state.pending.double_next_attack,
            battle_log: state.log.recent(log_tail),
            state_valid: errors.is_empty(),
            errors,
        }
    }
}
