//! Battle configuration.
//!
//! `BattleConfig` carries every tunable number of a battle: starting
//! vitals, the enemy, hand capacity and per-turn MP recovery. `Default`
//! gives the standard Forest Goblin encounter.
//!
//! Configs can be built in code with the `with_*` builders or loaded from
//! JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`BattleConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Maximum number of cards in hand.
    pub max_hand_size: usize,

    /// Player starting and maximum HP.
    pub player_max_hp: i64,

    /// Player starting and maximum MP.
    pub player_max_mp: i64,

    /// Attack value the player resets to every turn.
    pub player_base_atk: i64,

    /// Enemy display name.
    pub enemy_name: String,

    /// Enemy starting and maximum HP.
    pub enemy_max_hp: i64,

    /// Fixed enemy attack.
    pub enemy_atk: i64,

    /// MP restored at each turn transition.
    pub mp_recovery_per_turn: i64,

    /// Copies of each basic card in the starting deck.
    pub starting_copies: usize,

    /// Number of log lines included in a snapshot.
    pub log_tail: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_hand_size: 5,
            player_max_hp: 100,
            player_max_mp: 15,
            player_base_atk: 1,
            enemy_name: "Forest Goblin".to_string(),
            enemy_max_hp: 80,
            enemy_atk: 12,
            mp_recovery_per_turn: 3,
            starting_copies: 3,
            log_tail: 8,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hand_size == 0 {
            return Err(ConfigError::NotPositive { field: "max_hand_size", value: 0 });
        }
        positive("player_max_hp", self.player_max_hp)?;
        positive("enemy_max_hp", self.enemy_max_hp)?;
        non_negative("player_max_mp", self.player_max_mp)?;
        non_negative("player_base_atk", self.player_base_atk)?;
        non_negative("enemy_atk", self.enemy_atk)?;
        non_negative("mp_recovery_per_turn", self.mp_recovery_per_turn)?;
        Ok(())
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set player HP and MP maximums.
    #[must_use]
    pub fn with_player(mut self, max_hp: i64, max_mp: i64) -> Self {
        self.player_max_hp = max_hp;
        self.player_max_mp = max_mp;
        self
    }

    /// Set the player's base attack.
    #[must_use]
    pub fn with_player_base_atk(mut self, atk: i64) -> Self {
        self.player_base_atk = atk;
        self
    }

    /// Set the enemy.
    #[must_use]
    pub fn with_enemy(mut self, name: impl Into<String>, max_hp: i64, atk: i64) -> Self {
        self.enemy_name = name.into();
        self.enemy_max_hp = max_hp;
        self.enemy_atk = atk;
        self
    }

    /// Set MP recovered per turn.
    #[must_use]
    pub fn with_mp_recovery(mut self, amount: i64) -> Self {
        self.mp_recovery_per_turn = amount;
        self
    }

    /// Set copies per basic card in the starting deck.
    #[must_use]
    pub fn with_starting_copies(mut self, copies: usize) -> Self {
        self.starting_copies = copies;
        self
    }

    /// Set the snapshot log tail length.
    #[must_use]
    pub fn with_log_tail(mut self, lines: usize) -> Self {
        self.log_tail = lines;
        self
    }
}

fn positive(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
