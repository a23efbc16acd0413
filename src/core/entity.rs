//! Combatants: the player and the enemy.
//!
//! Both hold plain `i64` vitals. Every mutator clamps to its bounds and
//! returns the amount that actually changed, so callers can log real
//! numbers rather than requested ones.

use serde::{Deserialize, Serialize};

use super::config::BattleConfig;

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub max_hp: i64,
    pub hp: i64,
    pub max_mp: i64,
    pub mp: i64,
    /// Attack value restored at the start of every turn.
    pub base_atk: i64,
    /// Attack accumulated during the current turn.
    pub atk: i64,
    /// Absorbs damage before HP. Cleared every turn.
    pub armor: i64,
}

impl Player {
    /// Create a player at full HP and MP.
    #[must_use]
    pub fn new(max_hp: i64, max_mp: i64, base_atk: i64) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            max_mp,
            mp: max_mp,
            base_atk,
            atk: base_atk,
            armor: 0,
        }
    }

    /// Create a player from the battle configuration.
    #[must_use]
    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(config.player_max_hp, config.player_max_mp, config.player_base_atk)
    }

    /// Take damage, armor first. Returns HP actually lost.
    ///
    /// Armor is consumed by the incoming amount even when it fully
    /// absorbs the hit.
    pub fn take_damage(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }

        let reduced = (amount - self.armor).max(0);
        self.armor -= self.armor.min(amount);

        let lost = reduced.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restore HP up to the maximum. Returns HP actually healed.
    pub fn heal(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Restore MP up to the maximum. Returns MP actually restored.
    pub fn restore_mp(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }
        let restored = amount.min(self.max_mp - self.mp);
        self.mp += restored;
        restored
    }

    /// Spend MP. Fails without change if there is not enough.
    pub fn consume_mp(&mut self, amount: i64) -> bool {
        if amount <= 0 {
            return true;
        }
        if self.mp >= amount {
            self.mp -= amount;
            true
        } else {
            false
        }
    }

    /// Drain MP down to zero at most. Returns MP actually lost.
    pub fn lose_mp(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }
        let lost = amount.min(self.mp);
        self.mp -= lost;
        lost
    }

    /// Add armor. No cap.
    pub fn add_armor(&mut self, amount: i64) {
        if amount > 0 {
            self.armor += amount;
        }
    }

    /// Turn transition: attack back to base, armor cleared.
    pub fn reset_for_new_turn(&mut self) {
        self.atk = self.base_atk;
        self.armor = 0;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Status view with derived percentages.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            hp: self.hp,
            max_hp: self.max_hp,
            hp_percentage: percentage(self.hp, self.max_hp),
            mp: self.mp,
            max_mp: self.max_mp,
            mp_percentage: percentage(self.mp, self.max_mp),
            atk: self.atk,
            base_atk: self.base_atk,
            armor: self.armor,
            alive: self.is_alive(),
        }
    }
}

/// The opposing creature. Attack is a fixed stat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_hp: i64,
    pub hp: i64,
    pub atk: i64,
}

impl Enemy {
    /// Create an enemy at full HP.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i64, atk: i64) -> Self {
        Self {
            name: name.into(),
            max_hp,
            hp: max_hp,
            atk,
        }
    }

    /// Create the enemy described by the battle configuration.
    #[must_use]
    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(config.enemy_name.clone(), config.enemy_max_hp, config.enemy_atk)
    }

    /// Take damage. Enemies have no armor. Returns HP actually lost.
    pub fn take_damage(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restore HP up to the maximum. Returns HP actually healed.
    pub fn heal(&mut self, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Damage dealt on the enemy's turn.
    #[must_use]
    pub fn attack_damage(&self) -> i64 {
        self.atk
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Status view with derived percentage.
    #[must_use]
    pub fn status(&self) -> EnemyStatus {
        EnemyStatus {
            name: self.name.clone(),
            hp: self.hp,
            max_hp: self.max_hp,
            hp_percentage: percentage(self.hp, self.max_hp),
            atk: self.atk,
            alive: self.is_alive(),
        }
    }
}

/// Read-only player view for presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub hp: i64,
    pub max_hp: i64,
    pub hp_percentage: f64,
    pub mp: i64,
    pub max_mp: i64,
    pub mp_percentage: f64,
    pub atk: i64,
    pub base_atk: i64,
    pub armor: i64,
    pub alive: bool,
}

/// Read-only enemy view for presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyStatus {
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
    pub hp_percentage: f64,
    pub atk: i64,
    pub alive: bool,
}

/// `current / maximum` as a percentage; 0 when the maximum is not positive.
#[must_use]
pub fn percentage(current: i64, maximum: i64) -> f64 {
    if maximum <= 0 {
        return 0.0;
    }
    current as f64 / maximum as f64 * 100.0
}
