//! Core engine types: combatants, state, configuration, RNG, errors.
//!
//! Everything here is independent of the turn rules; `rules::Battle`
//! drives it.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{BattleConfig, ConfigError};
pub use entity::{percentage, Enemy, EnemyStatus, Player, PlayerStatus};
pub use error::{BattleError, IntegrityError, IntegrityViolation};
pub use rng::GameRng;
pub use snapshot::{BattleSnapshot, HandCardView};
pub use state::{BattleLog, BattleState, Phase, PendingEffects};
