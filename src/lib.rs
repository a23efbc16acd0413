//! # compass-duel
//!
//! A single-player, turn-based card battle engine.
//!
//! The player fights one enemy. Each turn has a card phase, where cards
//! spend MP and push a 12-slot compass forward, and a settlement phase,
//! where accumulated attack hits the enemy and the enemy hits back.
//! Compass slots fire random negative or lucky events.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: every mutation goes through `Battle`'s
//!    commands on a single `BattleState`.
//!
//! 2. **Seeded randomness**: draws, shuffles and event picks all come from
//!    one `GameRng`, so a seed replays a battle exactly.
//!
//! 3. **Data-driven content**: cards and events are `Effect` values
//!    resolved by one dispatcher.
//!
//! ## Modules
//!
//! - `core`: Entities, state, snapshot, errors, RNG, configuration
//! - `cards`: Card definitions and the card library
//! - `zones`: Deck, hand and discard pile
//! - `compass`: The 12-slot compass track
//! - `effects`: Effect vocabulary and resolver
//! - `triggers`: Compass event tables
//! - `rules`: The battle turn state machine

pub mod core;
pub mod zones;
pub mod cards;
pub mod compass;
pub mod rules;
pub mod effects;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, ConfigError,
    Player, Enemy, PlayerStatus, EnemyStatus,
    BattleError, IntegrityError, IntegrityViolation,
    GameRng,
    BattleSnapshot, HandCardView,
    BattleLog, BattleState, Phase, PendingEffects,
};

pub use crate::zones::{ZoneManager, ZoneStatistics};

pub use crate::cards::{Card, CardCategory, CardId, CardRegistry};

pub use crate::compass::{Compass, CompassCategory};

pub use crate::rules::{Battle, BattleBuilder, BattleOutcome, BattleStatistics};

pub use crate::effects::{Effect, EffectResolver};

pub use crate::triggers::{CompassEvent, EventKind, EventRegistry};
