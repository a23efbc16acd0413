//! Card piles for a battle.
//!
//! ## Key Types
//!
//! - `ZoneManager`: Owns the deck, hand and discard pile
//! - `ZoneStatistics`: Pile counts

pub mod manager;

pub use manager::{Hand, ZoneManager, ZoneStatistics};
