//! Compass mechanism: a 12-slot ring advanced by played cards.
//!
//! ## Key Types
//!
//! - `Compass`: Needle position and the advance transition
//! - `CompassCategory`: Normal / Negative / Lucky slot tag
//! - `COMPASS_LAYOUT`: The constant slot layout

pub mod track;

pub use track::{
    Compass, CompassCategory, CompassStatistics, COMPASS_LAYOUT, COMPASS_POSITIONS, LUCKY_POSITION,
};
