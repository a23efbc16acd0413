//! Compass event tables.
//!
//! When the compass lands on a negative or lucky slot, one event is drawn
//! uniformly from the matching table and applied to the battle state.
//!
//! ## Key Types
//!
//! - `CompassEvent`: A named, described effect
//! - `EventKind`: Negative or Lucky catalog
//! - `EventRegistry`: Both tables plus the trigger dispatch

pub mod event;
pub mod registry;

pub use event::{lucky_events, negative_events, CompassEvent, EventKind};
pub use registry::{EventRegistry, EventStatistics};
