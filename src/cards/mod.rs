//! Card system: definitions and the card library.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardCategory`: Attack / Defense / Heal / Negative
//! - `Card`: Immutable card template carrying its `Effect`
//! - `CardRegistry`: Card definition lookup
//!
//! `registry::starting_deck` builds the shuffled opening deck.

pub mod definition;
pub mod registry;

pub use definition::{Card, CardCategory, CardId};
pub use registry::{basic_cards, negative_cards, starting_deck, CardRegistry};
