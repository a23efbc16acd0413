//! Effect system shared by cards and compass events.
//!
//! ## Key Types
//!
//! - `Effect`: Atomic battle mutation (plain data)
//! - `EffectResolver`: Applies an `Effect` to a `BattleState`

pub mod effect;
pub mod resolver;

pub use effect::Effect;
pub use resolver::EffectResolver;
