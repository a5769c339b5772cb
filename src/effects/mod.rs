//! Effect system for card-triggered behavior.
//!
//! - `Effect`: the closed set of effects (Reverse, Jump, Attack, Call)
//! - `EffectBindings`: which rank triggers which effect
//! - `EffectResolver`: applies an accepted play's effect to turn state
//!
//! ## Design Philosophy
//!
//! Effects only touch `TurnState`. Anything interactive (which suit to
//! call) is resolved by a collaborator before the move reaches the engine,
//! so applying an effect never blocks.

mod bindings;
mod effect;
mod resolver;

pub use bindings::{Binding, EffectBindings};
pub use effect::{Effect, EffectFrequency, EffectType};
pub use resolver::{EffectResolver, Resolution, ResolverContext};
