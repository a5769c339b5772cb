//! Effect definitions.
//!
//! The four effect kinds are a closed set, so they are a plain enum with a
//! single `apply` dispatched by variant. Each one mutates `TurnState`:
//!
//! | Effect    | Frequency  | Mutation                         |
//! |-----------|------------|----------------------------------|
//! | Reverse   | persistent | flips `direction`                |
//! | Jump      | single     | `step = 2` for the next advance  |
//! | Attack(n) | single     | `pending_attack += n`            |
//! | Call      | single     | `required_suit = chosen suit`    |

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::core::TurnState;

/// How long an effect's consequence is expected to last. Informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectFrequency {
    SingleTurn,
    WholeRound,
    Persistent,
}

/// Broad category of an effect.
///
/// Only `Attack` effects may answer an active attack chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Attack,
    Transformation,
}

/// A card-triggered effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Flip the direction of play.
    Reverse,
    /// Advance `step` seats on the next hand-over instead of one.
    Jump { step: usize },
    /// Add `magnitude` to the pending attack.
    Attack { magnitude: u32 },
    /// Require a suit for the next play.
    Call,
}

impl Effect {
    /// The usual jump: skip one player.
    #[must_use]
    pub const fn jump() -> Self {
        Self::Jump { step: 2 }
    }

    #[must_use]
    pub const fn attack(magnitude: u32) -> Self {
        Self::Attack { magnitude }
    }

    #[must_use]
    pub const fn frequency(&self) -> EffectFrequency {
        match self {
            Effect::Reverse => EffectFrequency::Persistent,
            Effect::Jump { .. } | Effect::Attack { .. } | Effect::Call => EffectFrequency::SingleTurn,
        }
    }

    #[must_use]
    pub const fn effect_type(&self) -> EffectType {
        match self {
            Effect::Attack { .. } => EffectType::Attack,
            Effect::Reverse | Effect::Jump { .. } | Effect::Call => EffectType::Transformation,
        }
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self.effect_type(), EffectType::Attack)
    }

    /// Apply the effect's mutation. `called` is the suit a Call sets.
    pub fn apply(&self, state: &mut TurnState, called: Suit) {
        match *self {
            Effect::Reverse => state.direction = state.direction.flipped(),
            Effect::Jump { step } => state.step = step,
            Effect::Attack { magnitude } => state.pending_attack += magnitude,
            Effect::Call => state.required_suit = Some(called),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Reverse => write!(f, "Reverse"),
            Effect::Jump { step } => write!(f, "Jump({})", step),
            Effect::Attack { magnitude } => write!(f, "Attack({})", magnitude),
            Effect::Call => write!(f, "Call"),
        }
    }
}
