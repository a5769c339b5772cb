//! Move legality.
//!
//! Legality is checked in precedence order, highest first:
//!
//! 1. **Attack chain active**: only a card bound to an Attack effect may be
//!    played.
//! 2. **No attack chain**: the card is legal if its binding is immune, or
//!    if it matches the required suit when one is set, or otherwise if it
//!    shares suit or rank with the face-up card.
//!
//! Everything here is pure; the game applies the consequences.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Face, Suit};
use crate::core::Penalty;
use crate::effects::EffectBindings;

/// Result of checking one play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Legality {
    Legal,
    /// Refused for the given reason.
    Illegal(Penalty),
}

impl Legality {
    #[must_use]
    pub fn is_legal(self) -> bool {
        matches!(self, Legality::Legal)
    }

    #[must_use]
    pub fn penalty(self) -> Option<Penalty> {
        match self {
            Legality::Legal => None,
            Legality::Illegal(penalty) => Some(penalty),
        }
    }
}

/// The table state a play is checked against.
#[derive(Clone, Copy, Debug)]
pub struct PlayContext<'a> {
    pub face_up: Face,
    pub required_suit: Option<Suit>,
    pub pending_attack: u32,
    pub bindings: &'a EffectBindings,
}

/// Check whether `card` may be played in `context`.
#[must_use]
pub fn check_play(card: &Card, context: &PlayContext<'_>) -> Legality {
    let binding = context.bindings.get(card.rank());

    if context.pending_attack > 0 {
        return if binding.is_some_and(|b| b.effect.is_attack()) {
            Legality::Legal
        } else {
            Legality::Illegal(Penalty::AttackUnanswered)
        };
    }

    let legal = binding.is_some_and(|b| b.immune)
        || match context.required_suit {
            Some(suit) => card.suit() == suit,
            None => card.face().matches(&context.face_up),
        };

    if legal {
        Legality::Legal
    } else {
        Legality::Illegal(Penalty::Mismatch)
    }
}
