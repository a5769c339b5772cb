//! Moves and their outcomes.
//!
//! A move is what the move source submits for the current player:
//! - `Move::Draw`: take cards instead of playing
//! - `Move::Play`: play a card from hand, with an optional called suit
//!
//! The engine answers with a `MoveOutcome`. Rule violations are outcomes
//! (`Rejected`), not errors, since callers branch on them routinely.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardId;
use super::player::PlayerId;
use crate::cards::Suit;
use crate::effects::Effect;

/// Cards drawn by a single move. Most draws are 1-4 cards.
pub type DrawnCards = SmallVec<[CardId; 4]>;

/// A move submitted for the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Draw instead of playing.
    Draw,
    /// Play a card. `call` is the suit chosen for a Call effect, if any.
    Play { card: CardId, call: Option<Suit> },
}

impl Move {
    /// Play a card without calling a suit.
    #[must_use]
    pub const fn play(card: CardId) -> Self {
        Self::Play { card, call: None }
    }

    /// Play a card and call a suit.
    #[must_use]
    pub const fn play_calling(card: CardId, suit: Suit) -> Self {
        Self::Play {
            card,
            call: Some(suit),
        }
    }

    /// The card this move plays, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Move::Draw => None,
            Move::Play { card, .. } => Some(*card),
        }
    }
}

/// Why a played card was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Penalty {
    /// An attack chain was active and the card was not an attack.
    AttackUnanswered,
    /// The card matched neither the face-up card nor the required suit.
    Mismatch,
}

/// What a submitted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The card was accepted and now tops the discard pile.
    Played {
        card: CardId,
        effect: Option<Effect>,
    },
    /// The player chose to draw. `absorbed` is the attack total it settled.
    Drew { cards: DrawnCards, absorbed: u32 },
    /// The card was refused and the player drew penalty cards.
    Rejected {
        card: CardId,
        penalty: Penalty,
        drawn: DrawnCards,
    },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected { .. })
    }

    /// Cards the player picked up as a result of this move.
    #[must_use]
    pub fn drawn(&self) -> &[CardId] {
        match self {
            MoveOutcome::Played { .. } => &[],
            MoveOutcome::Drew { cards, .. } => cards.as_slice(),
            MoveOutcome::Rejected { drawn, .. } => drawn.as_slice(),
        }
    }
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    pub submitted: Move,

    pub outcome: MoveOutcome,

    /// Completed rounds when the move was made (0 during the first round).
    pub round: u32,

    /// Game-wide sequence number.
    pub sequence: u32,
}
