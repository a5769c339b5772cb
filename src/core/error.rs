//! Engine error taxonomy.
//!
//! Only structural failures are errors. A rule violation is a normal
//! outcome reported through [`MoveOutcome`](super::action::MoveOutcome).

use thiserror::Error;

use super::entity::CardId;
use super::player::PlayerId;
use crate::cards::Rank;

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card was placed on a pile it (or another pile) already holds.
    #[error("{0} already occupies a pile")]
    DuplicateCard(CardId),

    /// The draw pile is empty and reclaiming the discard pile freed nothing.
    #[error("deck exhausted: no drawable cards remain")]
    DeckExhausted,

    /// A rank-guaranteed deal asked for a rank the draw pile no longer has.
    #[error("no card of rank {0} left in the draw pile")]
    RankUnavailable(Rank),

    /// The move source offered a card the player does not hold.
    #[error("{player} does not hold {card}")]
    NotInHand { player: PlayerId, card: CardId },

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// No round is being played (not started yet, or the game is over).
    #[error("no round in progress")]
    NotInProgress,

    #[error("game already started")]
    AlreadyStarted,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Structural invariant violations that end the current round.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::DuplicateCard(_) | GameError::DeckExhausted | GameError::RankUnavailable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        assert!(GameError::DuplicateCard(CardId(1)).is_fatal());
        assert!(GameError::DeckExhausted.is_fatal());
        assert!(GameError::RankUnavailable(Rank::Seven).is_fatal());
        assert!(!GameError::NotInHand {
            player: PlayerId::new(0),
            card: CardId(1)
        }
        .is_fatal());
        assert!(!GameError::NotInProgress.is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = GameError::NotInHand {
            player: PlayerId::new(1),
            card: CardId(12),
        };
        assert_eq!(err.to_string(), "Player 1 does not hold Card#12");
        assert_eq!(
            GameError::RankUnavailable(Rank::Jack).to_string(),
            "no card of rank Jack left in the draw pile"
        );
    }
}
