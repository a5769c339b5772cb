//! Game notifications.
//!
//! Events are fired synchronously at fixed points in a move: after the
//! face-up card changes, after the turn pointer advances, when a player
//! finishes or a round/game ends. They are purely observational.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Something observers may want to know about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round was dealt. `round` counts rounds already completed.
    RoundStarted { round: u32, roster: Vec<PlayerId> },
    /// A new card tops the discard pile.
    FaceUpChanged(Card),
    /// It is now this player's turn.
    TurnChanged(PlayerId),
    /// A player emptied their hand. `place` is 1-based within the round.
    PlayerFinished { player: PlayerId, place: usize },
    /// The round ended with `eliminated` still holding cards.
    RoundEnded { round: u32, eliminated: PlayerId },
    /// Final ranking, winner first.
    GameEnded(Vec<PlayerId>),
}

impl GameEvent {
    /// The player this event is about, if it names exactly one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnChanged(player) => Some(*player),
            GameEvent::PlayerFinished { player, .. } => Some(*player),
            GameEvent::RoundEnded { eliminated, .. } => Some(*eliminated),
            GameEvent::RoundStarted { .. } | GameEvent::FaceUpChanged(_) | GameEvent::GameEnded(_) => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameEnded(_))
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoundStarted { round, roster } => {
                write!(f, "round {} started with {} players", round + 1, roster.len())
            }
            GameEvent::FaceUpChanged(card) => write!(f, "face up: {}", card),
            GameEvent::TurnChanged(player) => write!(f, "{} to move", player),
            GameEvent::PlayerFinished { player, place } => write!(f, "{} finished #{}", player, place),
            GameEvent::RoundEnded { round, eliminated } => {
                write!(f, "round {} over, {} left holding cards", round, eliminated)
            }
            GameEvent::GameEnded(ranking) => {
                write!(f, "game over:")?;
                for (place, player) in ranking.iter().enumerate() {
                    write!(f, " {}. {}", place + 1, player)?;
                }
                Ok(())
            }
        }
    }
}
