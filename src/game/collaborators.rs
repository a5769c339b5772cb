//! Interfaces to the outside world.
//!
//! The engine never prompts anyone. A `MoveSource` picks the current
//! player's move from a `TurnView`, and a `SuitChooser` answers the suit
//! question for a Call before the move is submitted.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{CardId, Move, PlayerId};

/// What the current player can see when choosing a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub player: PlayerId,
    pub hand: Vec<Card>,
    pub face_up: Card,
    pub required_suit: Option<Suit>,
    pub pending_attack: u32,
    /// Cards in `hand` the engine would accept right now.
    pub playable: Vec<CardId>,
}

impl TurnView {
    /// Play the first acceptable card, or draw.
    #[must_use]
    pub fn first_playable(&self) -> Move {
        self.playable.first().map_or(Move::Draw, |&card| Move::play(card))
    }

    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.playable.is_empty()
    }
}

/// Chooses the current player's move.
pub trait MoveSource {
    fn choose_move(&mut self, view: &TurnView) -> Move;
}

impl<F> MoveSource for F
where
    F: FnMut(&TurnView) -> Move,
{
    fn choose_move(&mut self, view: &TurnView) -> Move {
        self(view)
    }
}

/// Picks the suit for a Call. `None` keeps `default`, the played card's suit.
pub trait SuitChooser {
    fn choose_suit(&mut self, default: Suit) -> Option<Suit>;
}

impl<F> SuitChooser for F
where
    F: FnMut(Suit) -> Option<Suit>,
{
    fn choose_suit(&mut self, default: Suit) -> Option<Suit> {
        self(default)
    }
}

/// Always keeps the played card's suit.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepSuit;

impl SuitChooser for KeepSuit {
    fn choose_suit(&mut self, _default: Suit) -> Option<Suit> {
        None
    }
}
