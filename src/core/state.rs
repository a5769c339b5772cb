//! Turn state: whose turn it is and what constrains the next play.
//!
//! ## TurnState
//!
//! - `turn`: index into the active roster
//! - `direction`: clockwise (+1) or counter-clockwise (-1)
//! - `step`: seats to advance on the next hand-over (Jump sets 2)
//! - `pivot`: one-shot two-player reversal flag
//! - `required_suit`: suit constraint set by a Call
//! - `pending_attack`: accumulated attack total awaiting resolution
//!
//! Effects mutate this state; the game then calls [`TurnState::advance`].

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Direction of play around the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 for clockwise, -1 for counter-clockwise.
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Mutable per-round turn state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub turn: usize,
    pub direction: Direction,
    pub step: usize,
    pub pivot: bool,
    pub required_suit: Option<Suit>,
    pub pending_attack: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Fresh state: first seat, clockwise, single step, no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            turn: 0,
            direction: Direction::Clockwise,
            step: 1,
            pivot: false,
            required_suit: None,
            pending_attack: 0,
        }
    }

    /// Index of the seat that plays next, without changing anything.
    ///
    /// `turn' = (turn + direction * step) mod n`. With the pivot flag set
    /// (two players, direction just changed) the turn hands over to the
    /// other seat exactly once.
    #[must_use]
    pub fn next_index(&self, roster_len: usize) -> usize {
        if roster_len == 0 {
            return 0;
        }
        if self.pivot {
            return (self.turn + 1) % roster_len;
        }
        let n = roster_len as isize;
        let delta = self.direction.sign() * self.step as isize;
        (self.turn as isize + delta).rem_euclid(n) as usize
    }

    /// Move the turn pointer and reset the one-shot modifiers.
    pub fn advance(&mut self, roster_len: usize) -> usize {
        self.turn = self.next_index(roster_len);
        self.reset_modifiers();
        self.turn
    }

    /// Reset `step` to 1 and clear the pivot flag.
    pub fn reset_modifiers(&mut self) {
        self.step = 1;
        self.pivot = false;
    }

    /// Take the pending attack total, leaving zero.
    pub fn take_attack(&mut self) -> u32 {
        std::mem::take(&mut self.pending_attack)
    }
}
