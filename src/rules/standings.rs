//! Round and elimination bookkeeping.
//!
//! Within a round, players who empty their hand are benched in finish
//! order. The last player still holding cards is eliminated. The bench
//! becomes the next round's roster.
//!
//! Final ranking: the final round's bench, then the eliminated players in
//! reverse order of elimination (the last round's loser ahead of the first
//! round's).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Bench, eliminated list and final ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    bench: Vec<PlayerId>,
    eliminated: Vec<PlayerId>,
    ranking: Option<Vec<PlayerId>>,
}

impl Standings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench a player who emptied their hand. Returns their 1-based place
    /// in this round.
    pub fn finish(&mut self, player: PlayerId) -> usize {
        self.bench.push(player);
        self.bench.len()
    }

    /// Record the round's last remaining player.
    pub fn eliminate(&mut self, player: PlayerId) {
        self.eliminated.push(player);
    }

    /// Take the bench to seat the next round.
    pub fn take_bench(&mut self) -> Vec<PlayerId> {
        std::mem::take(&mut self.bench)
    }

    /// Freeze the final ranking from the current bench and eliminations.
    pub fn conclude(&mut self) -> &[PlayerId] {
        let ranking: Vec<PlayerId> = self
            .bench
            .iter()
            .copied()
            .chain(self.eliminated.iter().rev().copied())
            .collect();
        self.ranking.insert(ranking).as_slice()
    }

    /// Players who finished the current round, in finish order.
    #[must_use]
    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    /// Eliminated players, in elimination order.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    /// Final ranking, once the game has ended. Winner first.
    #[must_use]
    pub fn ranking(&self) -> Option<&[PlayerId]> {
        self.ranking.as_deref()
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.ranking.is_some()
    }
}
