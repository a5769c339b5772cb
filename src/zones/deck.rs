//! The shared deck: a face-down draw pile and a face-up discard pile.
//!
//! `Deck` owns every physical card (through its `CardRegistry`), the pile
//! bookkeeping, and the shuffle source. Hands live on the players; the
//! deck deals into them and the game returns their cards between rounds.
//!
//! ## Conservation
//!
//! Cards are never created or destroyed after construction:
//! `draw + discard + sum(hands) == total_cards()` at every step.

use log::{trace, warn};

use super::manager::{Zone, ZoneManager, ZonePosition};
use crate::cards::{Card, CardRegistry, Rank};
use crate::core::error::{GameError, Result};
use crate::core::{CardId, GameRng, Hand};

/// Draw and discard piles plus the shuffle source.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: CardRegistry,
    zones: ZoneManager,
    rng: GameRng,
    /// Keep listed order: reshuffles become no-ops.
    stacked: bool,
}

impl Deck {
    /// Put every registered card in the draw pile. The first registered
    /// card ends up on top.
    pub fn new(cards: CardRegistry, rng: GameRng) -> Result<Self> {
        let mut zones = ZoneManager::new();
        for &id in cards.ids().iter().rev() {
            zones.add_to_zone(id, Zone::DrawPile, ZonePosition::Top)?;
        }
        Ok(Self {
            cards,
            zones,
            rng,
            stacked: false,
        })
    }

    /// Never reorder the draw pile (scripted deals, replays).
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    /// Look up a card by identity.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.cards.get(id)
    }

    fn resolve(&self, id: CardId) -> Result<Card> {
        self.cards.get(id).ok_or(GameError::UnknownCard(id))
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.cards
    }

    /// Total physical cards, wherever they are.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        self.zones.cards_in_zone(Zone::DrawPile)
    }

    /// Discard pile, bottom first. The last entry is the face-up card.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        self.zones.cards_in_zone(Zone::DiscardPile)
    }

    /// The current face-up card.
    #[must_use]
    pub fn face_up(&self) -> Option<Card> {
        self.zones
            .top_card(Zone::DiscardPile)
            .and_then(|id| self.cards.get(id))
    }

    /// Is this card in either pile?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.zones.contains(id)
    }

    /// Shuffle the draw pile in place. The discard pile is untouched.
    pub fn shuffle(&mut self) {
        self.zones.shuffle_zone(Zone::DrawPile, &mut self.rng);
    }

    fn reshuffle(&mut self) {
        if !self.stacked {
            self.shuffle();
        }
    }

    /// Remove and return the top of the draw pile.
    ///
    /// An empty draw pile is refilled from the discard pile (all but the
    /// face-up card) and shuffled first. If that frees nothing the deck is
    /// exhausted.
    pub fn draw_top(&mut self) -> Result<CardId> {
        if self.zones.zone_size(Zone::DrawPile) == 0 {
            self.reclaim_for_reshuffle();
        }
        self.zones.pop_top(Zone::DrawPile).ok_or_else(|| {
            warn!(
                "deck exhausted: draw pile empty, discard holds {}",
                self.zones.zone_size(Zone::DiscardPile)
            );
            GameError::DeckExhausted
        })
    }

    /// Undo a run of `draw_top` calls: put `drawn` back on the draw pile so
    /// the first card drawn is on top again.
    pub fn restore_top(&mut self, drawn: &[CardId]) -> Result<()> {
        for &id in drawn.iter().rev() {
            if !self.cards.contains(id) {
                return Err(GameError::UnknownCard(id));
            }
            self.zones.add_to_zone(id, Zone::DrawPile, ZonePosition::Top)?;
        }
        Ok(())
    }

    /// Put a card on top of the discard pile.
    ///
    /// Fails with `DuplicateCard` if this exact card is already on a pile.
    pub fn discard(&mut self, id: CardId) -> Result<()> {
        if !self.cards.contains(id) {
            return Err(GameError::UnknownCard(id));
        }
        self.zones.add_to_zone(id, Zone::DiscardPile, ZonePosition::Top)
    }

    /// Move all but the face-up card back under the draw pile and reshuffle.
    ///
    /// Returns the number of cards reclaimed.
    pub fn reclaim_for_reshuffle(&mut self) -> usize {
        let moved = self.zones.move_all_but_top(Zone::DiscardPile, Zone::DrawPile);
        self.reshuffle();
        trace!("reclaimed {} cards from the discard pile", moved);
        moved
    }

    /// Return hand cards and the whole discard pile to the draw pile, then
    /// reshuffle. Used between rounds.
    pub fn gather(&mut self, returned: impl IntoIterator<Item = CardId>) -> Result<()> {
        self.zones.move_all(Zone::DiscardPile, Zone::DrawPile);
        for id in returned {
            if !self.cards.contains(id) {
                return Err(GameError::UnknownCard(id));
            }
            self.zones.add_to_zone(id, Zone::DrawPile, ZonePosition::Bottom)?;
        }
        self.reshuffle();
        Ok(())
    }

    /// Give every hand one card of each listed rank, in order.
    ///
    /// For each rank the topmost matching card is taken. Fails with
    /// `RankUnavailable` once a rank runs out.
    pub fn deal_initial_hands(&mut self, hands: &mut [&mut Hand], ranks: &[Rank]) -> Result<()> {
        for hand in hands.iter_mut() {
            for &rank in ranks {
                let id = self
                    .draw_pile()
                    .iter()
                    .rev()
                    .copied()
                    .find(|&id| self.cards.get(id).is_some_and(|c| c.rank() == rank))
                    .ok_or(GameError::RankUnavailable(rank))?;
                self.zones.remove(id);
                if !hand.insert(id) {
                    return Err(GameError::DuplicateCard(id));
                }
            }
        }
        Ok(())
    }

    /// Deal `count` cards to every hand from the top, one at a time around
    /// the table.
    pub fn deal_random_hands(&mut self, hands: &mut [&mut Hand], count: usize) -> Result<()> {
        for _ in 0..count {
            for hand in hands.iter_mut() {
                let id = self.draw_top()?;
                if !hand.insert(id) {
                    return Err(GameError::DuplicateCard(id));
                }
            }
        }
        Ok(())
    }

    /// Turn cards face up until one satisfies `is_plain`.
    ///
    /// Each rejected card triggers a reclaim-and-reshuffle before the next
    /// card is turned. Fails with `DeckExhausted` when the draw pile holds
    /// no plain card at all, rather than looping forever.
    pub fn reveal(&mut self, is_plain: impl Fn(&Card) -> bool) -> Result<Card> {
        loop {
            let id = self.draw_top()?;
            self.zones.add_to_zone(id, Zone::DiscardPile, ZonePosition::Top)?;
            let card = self.resolve(id)?;
            if is_plain(&card) {
                return Ok(card);
            }

            trace!("revealed {} carries an effect, turning another", card);
            self.reclaim_for_reshuffle();

            let any_plain = self
                .draw_pile()
                .iter()
                .filter_map(|&id| self.cards.get(id))
                .any(|c| is_plain(&c));
            if !any_plain {
                warn!("no plain card left to reveal");
                return Err(GameError::DeckExhausted);
            }
        }
    }
}
