//! Zone manager for pile membership.
//!
//! The `ZoneManager` tracks which pile each card is in and keeps the order
//! of both piles. Membership is keyed by `CardId`, so value-equal cards
//! are never confused with one another.
//!
//! Pile order: index 0 is the bottom, the last index is the top.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::core::CardId;

/// The two shared piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile.
    DrawPile,
    /// Face-up discard pile. Its top card is the face-up card.
    DiscardPile,
}

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    Top,
    Bottom,
}

/// Tracks card locations across the draw and discard piles.
///
/// ## Usage
///
/// ```
/// use crazy_eights::zones::{Zone, ZoneManager, ZonePosition};
/// use crazy_eights::core::CardId;
///
/// let mut manager = ZoneManager::new();
/// manager.add_to_zone(CardId(10), Zone::DrawPile, ZonePosition::Top).unwrap();
/// manager.add_to_zone(CardId(11), Zone::DrawPile, ZonePosition::Top).unwrap();
///
/// // The same physical card can't be placed twice
/// assert!(manager.add_to_zone(CardId(10), Zone::DiscardPile, ZonePosition::Top).is_err());
///
/// assert_eq!(manager.top_card(Zone::DrawPile), Some(CardId(11)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,
    draw: Vec<CardId>,
    discard: Vec<CardId>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn order(&self, zone: Zone) -> &Vec<CardId> {
        match zone {
            Zone::DrawPile => &self.draw,
            Zone::DiscardPile => &self.discard,
        }
    }

    fn order_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::DrawPile => &mut self.draw,
            Zone::DiscardPile => &mut self.discard,
        }
    }

    /// Add a card to a pile.
    ///
    /// Fails with `DuplicateCard` if the card already occupies either pile.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone, position: ZonePosition) -> Result<()> {
        if self.locations.contains_key(&card) {
            return Err(GameError::DuplicateCard(card));
        }

        self.locations.insert(card, zone);
        let order = self.order_mut(zone);
        match position {
            ZonePosition::Top => order.push(card),
            ZonePosition::Bottom => order.insert(0, card),
        }
        Ok(())
    }

    /// Remove a card from the manager entirely.
    ///
    /// Returns the zone it was in, or `None` if not found.
    pub fn remove(&mut self, card: CardId) -> Option<Zone> {
        let zone = self.locations.remove(&card)?;
        self.order_mut(zone).retain(|&c| c != card);
        Some(zone)
    }

    /// Check if the manager tracks a card in either pile.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    /// Cards in a pile, bottom first.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        self.order(zone)
    }

    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.order(zone).len()
    }

    /// Get the top card of a pile.
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<CardId> {
        self.order(zone).last().copied()
    }

    /// Remove and return the top card of a pile.
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardId> {
        let card = self.order_mut(zone).pop()?;
        self.locations.remove(&card);
        Some(card)
    }

    /// Move every card of `from` except its top to the bottom of `to`,
    /// keeping their relative order. Returns how many moved.
    pub fn move_all_but_top(&mut self, from: Zone, to: Zone) -> usize {
        let keep = self.zone_size(from).min(1);
        self.transfer(from, to, keep)
    }

    /// Move every card of `from` to the bottom of `to`. Returns how many moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        self.transfer(from, to, 0)
    }

    fn transfer(&mut self, from: Zone, to: Zone, keep_on_top: usize) -> usize {
        if from == to {
            return 0;
        }
        let source = self.order_mut(from);
        let split_at = source.len().saturating_sub(keep_on_top);
        let kept = source.split_off(split_at);
        let moved = std::mem::replace(source, kept);
        for &card in &moved {
            self.locations.insert(card, to);
        }
        let count = moved.len();
        self.order_mut(to).splice(0..0, moved);
        count
    }

    /// Shuffle a pile.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        rng.shuffle(self.order_mut(zone));
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
