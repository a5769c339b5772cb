//! Card registry: every physical card in play, by identity.
//!
//! The registry is built once at setup and never changes afterwards.
//! Cards are never created or destroyed during a game, so its length is
//! the conserved card total.

use rustc_hash::FxHashMap;

use super::card::{Card, Face, Rank, Suit};
use crate::core::config::DeckSpec;
use crate::core::entity::{CardId, CardIdAllocator};

/// Suits handed to jokers in turn, so jokers can also match by suit.
const JOKER_SUITS: [Suit; 2] = [Suit::Hearts, Suit::Spades];

/// Registry of physical cards.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::{CardRegistry, Rank};
///
/// let registry = CardRegistry::standard(2, 1);
/// assert_eq!(registry.len(), 54);
/// assert_eq!(registry.iter().filter(|c| c.rank() == Rank::Joker).count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    /// Construction order, first = top of a fresh deck.
    order: Vec<CardId>,
    ids: CardIdAllocator,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build `copies` standard 52-card decks plus `jokers` jokers per copy.
    #[must_use]
    pub fn standard(jokers: usize, copies: usize) -> Self {
        let mut registry = Self::new();
        for _ in 0..copies {
            for suit in Suit::ALL {
                for rank in Rank::STANDARD {
                    registry.register(Face::new(suit, rank));
                }
            }
            for j in 0..jokers {
                registry.register(Face::new(JOKER_SUITS[j % JOKER_SUITS.len()], Rank::Joker));
            }
        }
        registry
    }

    /// Build a registry holding exactly the given faces, in order.
    pub fn from_faces(faces: impl IntoIterator<Item = Face>) -> Self {
        let mut registry = Self::new();
        for face in faces {
            registry.register(face);
        }
        registry
    }

    /// Build the registry described by a deck spec.
    #[must_use]
    pub fn from_spec(spec: &DeckSpec) -> Self {
        match spec {
            DeckSpec::Standard { jokers, copies } => Self::standard(*jokers, *copies),
            DeckSpec::Custom(faces) => Self::from_faces(faces.iter().copied()),
        }
    }

    /// Create a new physical card and return its ID.
    pub fn register(&mut self, face: Face) -> CardId {
        let id = self.ids.alloc();
        self.cards.insert(id, Card::new(id, face));
        self.order.push(id);
        id
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Total number of physical cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Card IDs in construction order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Iterate over all cards in construction order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.order.iter().filter_map(|id| self.cards.get(id).copied())
    }
}
