//! Card identity.
//!
//! Every physical card gets a unique `CardId` when the deck is built.
//! Two cards with the same suit and rank (duplicate jokers, multi-deck
//! games) are still distinct objects with distinct ids.
//!
//! ## Identity vs. value
//!
//! - Pile and hand membership is always checked by `CardId`.
//! - Rule matching (suit/rank) uses the card's `Face`.
//!
//! ```
//! use crazy_eights::core::CardId;
//!
//! let a = CardId::new(7);
//! let b = CardId::new(8);
//! assert_ne!(a, b);
//! assert_eq!(a.raw(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Opaque, unique identifier for a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Hands out sequential card IDs during deck construction.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs allocated so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}
