//! Card values and card objects.
//!
//! - `Face`: the (suit, rank) value. Used for rule matching only.
//! - `Card`: a physical card, a `Face` plus a unique `CardId`.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard suit (no joker).
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[must_use]
    pub fn is_joker(self) -> bool {
        self == Rank::Joker
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            Rank::Joker => "Joker",
        };
        f.write_str(name)
    }
}

/// The printed value of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    pub suit: Suit,
    pub rank: Rank,
}

impl Face {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Same suit or same rank: the basic Crazy Eights match.
    #[must_use]
    pub fn matches(&self, other: &Face) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// A physical card. Immutable after creation.
///
/// Equality includes the `CardId`, so two value-equal cards from
/// different copies compare unequal. Use [`Card::face`] for value checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: Face,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.face.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.face.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.face, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_matches_suit_or_rank() {
        let five_hearts = Face::new(Suit::Hearts, Rank::Five);

        assert!(five_hearts.matches(&Face::new(Suit::Hearts, Rank::King)));
        assert!(five_hearts.matches(&Face::new(Suit::Clubs, Rank::Five)));
        assert!(!five_hearts.matches(&Face::new(Suit::Clubs, Rank::King)));
    }

    #[test]
    fn test_identity_distinguishes_equal_faces() {
        let face = Face::new(Suit::Spades, Rank::Joker);
        let a = Card::new(CardId(52), face);
        let b = Card::new(CardId(53), face);

        assert_ne!(a, b);
        assert_eq!(a.face(), b.face());
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(3), Face::new(Suit::Diamonds, Rank::Queen));
        assert_eq!(card.face().to_string(), "Queen of Diamonds");
        assert_eq!(card.to_string(), "Queen of Diamonds (Card#3)");
        assert_eq!(Rank::Ten.to_string(), "10");
    }
}
