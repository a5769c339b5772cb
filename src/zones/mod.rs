//! Pile system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: the draw pile or the discard pile
//! - `ZoneManager`: identity-based pile membership and ordering
//! - `ZonePosition`: top or bottom insertion
//! - `Deck`: shuffle, draw, discard, deal, reclaim and reveal

pub mod deck;
pub mod manager;

pub use deck::Deck;
pub use manager::{Zone, ZoneManager, ZonePosition};
