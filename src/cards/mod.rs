//! Card system: values, physical cards, and the registry.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the printed value components
//! - `Face`: (suit, rank), used for rule matching
//! - `Card`: a `Face` plus a unique `CardId`
//! - `CardRegistry`: every physical card in play

pub mod card;
pub mod registry;

pub use card::{Card, Face, Rank, Suit};
pub use registry::CardRegistry;
