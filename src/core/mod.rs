//! Core engine types: identities, players, RNG, configuration, moves,
//! turn state and errors.
//!
//! Nothing in here knows the rules; the `game` module drives these types.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::{CardId, CardIdAllocator};
pub use player::{Hand, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{DealMode, DeckSpec, GameConfig, RuleConfig};
pub use action::{DrawnCards, Move, MoveOutcome, MoveRecord, Penalty};
pub use state::{Direction, TurnState};
pub use error::{GameError, Result};
