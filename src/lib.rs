//! # crazy-eights
//!
//! A turn-based Crazy Eights engine with stackable attacks, direction
//! reversal, turn skipping and suit calling, played over multiple
//! elimination rounds.
//!
//! ## Design Principles
//!
//! 1. **Identity over value**: every physical card has a `CardId`. Pile and
//!    hand membership use identity; rule matching uses the `Face`.
//!
//! 2. **Outcomes, not faults**: an illegal play is a normal `MoveOutcome`
//!    (cards drawn, turn used). Only broken invariants are `GameError`s.
//!
//! 3. **Synchronous collaborators**: the engine never prompts. Moves and
//!    called suits arrive already decided; notifications go out through
//!    `EventSink`s that must not re-enter the game.
//!
//! 4. **Seedable randomness**: the shuffle source is a `GameRng` passed in
//!    through the configuration.
//!
//! ## Modules
//!
//! - `core`: IDs, players and hands, RNG, configuration, moves, turn state, errors
//! - `cards`: suits, ranks, physical cards and the card registry
//! - `zones`: draw/discard pile bookkeeping and the `Deck`
//! - `effects`: Reverse, Jump, Attack and Call, rank bindings, resolution
//! - `rules`: play legality and standings
//! - `events`: notifications and sinks
//! - `game`: the `Game` state machine and its collaborators

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId, PlayerMap, Player, Hand,
    GameRng,
    GameConfig, DeckSpec, DealMode, RuleConfig,
    Move, MoveOutcome, MoveRecord, Penalty, DrawnCards,
    Direction, TurnState,
    GameError, Result,
};

pub use crate::cards::{Card, CardRegistry, Face, Rank, Suit};

pub use crate::zones::{Deck, Zone, ZoneManager, ZonePosition};

pub use crate::effects::{
    Binding, Effect, EffectBindings, EffectFrequency, EffectType,
    EffectResolver, Resolution, ResolverContext,
};

pub use crate::rules::{check_play, Legality, PlayContext, Standings};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::game::{Game, GameStatus, KeepSuit, MoveSource, SuitChooser, TurnView};
