//! The Crazy Eights orchestrator.
//!
//! ## Key Types
//!
//! - `Game`: rounds, moves, turn order and elimination
//! - `GameStatus`: not started, in progress, finished
//! - `MoveSource` / `SuitChooser`: collaborators that decide for players
//! - `TurnView`: what a collaborator sees on its turn

mod collaborators;
mod engine;

pub use collaborators::{KeepSuit, MoveSource, SuitChooser, TurnView};
pub use engine::{Game, GameStatus};
