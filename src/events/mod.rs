//! Notifications fired by the game.
//!
//! ## Key Types
//!
//! - `GameEvent`: face-up, turn, finish, round and game-end notifications
//! - `EventSink`: anything that wants to observe them
//! - `EventLog`: a recorder that can be cloned into the game and read back

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink};
