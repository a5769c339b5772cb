//! Event sinks.
//!
//! A sink receives every `GameEvent` in firing order. Sinks must not call
//! back into the game; they only get a shared reference to the event.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use super::event::GameEvent;

/// Receiver of game notifications.
pub trait EventSink: Send {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Forwards events over a channel. A disconnected receiver is ignored.
impl EventSink for Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

/// Shared, cloneable event recorder.
///
/// ## Example
///
/// ```
/// use crazy_eights::events::{EventLog, EventSink, GameEvent};
/// use crazy_eights::core::PlayerId;
///
/// let log = EventLog::new();
/// let mut sink = log.clone();
/// sink.notify(&GameEvent::TurnChanged(PlayerId(1)));
///
/// assert_eq!(log.events(), vec![GameEvent::TurnChanged(PlayerId(1))]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
