//! Effect resolution - applying a played card's effect to turn state.
//!
//! The `EffectResolver` runs after a play has been accepted and before the
//! turn pointer advances. It applies the bound effect (if any), keeps the
//! required suit alive only across Call plays, and raises the two-player
//! pivot when a reversal changed the direction of play.

use log::debug;

use super::effect::Effect;
use crate::cards::{Card, Suit};
use crate::core::TurnState;

/// Context for resolving one accepted play.
#[derive(Clone, Copy, Debug)]
pub struct ResolverContext {
    /// The card that was just played.
    pub trigger: Card,
    /// Suit picked by the suit-choice collaborator, if any.
    pub called_suit: Option<Suit>,
    /// Players still active in the round, including the mover.
    pub active_players: usize,
}

impl ResolverContext {
    #[must_use]
    pub fn new(trigger: Card, active_players: usize) -> Self {
        Self {
            trigger,
            called_suit: None,
            active_players,
        }
    }

    /// Supply a chosen suit for a Call.
    #[must_use]
    pub fn with_called_suit(mut self, suit: Option<Suit>) -> Self {
        self.called_suit = suit;
        self
    }

    /// The suit a Call sets: the chosen one, else the trigger card's own.
    #[must_use]
    pub fn call_suit(&self) -> Suit {
        self.called_suit.unwrap_or(self.trigger.suit())
    }
}

/// What resolving a play changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The effect that was applied.
    pub applied: Option<Effect>,
    pub direction_changed: bool,
    /// A suit constraint from an earlier Call was dropped.
    pub required_suit_cleared: bool,
    pub pivot: bool,
}

/// Applies effects to turn state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one accepted play.
    ///
    /// `effect` is the binding of the played card's rank; `None` for a
    /// plain card.
    pub fn resolve(state: &mut TurnState, effect: Option<Effect>, context: &ResolverContext) -> Resolution {
        let mut resolution = Resolution {
            applied: effect,
            ..Resolution::default()
        };

        if effect != Some(Effect::Call) && state.required_suit.is_some() {
            state.required_suit = None;
            resolution.required_suit_cleared = true;
        }

        let Some(effect) = effect else {
            return resolution;
        };

        let before = state.direction;
        effect.apply(state, context.call_suit());
        resolution.direction_changed = state.direction != before;

        if resolution.direction_changed && context.active_players == 2 {
            state.pivot = true;
            resolution.pivot = true;
        }

        debug!("{} resolved {} -> {:?}", context.trigger, effect, state);
        resolution
    }
}
