//! Rank -> effect binding table.
//!
//! Supplied at game construction; at most one effect per rank. A binding
//! can be marked immune, which makes cards of that rank playable on
//! anything while no attack chain is active.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::effect::Effect;
use crate::cards::Rank;

/// One rank's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub effect: Effect,
    /// Ignores suit/rank matching and required suits.
    #[serde(default)]
    pub immune: bool,
}

/// The binding table.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::Rank;
/// use crazy_eights::effects::{Effect, EffectBindings};
///
/// let bindings = EffectBindings::new()
///     .bind(Rank::Eight, Effect::Call)
///     .bind(Rank::Two, Effect::attack(1));
///
/// assert_eq!(bindings.effect_for(Rank::Two), Some(Effect::attack(1)));
/// assert_eq!(bindings.effect_for(Rank::Nine), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBindings {
    bindings: FxHashMap<Rank, Binding>,
}

impl EffectBindings {
    /// An empty table: every card is plain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 7 Jump, 8 Call, Jack Reverse, 2 Attack(1), Joker Attack(2).
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .bind(Rank::Seven, Effect::jump())
            .bind(Rank::Eight, Effect::Call)
            .bind(Rank::Jack, Effect::Reverse)
            .bind(Rank::Two, Effect::attack(1))
            .bind(Rank::Joker, Effect::attack(2))
    }

    /// Bind an effect to a rank, replacing any previous binding.
    #[must_use]
    pub fn bind(mut self, rank: Rank, effect: Effect) -> Self {
        self.bindings.insert(rank, Binding { effect, immune: false });
        self
    }

    /// Bind an effect that can be played on anything.
    #[must_use]
    pub fn bind_immune(mut self, rank: Rank, effect: Effect) -> Self {
        self.bindings.insert(rank, Binding { effect, immune: true });
        self
    }

    /// Remove a rank's binding.
    #[must_use]
    pub fn unbind(mut self, rank: Rank) -> Self {
        self.bindings.remove(&rank);
        self
    }

    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<&Binding> {
        self.bindings.get(&rank)
    }

    #[must_use]
    pub fn effect_for(&self, rank: Rank) -> Option<Effect> {
        self.get(rank).map(|b| b.effect)
    }

    /// A rank with no effect: allowed as the opening face-up card.
    #[must_use]
    pub fn is_plain(&self, rank: Rank) -> bool {
        !self.bindings.contains_key(&rank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
