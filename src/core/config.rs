//! Game configuration.
//!
//! The setup collaborator describes a game by providing:
//! - `players`: the seating roster
//! - `DeckSpec`: which physical cards exist
//! - `DealMode`: how starting hands are formed
//! - `EffectBindings`: which rank triggers which effect
//! - `RuleConfig`: penalty sizes
//!
//! Everything is serde-serializable so setups can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::{Face, Rank};
use crate::effects::EffectBindings;

/// Which physical cards make up the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckSpec {
    /// `copies` standard 52-card decks, each with `jokers` jokers.
    Standard { jokers: usize, copies: usize },
    /// Exactly these faces, listed top of the draw pile first.
    Custom(Vec<Face>),
}

impl Default for DeckSpec {
    /// The 54-card deck: 4 suits x 13 ranks + 2 jokers.
    fn default() -> Self {
        Self::Standard { jokers: 2, copies: 1 }
    }
}

/// How starting hands are dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealMode {
    /// Every player receives one card of each listed rank, in order.
    Ranks(Vec<Rank>),
    /// Every player receives `count` cards from the top, round-robin.
    Random { count: usize },
}

impl Default for DealMode {
    fn default() -> Self {
        Self::Random { count: 5 }
    }
}

/// Penalty sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Cards drawn for a card that matches neither suit nor rank.
    pub illegal_play_penalty: u32,
    /// Cards drawn per point of pending attack.
    pub attack_multiplier: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            illegal_play_penalty: 2,
            attack_multiplier: 2,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use crazy_eights::core::{DealMode, GameConfig};
/// use crazy_eights::cards::Rank;
///
/// let config = GameConfig::new(["Tshiamo", "Karabo"])
///     .with_seed(7)
///     .with_deal(DealMode::Ranks(vec![Rank::Two, Rank::Seven]));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.players.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seating order.
    pub players: Vec<String>,
    /// RNG seed. `None` picks a random one.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub deck: DeckSpec,
    /// Never shuffle: the draw pile keeps its listed order.
    #[serde(default)]
    pub stacked: bool,
    #[serde(default)]
    pub deal: DealMode,
    #[serde(default = "EffectBindings::standard")]
    pub bindings: EffectBindings,
    #[serde(default)]
    pub rules: RuleConfig,
}

impl GameConfig {
    /// Create a configuration with default deck, deal, bindings and rules.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            seed: None,
            deck: DeckSpec::default(),
            stacked: false,
            deal: DealMode::default(),
            bindings: EffectBindings::standard(),
            rules: RuleConfig::default(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckSpec) -> Self {
        self.deck = deck;
        self
    }

    /// Use the listed order of a custom deck as-is, never shuffling.
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    #[must_use]
    pub fn with_deal(mut self, deal: DealMode) -> Self {
        self.deal = deal;
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: EffectBindings) -> Self {
        self.bindings = bindings;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Check the roster, deck and deal before a game is built.
    pub fn validate(&self) -> Result<()> {
        let count = self.players.len();
        if !(2..=255).contains(&count) {
            return Err(GameError::InvalidConfig(format!(
                "roster must have 2-255 players, got {}",
                count
            )));
        }
        match &self.deck {
            DeckSpec::Standard { copies: 0, .. } => {
                return Err(GameError::InvalidConfig("deck needs at least one copy".to_string()));
            }
            DeckSpec::Custom(faces) if faces.is_empty() => {
                return Err(GameError::InvalidConfig("custom deck is empty".to_string()));
            }
            _ => {}
        }
        match &self.deal {
            DealMode::Random { count: 0 } => {
                Err(GameError::InvalidConfig("deal must give each hand a card".to_string()))
            }
            DealMode::Ranks(ranks) if ranks.is_empty() => {
                Err(GameError::InvalidConfig("rank deal lists no ranks".to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::effects::Effect;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(["A", "B", "C"]);

        assert_eq!(config.deck, DeckSpec::Standard { jokers: 2, copies: 1 });
        assert_eq!(config.deal, DealMode::Random { count: 5 });
        assert_eq!(config.rules.illegal_play_penalty, 2);
        assert_eq!(config.rules.attack_multiplier, 2);
        assert!(!config.stacked);
        assert_eq!(config.bindings.effect_for(Rank::Eight), Some(Effect::Call));
    }

    #[test]
    fn test_rejects_single_player() {
        let err = GameConfig::new(["Solo"]).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_custom_deck() {
        let config = GameConfig::new(["A", "B"]).with_deck(DeckSpec::Custom(vec![]));
        assert!(config.validate().is_err());

        let config = GameConfig::new(["A", "B"]).with_deck(DeckSpec::Standard { jokers: 0, copies: 0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_deal() {
        let config = GameConfig::new(["A", "B"]).with_deal(DealMode::Random { count: 0 });
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::new(["A", "B"]).with_deal(DealMode::Ranks(vec![]));
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::new(["A", "B"]).with_deal(DealMode::Ranks(vec![Rank::Two]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_setup_fills_defaults() {
        let json = r#"{ "players": ["Tshiamo", "Karabo"], "seed": 9 }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.players, vec!["Tshiamo".to_string(), "Karabo".to_string()]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.deck, DeckSpec::default());
        assert_eq!(config.bindings, EffectBindings::standard());
    }

    #[test]
    fn test_json_custom_deck() {
        let config = GameConfig::new(["A", "B"])
            .with_deck(DeckSpec::Custom(vec![Face::new(Suit::Clubs, Rank::Four)]))
            .stacked();

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
