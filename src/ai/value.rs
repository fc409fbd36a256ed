//! Heuristic position evaluation.
//!
//! A `ValueFunction` is a weighted sum of features, each measured from
//! player one's side. Won positions score infinitely.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::ConfigError;
use crate::rules::Game;

/// A measurable property of a position. Positive values favour player one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Victory point difference.
    VictoryPoints,
    /// Owned development count difference.
    Developments,
    /// Held chip count difference.
    Chips,
    /// 1 when player two is to move, offsetting the first player's tempo.
    SecondPlayerExtraTurnBonus,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::VictoryPoints,
        Feature::Developments,
        Feature::Chips,
        Feature::SecondPlayerExtraTurnBonus,
    ];

    /// The feature's raw value in `game`.
    #[must_use]
    pub fn measure(self, game: &Game) -> f64 {
        let difference = |per_player: fn(&Game, Player) -> f64| {
            per_player(game, Player::One) - per_player(game, Player::Two)
        };

        match self {
            Feature::VictoryPoints => {
                difference(|g, p| f64::from(g.tableau(p).victory_points()))
            }
            Feature::Developments => {
                difference(|g, p| g.tableau(p).development_count() as f64)
            }
            Feature::Chips => difference(|g, p| f64::from(g.tableau(p).chips().total())),
            Feature::SecondPlayerExtraTurnBonus => {
                if game.current_player() == Player::Two {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Weight per feature. Serializable so it can live in configuration files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    weights: FxHashMap<Feature, f64>,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self::empty()
            .with_weight(Feature::VictoryPoints, 100.0)
            .with_weight(Feature::Developments, 10.0)
            .with_weight(Feature::Chips, 1.0)
            .with_weight(Feature::SecondPlayerExtraTurnBonus, 5.0)
    }
}

impl FeatureWeights {
    /// No weights at all. Not a valid configuration until every feature is set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_weight(mut self, feature: Feature, weight: f64) -> Self {
        self.weights.insert(feature, weight);
        self
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.weights.get(&feature).copied()
    }
}

/// A validated weighted-feature evaluator.
///
/// ```
/// use splendid::ai::{FeatureWeights, ValueFunction};
///
/// let value = ValueFunction::new(&FeatureWeights::default()).unwrap();
/// assert_eq!(value.weight(splendid::ai::Feature::VictoryPoints), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueFunction {
    weights: [f64; 4],
}

impl ValueFunction {
    /// Fails if any feature lacks a weight or has a non-finite one.
    pub fn new(weights: &FeatureWeights) -> Result<Self, ConfigError> {
        let mut resolved = [0.0; 4];
        for (slot, feature) in resolved.iter_mut().zip(Feature::ALL) {
            let weight = weights
                .get(feature)
                .ok_or(ConfigError::MissingWeight(feature))?;
            if !weight.is_finite() {
                return Err(ConfigError::NonFiniteWeight(feature));
            }
            *slot = weight;
        }
        Ok(Self { weights: resolved })
    }

    #[must_use]
    pub fn weight(&self, feature: Feature) -> f64 {
        self.weights[feature as usize]
    }

    /// Score from player one's side: +inf if they won, -inf if they lost.
    #[must_use]
    pub fn compute(&self, game: &Game) -> f64 {
        match game.winner() {
            Some(Player::One) => f64::INFINITY,
            Some(Player::Two) => f64::NEG_INFINITY,
            None => Feature::ALL
                .into_iter()
                .zip(self.weights)
                .map(|(feature, weight)| weight * feature.measure(game))
                .sum(),
        }
    }

    /// Score from `player`'s side: positive is always good for them.
    #[must_use]
    pub fn compute_for_player(&self, game: &Game, player: Player) -> f64 {
        match player {
            Player::One => self.compute(game),
            Player::Two => -self.compute(game),
        }
    }
}

impl Default for ValueFunction {
    /// The evaluator for [`FeatureWeights::default`].
    fn default() -> Self {
        let weights = FeatureWeights::default();
        Self {
            weights: Feature::ALL.map(|feature| weights.get(feature).unwrap_or_default()),
        }
    }
}
