//! Error types.
//!
//! `RulesError` signals that a move was applied whose preconditions do not
//! hold. Moves drawn from `Game::moves` never produce one. `ConfigError` is
//! raised while constructing AIs.

use crate::ai::Feature;
use crate::cards::{DevelopmentCard, Noble};
use crate::core::{ChipSet, Player};

/// Errors raised when a state transition's preconditions are violated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A move was applied to a finished game.
    #[error("cannot take move; {winner} already won")]
    GameOver { winner: Player },

    /// Chips were removed from a holder that does not have them.
    #[error("insufficient chips: needed {needed}, held {held}")]
    InsufficientChips { needed: ChipSet, held: ChipSet },

    /// A card was not among the visible development rows.
    #[error("card {0} not found in developments")]
    CardNotFound(DevelopmentCard),

    /// A card was not among the acting player's reserved developments.
    #[error("card {0} is not reserved")]
    ReservedCardNotFound(DevelopmentCard),

    /// A noble was not in the shared pool.
    #[error("noble {0} is not available")]
    NobleNotAvailable(Noble),

    /// The acting player already holds the maximum number of reserved cards.
    #[error("cannot reserve more than {limit} developments")]
    ReserveLimit { limit: usize },

    /// A draw was attempted from an empty deck.
    #[error("deck is empty, cannot draw cards")]
    EmptyDeck,

    /// The tableau cannot pay for a card even with gold.
    #[error("cannot afford {0}")]
    CannotAfford(DevelopmentCard),

    /// Gold was converted to a card colour.
    #[error("gold chips have no card colour")]
    GoldHasNoColor,
}

/// Errors raised when building an AI from invalid configuration.
///
/// Checked eagerly by constructors so that search never sees a bad setting.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("no weight configured for feature {0:?}")]
    MissingWeight(Feature),

    #[error("weight for feature {0:?} is not finite")]
    NonFiniteWeight(Feature),

    #[error("operation budget must be at least one")]
    ZeroBudget,
}
