//! The four kinds of move a player can make.

use serde::{Deserialize, Serialize};

use crate::cards::{DevelopmentCard, Noble};
use crate::core::ChipSet;

/// A single player turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Take chips from the bank, returning some to stay under the cap.
    /// The two multisets never share a colour.
    TakeTokens { tokens: ChipSet, returned: ChipSet },

    /// Reserve a visible card, receiving a gold chip if the bank has one.
    ReserveDevelopment { card: DevelopmentCard },

    /// Buy a visible or reserved card, optionally attracting a noble.
    BuyDevelopment {
        card: DevelopmentCard,
        reserved: bool,
        price: ChipSet,
        noble: Option<Noble>,
    },

    /// Pass. Only legal when nothing else is.
    DoNothing,
}

impl Move {
    #[must_use]
    pub fn take_tokens(tokens: ChipSet, returned: ChipSet) -> Self {
        debug_assert!(!tokens.overlaps(&returned));
        Move::TakeTokens { tokens, returned }
    }

    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Move::BuyDevelopment { .. })
    }

    /// Expansion priority for search; higher goes first.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Move::BuyDevelopment { .. } => 3,
            Move::TakeTokens { .. } => 2,
            Move::ReserveDevelopment { .. } => 1,
            Move::DoNothing => 0,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::TakeTokens { tokens, returned } if returned.is_empty() => {
                write!(f, "take {tokens}")
            }
            Move::TakeTokens { tokens, returned } => {
                write!(f, "take {tokens}, return {returned}")
            }
            Move::ReserveDevelopment { card } => write!(f, "reserve {card}"),
            Move::BuyDevelopment {
                card,
                reserved,
                price,
                noble,
            } => {
                write!(f, "buy {card} for {price}")?;
                if *reserved {
                    write!(f, " from reserve")?;
                }
                if let Some(noble) = noble {
                    write!(f, ", visited by {noble}")?;
                }
                Ok(())
            }
            Move::DoNothing => write!(f, "do nothing"),
        }
    }
}
