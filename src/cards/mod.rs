//! Development cards, nobles, decks, and the component catalog.

pub mod catalog;
pub mod deck;
pub mod development;

pub use catalog::{CatalogError, GameComponents};
pub use deck::{Deck, DevelopmentRow, Developments};
pub use development::{DevelopmentCard, Noble, Row};
