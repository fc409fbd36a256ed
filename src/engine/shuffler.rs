//! Hidden-information shuffling.
//!
//! Deck order is hidden from the players. A shuffler reorders every deck
//! without touching the visible cards, so a selector cannot exploit the
//! order it was dealt in.

use crate::core::GameRng;
use crate::rules::Game;

/// Introduces randomness into a game's hidden decks.
pub trait Shuffler: Send {
    fn shuffle(&mut self, game: &Game) -> Game;
}

/// Leaves every deck as it is.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullShuffler;

impl Shuffler for NullShuffler {
    fn shuffle(&mut self, game: &Game) -> Game {
        game.clone()
    }
}

/// Shuffles every deck, row by row, from one seeded RNG stream.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    rng: GameRng,
}

impl RandomShuffler {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, game: &Game) -> Game {
        let developments = game.developments().map_decks(|_, deck| {
            let mut order: Vec<_> = deck.cards().copied().collect();
            self.rng.shuffle(&mut order);
            deck.reorder(order)
        });
        game.with_developments(developments)
    }
}
