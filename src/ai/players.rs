//! Simple move selectors: random, greedy, one-ply value, and an ensemble
//! that votes over reshuffled decks.

use rustc_hash::FxHashMap;
use tracing::{error, info};

use super::value::ValueFunction;
use super::MoveSelector;
use crate::core::GameRng;
use crate::engine::{RandomShuffler, Shuffler};
use crate::rules::{Game, Move};

/// Every item sharing the highest score, in input order.
fn maxes<T>(items: impl IntoIterator<Item = T>, mut score: impl FnMut(&T) -> f64) -> Vec<T> {
    let mut best = f64::NEG_INFINITY;
    let mut winners = Vec::new();
    for item in items {
        let value = score(&item);
        if value > best {
            best = value;
            winners.clear();
            winners.push(item);
        } else if value == best {
            winners.push(item);
        }
    }
    winners
}

fn pick(rng: &mut GameRng, moves: &[Move]) -> Move {
    rng.choose(moves).copied().unwrap_or(Move::DoNothing)
}

/// Picks uniformly among legal moves.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomPlayer {
    fn select_move(&mut self, game: &Game) -> Move {
        pick(&mut self.rng, &game.moves())
    }
}

/// Picks randomly among the moves that buy the most victory points.
#[derive(Clone, Debug)]
pub struct GreedyRandomPlayer {
    rng: GameRng,
}

impl GreedyRandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for GreedyRandomPlayer {
    fn select_move(&mut self, game: &Game) -> Move {
        let best = maxes(game.moves(), |m| match m {
            Move::BuyDevelopment { card, .. } => f64::from(card.victory_points),
            _ => 0.0,
        });
        pick(&mut self.rng, &best)
    }
}

/// Picks the move leading to the best-valued position, breaking ties randomly.
#[derive(Clone, Debug)]
pub struct DirectValuePlayer {
    rng: GameRng,
    value: ValueFunction,
}

impl DirectValuePlayer {
    #[must_use]
    pub fn new(rng: GameRng, value: ValueFunction) -> Self {
        Self { rng, value }
    }
}

impl MoveSelector for DirectValuePlayer {
    fn select_move(&mut self, game: &Game) -> Move {
        let player = game.current_player();
        let best = maxes(game.moves(), |m| match game.take_move(m) {
            Ok(outcome) => self.value.compute_for_player(&outcome, player),
            Err(err) => {
                error!(%err, "generated move failed to apply");
                f64::NEG_INFINITY
            }
        });
        pick(&mut self.rng, &best)
    }
}

/// Delegates to several selectors, each shown its own reshuffle of the hidden
/// decks, and plays the move most of them chose.
///
/// Ties go to the move first proposed.
pub struct ShufflingEnsemble {
    shuffler: RandomShuffler,
    delegates: Vec<Box<dyn MoveSelector>>,
}

impl ShufflingEnsemble {
    #[must_use]
    pub fn new(shuffler: RandomShuffler, delegates: Vec<Box<dyn MoveSelector>>) -> Self {
        Self { shuffler, delegates }
    }

    /// An ensemble of `copies` selectors built by `factory`, each handed its
    /// own fork of `rng`. The shuffler draws from a further fork.
    pub fn from_copies(
        mut rng: GameRng,
        copies: usize,
        mut factory: impl FnMut(GameRng) -> Box<dyn MoveSelector>,
    ) -> Self {
        let delegates = (0..copies).map(|_| factory(rng.fork())).collect();
        Self::new(RandomShuffler::new(rng.fork()), delegates)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl MoveSelector for ShufflingEnsemble {
    fn select_move(&mut self, game: &Game) -> Move {
        let mut order = Vec::new();
        let mut votes: FxHashMap<Move, usize> = FxHashMap::default();

        for delegate in &mut self.delegates {
            let shuffled = self.shuffler.shuffle(game);
            let choice = delegate.select_move(&shuffled);
            let count = votes.entry(choice).or_insert(0);
            if *count == 0 {
                order.push(choice);
            }
            *count += 1;
        }

        let mut winner = None;
        let mut best = 0;
        for choice in order {
            let count = votes[&choice];
            if count > best {
                best = count;
                winner = Some(choice);
            }
        }

        match winner {
            Some(choice) => {
                info!(
                    votes = best,
                    delegates = self.delegates.len(),
                    "selecting most popular move {choice}"
                );
                choice
            }
            None => game.moves().into_iter().next().unwrap_or(Move::DoNothing),
        }
    }
}
