//! Self-play loop pitting two move selectors against each other.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::record::GameRecord;
use super::reporter::Reporter;
use super::shuffler::Shuffler;
use crate::ai::MoveSelector;
use crate::core::{Player, PlayerMap};
use crate::error::RulesError;
use crate::rules::Game;

/// Configuration for self-play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Last round allowed to start. A game still running after it is
    /// abandoned and awarded to player one. `None` plays to the end.
    pub cutoff: Option<u32>,
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cutoff(mut self, cutoff: u32) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
}

/// Runs games between two selectors.
///
/// Each turn the player to move picks a move, the reporter sees it, and the
/// hidden decks are reshuffled before the move is applied, so nothing a
/// selector learns about deck order carries over.
pub struct SelfPlayEngine<S: Shuffler, R: Reporter> {
    players: PlayerMap<Box<dyn MoveSelector>>,
    shuffler: S,
    reporter: R,
    config: SelfPlayConfig,
}

impl<S: Shuffler, R: Reporter> SelfPlayEngine<S, R> {
    pub fn new(
        player_one: Box<dyn MoveSelector>,
        player_two: Box<dyn MoveSelector>,
        shuffler: S,
        reporter: R,
        config: SelfPlayConfig,
    ) -> Self {
        Self {
            players: PlayerMap::from_values(player_one, player_two),
            shuffler,
            reporter,
            config,
        }
    }

    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Play `initial` to completion or to the cutoff.
    ///
    /// Fails only if a selector returns a move that cannot be applied.
    pub fn run(&mut self, initial: Game) -> Result<GameRecord, RulesError> {
        self.reporter.describe_game(&initial);

        let mut game = initial;
        let mut history = Vec::new();

        loop {
            if let Some(winner) = game.winner() {
                debug!(%winner, turn = %game.turn(), "game over");
                return Ok(GameRecord {
                    winner,
                    history,
                    cut_off: false,
                });
            }

            if let Some(cutoff) = self.config.cutoff {
                if game.turn().index > cutoff {
                    warn!(cutoff, "game passed the turn cutoff, awarding it to player one");
                    return Ok(GameRecord {
                        winner: Player::One,
                        history,
                        cut_off: true,
                    });
                }
            }

            let chosen = self.players[game.current_player()].select_move(&game);
            self.reporter.report_move(&game, &chosen);

            game = self.shuffler.shuffle(&game).take_move(&chosen)?;
            history.push(chosen);
        }
    }
}
