//! Iterative-deepening alpha-beta search.
//!
//! Each iteration is a depth-limited, fail-soft alpha-beta search from the
//! root. Every visited position spends one operation from the budget; when it
//! runs out the unfinished iteration is discarded and the deepest completed
//! one answers. Iteration stops early once a completed search reached only
//! finished games, since deeper searches cannot change the result.

use std::cmp::Reverse;

use tracing::{debug, error, trace, warn};

use super::budget::{OperationBudget, SearchInterrupt};
use super::config::MinimaxConfig;
use super::stats::SearchStats;
use crate::ai::value::ValueFunction;
use crate::ai::MoveSelector;
use crate::core::Player;
use crate::error::ConfigError;
use crate::rules::{Game, Move};

/// The result of searching one position to a fixed depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// The chosen move; `None` for finished games and depth-0 leaves.
    pub best_move: Option<Move>,
    /// Score from the searching player's side.
    pub score: f64,
    /// Whether every leaf reached was a finished game, making the score exact.
    pub perfect: bool,
}

/// What a search decided, with its statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub stats: SearchStats,
}

/// Selects moves by iterative-deepening minimax under an operation budget.
///
/// ```
/// use splendid::ai::{MinimaxConfig, MinimaxPlayer, MoveSelector, ValueFunction};
/// use splendid::cards::GameComponents;
/// use splendid::core::GameRng;
///
/// let game = GameComponents::standard().unwrap().start_game(&mut GameRng::new(7));
/// let mut player = MinimaxPlayer::new(ValueFunction::default(), MinimaxConfig::default().with_ops(200)).unwrap();
///
/// let chosen = player.select_move(&game);
/// assert!(game.moves().contains(&chosen));
/// ```
#[derive(Clone, Debug)]
pub struct MinimaxPlayer {
    value: ValueFunction,
    config: MinimaxConfig,
    last_stats: SearchStats,
}

impl MinimaxPlayer {
    pub fn new(value: ValueFunction, config: MinimaxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            value,
            config,
            last_stats: SearchStats::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Statistics from the most recent `select_move`.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Search `game` by iterative deepening until solved, out of budget, or
    /// at the configured maximum depth.
    #[must_use]
    pub fn search(&self, game: &Game) -> SearchOutcome {
        let mut searcher = Searcher::new(game.current_player(), &self.value, &self.config);
        let mut completed: Option<Evaluation> = None;

        let mut depth = 1;
        while self.config.max_depth == 0 || depth <= self.config.max_depth {
            match searcher.evaluate(game, depth, f64::NEG_INFINITY, f64::INFINITY) {
                Ok(evaluation) => {
                    debug!(
                        depth,
                        score = evaluation.score,
                        best = %describe(evaluation.best_move),
                        "completed search depth"
                    );
                    searcher.stats.completed_depth = depth;
                    searcher.stats.root_score = Some(evaluation.score);
                    completed = Some(evaluation);

                    if evaluation.perfect {
                        debug!(depth, score = evaluation.score, "search tree solved");
                        searcher.stats.solved = true;
                        break;
                    }
                }
                Err(SearchInterrupt::BudgetExhausted) => {
                    debug!(depth, ops = self.config.ops, "operation budget exhausted");
                    break;
                }
                Err(SearchInterrupt::RulesViolation) => break,
            }
            depth += 1;
        }

        let best_move = match completed.and_then(|evaluation| evaluation.best_move) {
            Some(best) => best,
            None => {
                warn!(ops = self.config.ops, "no search depth completed, playing first legal move");
                first_legal_move(game)
            }
        };

        SearchOutcome {
            best_move,
            stats: searcher.stats,
        }
    }

    /// A single search of `game` to exactly `depth`, or `None` if the budget
    /// runs out first.
    #[must_use]
    pub fn evaluate_depth(&self, game: &Game, depth: u32) -> (Option<Evaluation>, SearchStats) {
        let mut searcher = Searcher::new(game.current_player(), &self.value, &self.config);
        let evaluation = searcher
            .evaluate(game, depth, f64::NEG_INFINITY, f64::INFINITY)
            .ok();
        if let Some(evaluation) = evaluation {
            searcher.stats.completed_depth = depth;
            searcher.stats.root_score = Some(evaluation.score);
            searcher.stats.solved = evaluation.perfect;
        }
        (evaluation, searcher.stats)
    }
}

impl MoveSelector for MinimaxPlayer {
    fn select_move(&mut self, game: &Game) -> Move {
        let outcome = self.search(game);
        self.last_stats = outcome.stats;
        outcome.best_move
    }
}

fn first_legal_move(game: &Game) -> Move {
    game.moves().into_iter().next().unwrap_or(Move::DoNothing)
}

fn describe(m: Option<Move>) -> String {
    m.map_or_else(|| "none".to_string(), |m| m.to_string())
}

/// State for one search invocation.
struct Searcher<'a> {
    me: Player,
    value: &'a ValueFunction,
    pruning: bool,
    budget: OperationBudget,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    fn new(me: Player, value: &'a ValueFunction, config: &MinimaxConfig) -> Self {
        Self {
            me,
            value,
            pruning: config.pruning,
            budget: OperationBudget::new(config.ops),
            stats: SearchStats::default(),
        }
    }

    /// Fail-soft alpha-beta to `remaining` plies.
    ///
    /// Children are tried best-kind first. A later child replaces the current
    /// best only if strictly better, so among equal scores the earliest in
    /// that order wins, which puts purchases ahead of everything else.
    fn evaluate(
        &mut self,
        game: &Game,
        remaining: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<Evaluation, SearchInterrupt> {
        self.budget.spend()?;
        self.stats.positions_evaluated += 1;

        if game.winner().is_some() || remaining == 0 {
            return Ok(Evaluation {
                best_move: None,
                score: self.value.compute_for_player(game, self.me),
                perfect: game.winner().is_some(),
            });
        }

        self.stats.nodes_expanded += 1;
        let maximizing = game.current_player() == self.me;

        let mut moves = game.moves();
        moves.sort_by_key(|m| Reverse(m.priority()));

        let mut best: Option<(Move, f64)> = None;
        let mut perfect = true;

        for m in moves {
            let child = game.take_move(&m).map_err(|err| {
                error!(%err, move_ = %m, "generated move failed to apply during search");
                SearchInterrupt::RulesViolation
            })?;
            let result = self.evaluate(&child, remaining - 1, alpha, beta)?;
            perfect &= result.perfect;

            let improves = match best {
                None => true,
                Some((_, score)) if maximizing => result.score > score,
                Some((_, score)) => result.score < score,
            };
            if improves {
                best = Some((m, result.score));
            }

            if !self.pruning {
                continue;
            }
            let Some((_, score)) = best else { continue };
            if maximizing {
                if score >= beta {
                    trace!(remaining, score, beta, "beta cutoff");
                    self.stats.beta_cutoffs += 1;
                    break;
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    trace!(remaining, score, alpha, "alpha cutoff");
                    self.stats.alpha_cutoffs += 1;
                    break;
                }
                beta = beta.min(score);
            }
        }

        Ok(match best {
            Some((best_move, score)) => Evaluation {
                best_move: Some(best_move),
                score,
                perfect,
            },
            // moves() is never empty
            None => Evaluation {
                best_move: None,
                score: self.value.compute_for_player(game, self.me),
                perfect: false,
            },
        })
    }
}
