//! Depth-weighted minimax search.
//!
//! The side to move at the root is the maximizer. Terminal positions score
//! `WIN_SCORE - depth` for a maximizer win, `depth - WIN_SCORE` for a
//! minimizer win and 0 for a draw, where depth counts plies made inside the
//! search (0 at the root's children). Among equally good moves the lowest
//! cell index wins.
//!
//! The search copies the caller's grid into a scratch buffer owned by the
//! call and explores it with scoped trial placements, so the caller never
//! observes a mutation.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{EngineError, Grid, Mark, Result};
use crate::rules::{evaluate, Outcome};

use super::config::{SearchConfig, Strategy};
use super::stats::SearchStats;
use super::table::TranspositionTable;

/// Score of a win on the very first ply.
pub const WIN_SCORE: i32 = 10;

/// A legal move together with its minimax score for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell index, 0-8.
    pub index: usize,
    /// Depth-weighted score from the mover's point of view.
    pub score: i32,
}

/// List of move scores; a node never has more than 9 children.
pub type MoveScores = SmallVec<[MoveScore; 9]>;

/// Minimax search context.
///
/// Owns the configuration, statistics and the transposition table. All
/// per-search state is reset at the start of every call, so one context
/// can be reused for any number of positions.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics from the most recent search.
    stats: SearchStats,

    /// Scores for `Strategy::Memoized`.
    table: TranspositionTable,

    /// Side to move at the root of the current search.
    maximizer: Mark,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        let table = match config.strategy {
            Strategy::Memoized => TranspositionTable::with_capacity(config.table_capacity),
            Strategy::Exhaustive | Strategy::AlphaBeta => TranspositionTable::default(),
        };

        Self {
            config,
            stats: SearchStats::default(),
            table,
            maximizer: Mark::X,
        }
    }

    /// Get the search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best cell index for `side` to play.
    ///
    /// Fails with `InvalidInput` if the grid is full or already won.
    pub fn best_move(&mut self, grid: &Grid, side: Mark) -> Result<usize> {
        self.search(grid, side).map(|best| best.index)
    }

    /// Best move for `side` together with its score.
    #[instrument(level = "debug", skip(self, grid), fields(grid = %grid))]
    pub fn search(&mut self, grid: &Grid, side: Mark) -> Result<MoveScore> {
        validate(grid)?;
        let start = self.begin(side);

        let mut scratch = *grid;
        let mut best: Option<MoveScore> = None;

        for index in legal_moves(&scratch) {
            // Moves that cannot beat the current best only need a bound.
            let alpha = best.map_or(i32::MIN, |b| b.score);
            let score = self.score_child(&mut scratch, index, side, alpha);

            if best.map_or(true, |b| score > b.score) {
                best = Some(MoveScore { index, score });
            }
        }

        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        let best = best.ok_or_else(|| EngineError::invalid_input("grid has no empty cells"))?;
        debug!(
            index = best.index,
            score = best.score,
            nodes = self.stats.nodes,
            time_us = self.stats.time_us,
            "search complete"
        );
        Ok(best)
    }

    /// Exact score of every legal move for `side`, in ascending index order.
    #[instrument(level = "debug", skip(self, grid), fields(grid = %grid))]
    pub fn score_moves(&mut self, grid: &Grid, side: Mark) -> Result<MoveScores> {
        validate(grid)?;
        let start = self.begin(side);

        let mut scratch = *grid;
        let scores = legal_moves(&scratch)
            .into_iter()
            .map(|index| MoveScore {
                index,
                score: self.score_child(&mut scratch, index, side, i32::MIN),
            })
            .collect::<MoveScores>();

        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(moves = scores.len(), nodes = self.stats.nodes, "scored moves");
        Ok(scores)
    }

    /// Reset per-search state.
    fn begin(&mut self, side: Mark) -> Instant {
        self.stats.reset();
        self.table.clear();
        self.maximizer = side;
        Instant::now()
    }

    /// Score of playing `index` at the root.
    ///
    /// With alpha-beta a result `<= alpha` is only an upper bound; callers
    /// that need exact scores pass `i32::MIN`.
    fn score_child(&mut self, grid: &mut Grid, index: usize, side: Mark, alpha: i32) -> i32 {
        let mut trial = grid.trial(index, side);
        match self.config.strategy {
            Strategy::Exhaustive => self.minimax(&mut trial, 0, side.opponent()),
            Strategy::AlphaBeta => self.alphabeta(&mut trial, 0, side.opponent(), alpha, i32::MAX),
            Strategy::Memoized => self.memoized(&mut trial, 0, side.opponent()),
        }
    }

    /// Score a node if the game is already decided.
    fn terminal_score(&mut self, grid: &Grid, depth: i32) -> Option<i32> {
        self.stats.nodes += 1;

        let score = match evaluate(grid) {
            Outcome::Continue => return None,
            Outcome::Win(mark) if mark == self.maximizer => WIN_SCORE - depth,
            Outcome::Win(_) => depth - WIN_SCORE,
            Outcome::Draw => 0,
        };
        self.stats.terminal_nodes += 1;
        Some(score)
    }

    fn minimax(&mut self, grid: &mut Grid, depth: i32, to_move: Mark) -> i32 {
        if let Some(score) = self.terminal_score(grid, depth) {
            return score;
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in legal_moves(grid) {
            let mut trial = grid.trial(index, to_move);
            let score = self.minimax(&mut trial, depth + 1, to_move.opponent());
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }

    fn alphabeta(
        &mut self,
        grid: &mut Grid,
        depth: i32,
        to_move: Mark,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(score) = self.terminal_score(grid, depth) {
            return score;
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in legal_moves(grid) {
            let mut trial = grid.trial(index, to_move);
            let score = self.alphabeta(&mut trial, depth + 1, to_move.opponent(), alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    fn memoized(&mut self, grid: &mut Grid, depth: i32, to_move: Mark) -> i32 {
        if let Some(score) = self.table.get(grid) {
            self.stats.table_hits += 1;
            return score;
        }

        let score = match self.terminal_score(grid, depth) {
            Some(score) => score,
            None => {
                let maximizing = to_move == self.maximizer;
                let mut best = if maximizing { i32::MIN } else { i32::MAX };

                for index in legal_moves(grid) {
                    let mut trial = grid.trial(index, to_move);
                    let score = self.memoized(&mut trial, depth + 1, to_move.opponent());
                    best = if maximizing { best.max(score) } else { best.min(score) };
                }

                best
            }
        };

        self.table.insert(*grid, score);
        score
    }
}

/// Empty cells in ascending order, collected so the grid can be borrowed
/// mutably while iterating.
fn legal_moves(grid: &Grid) -> SmallVec<[usize; 9]> {
    grid.empty_cells().collect()
}

/// Reject grids the search has nothing to say about.
fn validate(grid: &Grid) -> Result<()> {
    match evaluate(grid) {
        Outcome::Continue => Ok(()),
        Outcome::Win(mark) => Err(EngineError::invalid_input(format!(
            "grid already won by {}",
            mark
        ))),
        Outcome::Draw => Err(EngineError::invalid_input("grid has no empty cells")),
    }
}

/// Best cell index for `side` using the default exhaustive search.
///
/// ```
/// use tictactoe_engine::core::{Grid, Mark};
/// use tictactoe_engine::search::best_move;
///
/// let grid: Grid = "OO. .X. ...".parse().unwrap();
/// assert_eq!(best_move(&grid, Mark::O).unwrap(), 2);
/// ```
pub fn best_move(grid: &Grid, side: Mark) -> Result<usize> {
    MinimaxSearch::default().best_move(grid, side)
}

/// Exact score of every legal move using the default exhaustive search.
pub fn score_moves(grid: &Grid, side: Mark) -> Result<MoveScores> {
    MinimaxSearch::default().score_moves(grid, side)
}
