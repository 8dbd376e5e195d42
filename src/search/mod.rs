//! Perfect-play move search.
//!
//! ## Overview
//!
//! Full-depth minimax over the remaining game tree with depth-weighted
//! terminal scores, so the engine takes the fastest win and delays a loss
//! as long as possible. Ties go to the lowest cell index.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_engine::core::{Grid, Mark};
//! use tictactoe_engine::search::{MinimaxSearch, SearchConfig, Strategy};
//!
//! let grid: Grid = "XX. .O. ..O".parse().unwrap();
//!
//! let config = SearchConfig::default().with_strategy(Strategy::AlphaBeta);
//! let mut search = MinimaxSearch::new(config);
//!
//! // O has to block the top row.
//! assert_eq!(search.best_move(&grid, Mark::O).unwrap(), 2);
//! println!("visited {} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;
pub mod table;

pub use config::{SearchConfig, Strategy};
pub use minimax::{best_move, score_moves, MinimaxSearch, MoveScore, MoveScores, WIN_SCORE};
pub use stats::SearchStats;
pub use table::TranspositionTable;
