//! # tictactoe-engine
//!
//! A perfect-play 3×3 tic-tac-toe engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: The evaluator and the search are free of ambient
//!    state. They take a grid snapshot and never mutate the caller's grid.
//!
//! 2. **Exact Play**: Full-depth minimax with depth-weighted terminal
//!    scores. Wins are taken as early as possible, losses delayed as long
//!    as possible, ties broken by the lowest cell index.
//!
//! 3. **Explicit Errors**: Contract violations come back as
//!    `EngineError::InvalidInput`, never as a best-effort move.
//!
//! ## Modules
//!
//! - `core`: Marks, the grid, errors
//! - `rules`: Winning lines and outcome evaluation
//! - `search`: Minimax search, configuration, statistics
//! - `session`: Turn order, play modes and the computer opponent

pub mod core;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Cell, EngineError, Grid, Mark, Result, CELL_COUNT};

pub use crate::rules::{evaluate, winning_line, Outcome, LINES};

pub use crate::search::{
    best_move, score_moves, MinimaxSearch, MoveScore, MoveScores, SearchConfig, SearchStats,
    Strategy, TranspositionTable, WIN_SCORE,
};

pub use crate::session::{GameSession, Mode, Move, SessionConfig, Status};
