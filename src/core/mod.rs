//! Core types: marks, the grid, and errors.
//!
//! Everything here is a plain value. The application owns the live grid;
//! the evaluator and the search only ever see snapshots.

pub mod error;
pub mod grid;
pub mod mark;

pub use error::{EngineError, Result};
pub use grid::{Grid, CELL_COUNT};
pub use mark::{Cell, Mark};
