//! Game rules: line detection and outcome evaluation.
//!
//! The evaluator is the single source of truth for win/draw detection.
//! Both the search and the session call into it rather than duplicating
//! the line scan.

pub mod outcome;

pub use outcome::{evaluate, winning_line, Outcome, LINES};
