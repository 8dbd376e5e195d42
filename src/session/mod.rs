//! Game session wiring.
//!
//! `GameSession` plays the role of the owning application: it holds the
//! live grid, alternates turns, detects the end of the game through the
//! shared evaluator and asks the search for the computer's move.

pub mod config;
pub mod game;

pub use config::{Mode, SessionConfig};
pub use game::{GameSession, Move, Status};
