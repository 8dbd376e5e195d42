//! Game session: the live grid, turn order and the computer opponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{EngineError, Grid, Mark, Result};
use crate::rules::{evaluate, winning_line, Outcome};
use crate::search::MinimaxSearch;

use super::config::{Mode, SessionConfig};

/// State of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for `to_move`.
    InProgress { to_move: Mark },
    /// `mark` completed `line`.
    Won { mark: Mark, line: [usize; 3] },
    /// Grid filled without a completed line.
    Drawn,
}

impl Status {
    /// Check if the game is over.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

/// A move as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub mark: Mark,
    pub index: usize,
}

/// A single game between two humans or a human and the engine.
///
/// The session owns the grid. The engine only ever receives snapshots of
/// it, and the session applies whatever index comes back.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    grid: Grid,
    status: Status,
    history: Vec<Move>,
    search: MinimaxSearch,
}

impl GameSession {
    /// Start a new game.
    pub fn new(config: SessionConfig) -> Self {
        let search = MinimaxSearch::new(config.search.clone());
        let status = Status::InProgress { to_move: config.first };

        Self {
            config,
            grid: Grid::new(),
            status,
            history: Vec::with_capacity(9),
            search,
        }
    }

    /// Start a game between two humans.
    pub fn two_player() -> Self {
        Self::new(SessionConfig::default())
    }

    /// Start a game against the engine playing `computer`.
    pub fn vs_computer(computer: Mark) -> Self {
        Self::new(SessionConfig::default().with_mode(Mode::VsComputer { computer }))
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the play mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Get the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark to play next, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        match self.status {
            Status::InProgress { to_move } => Some(to_move),
            Status::Won { .. } | Status::Drawn => None,
        }
    }

    /// Check if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Check if the engine should move next.
    pub fn is_computer_turn(&self) -> bool {
        match (self.to_move(), self.config.mode.computer()) {
            (Some(to_move), Some(computer)) => to_move == computer,
            _ => false,
        }
    }

    /// Play a human move at `index`.
    pub fn play(&mut self, index: usize) -> Result<Status> {
        let mark = self.to_move().ok_or(EngineError::GameOver)?;
        if self.is_computer_turn() {
            return Err(EngineError::NotHumanTurn);
        }
        self.apply(index, mark)
    }

    /// Let the engine play its move. Returns the chosen index.
    pub fn computer_move(&mut self) -> Result<usize> {
        let mark = self.to_move().ok_or(EngineError::GameOver)?;
        if !self.is_computer_turn() {
            return Err(EngineError::NotComputerTurn);
        }

        let index = self.search.best_move(&self.grid, mark)?;
        debug!(%mark, index, nodes = self.search.stats().nodes, "computer move");
        self.apply(index, mark)?;
        Ok(index)
    }

    /// Clear the grid, keeping the current mode.
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.history.clear();
        self.status = Status::InProgress { to_move: self.config.first };
    }

    /// Clear the grid and switch to a new mode.
    pub fn start(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.restart();
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<Status> {
        self.grid.place(index, mark)?;
        self.history.push(Move { mark, index });

        // `winning_line` only locates the line `evaluate` already found.
        self.status = match (evaluate(&self.grid), winning_line(&self.grid)) {
            (Outcome::Win(winner), Some((line, _))) => Status::Won { mark: winner, line },
            (Outcome::Draw, _) => Status::Drawn,
            _ => Status::InProgress { to_move: mark.opponent() },
        };

        trace!(%mark, index, status = ?self.status, "move applied");
        Ok(self.status)
    }
}
