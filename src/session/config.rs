//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::search::SearchConfig;

/// Who controls each mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Both marks are played through `GameSession::play`.
    #[default]
    TwoPlayer,
    /// One mark is played by the search engine.
    VsComputer {
        /// The mark the engine plays.
        computer: Mark,
    },
}

impl Mode {
    /// The mark played by the engine, if any.
    #[must_use]
    pub fn computer(self) -> Option<Mark> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VsComputer { computer } => Some(computer),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Who plays which mark.
    pub mode: Mode,

    /// Mark that opens every game.
    pub first: Mark,

    /// Search settings for the computer side.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::TwoPlayer,
            first: Mark::X,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new config with a custom mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with a custom opening mark.
    #[must_use]
    pub fn with_first(mut self, first: Mark) -> Self {
        self.first = first;
        self
    }

    /// Create a new config with custom search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
