//! Error types for the engine.

use thiserror::Error;

/// Errors reported to callers of the engine and session.
///
/// Every variant is a caller contract violation; the engine never
/// produces partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cell index {0} is out of range (expected 0-8)")]
    CellOutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("game already over")]
    GameOver,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("it is not the human player's turn")]
    NotHumanTurn,
}

impl EngineError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }

    /// True for the `InvalidInput` variant.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::invalid_input("grid has no empty cells");
        assert_eq!(err.to_string(), "invalid input: grid has no empty cells");
        assert!(err.is_invalid_input());

        assert_eq!(
            EngineError::CellOccupied(4).to_string(),
            "cell 4 is already occupied"
        );
        assert!(!EngineError::GameOver.is_invalid_input());
    }
}
