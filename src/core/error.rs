//! Error type for construction validation and board queries.
//!
//! Construction errors are immediate and non-recoverable: the engine never
//! coerces an invalid configuration into a valid one. Generation
//! under-shoot (fewer entities placed than requested) is NOT an error;
//! see `board::generator`.

use thiserror::Error;

use super::entity::Cell;

/// Everything that can go wrong while building a game or querying a board.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    #[error("board size must be between 5 and 15, got {0}")]
    BoardSize(u16),

    #[error("snake ratio must be within (0, 0.5], got {0}")]
    SnakeRatio(f64),

    #[error("ladder ratio must be within (0, 0.5], got {0}")]
    LadderRatio(f64),

    #[error("player count must be between 2 and 6, got {0}")]
    PlayerCount(usize),

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),

    #[error("snake head {head} must be greater than tail {tail}")]
    SnakeOrdering { head: Cell, tail: Cell },

    #[error("ladder bottom {bottom} must be less than top {top}")]
    LadderOrdering { bottom: Cell, top: Cell },

    #[error("entity endpoint {cell} outside playable range 1..{total}")]
    EntityOutOfBounds { cell: Cell, total: Cell },

    #[error("two entities share anchor cell {0}")]
    DuplicateAnchor(Cell),

    #[error("cell {cell} outside board range 1..={total}")]
    CellOutOfRange { cell: Cell, total: Cell },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::BoardSize(20);
        assert_eq!(err.to_string(), "board size must be between 5 and 15, got 20");

        let err = GameError::SnakeOrdering { head: 3, tail: 9 };
        assert_eq!(err.to_string(), "snake head 3 must be greater than tail 9");

        let err = GameError::CellOutOfRange { cell: 50, total: 49 };
        assert_eq!(err.to_string(), "cell 50 outside board range 1..=49");
    }
}
