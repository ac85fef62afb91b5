//! Game configuration: board size, difficulty, placement mode, seed.
//!
//! A `GameConfig` is a plain immutable value. Named presets are free
//! constructor functions rather than a builder object.

use serde::{Deserialize, Serialize};

use super::entity::Cell;
use super::error::GameError;
use super::level::Level;

/// Smallest legal board side length.
pub const MIN_BOARD_SIZE: u16 = 5;
/// Largest legal board side length.
pub const MAX_BOARD_SIZE: u16 = 15;

/// How the placement engine distributes entities over the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Independent rejection sampling over the whole board.
    Uniform,
    /// Zone-partitioned sampling with an anti-clustering pass.
    #[default]
    Balanced,
}

/// Resolved board configuration consumed at game construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    board_size: u16,
    level: Level,
    mode: PlacementMode,
    seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration. Fails if `board_size` is outside
    /// `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
    pub fn new(board_size: u16, level: Level, mode: PlacementMode) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(GameError::BoardSize(board_size));
        }
        Ok(Self {
            board_size,
            level,
            mode,
            seed: None,
        })
    }

    /// Fix the generation seed for reproducible boards and roll sequences.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    /// Number of playable cells: `board_size²`.
    #[must_use]
    pub fn total_cells(&self) -> Cell {
        self.board_size * self.board_size
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// 7x7 balanced board with few snakes and plenty of ladders.
#[must_use]
pub fn beginner_config() -> GameConfig {
    GameConfig {
        board_size: 7,
        level: Level::new_unchecked(0.08, 0.18),
        mode: PlacementMode::Balanced,
        seed: None,
    }
}

/// 10x10 uniform board, snake-heavy.
#[must_use]
pub fn expert_config() -> GameConfig {
    GameConfig {
        board_size: 10,
        level: Level::new_unchecked(0.25, 0.08),
        mode: PlacementMode::Uniform,
        seed: None,
    }
}

/// 8x8 balanced board at medium density.
#[must_use]
pub fn aesthetic_config() -> GameConfig {
    GameConfig {
        board_size: 8,
        level: Level::medium(),
        mode: PlacementMode::Balanced,
        seed: None,
    }
}
