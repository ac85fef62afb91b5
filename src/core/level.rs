//! Difficulty levels: snake and ladder density ratios.
//!
//! Entity counts are derived as `floor(total_cells * ratio)`. Ratios must
//! lie within `(0, 0.5]`.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Snake/ladder density for board generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    snake_ratio: f64,
    ladder_ratio: f64,
}

impl Level {
    /// 10% snakes, 15% ladders.
    #[must_use]
    pub const fn easy() -> Self {
        Self::new_unchecked(0.10, 0.15)
    }

    /// 15% snakes, 12% ladders.
    #[must_use]
    pub const fn medium() -> Self {
        Self::new_unchecked(0.15, 0.12)
    }

    /// 20% snakes, 10% ladders.
    #[must_use]
    pub const fn hard() -> Self {
        Self::new_unchecked(0.20, 0.10)
    }

    /// Custom ratios. Each must be within `(0, 0.5]`.
    pub fn custom(snake_ratio: f64, ladder_ratio: f64) -> Result<Self, GameError> {
        if !(snake_ratio > 0.0 && snake_ratio <= 0.5) {
            return Err(GameError::SnakeRatio(snake_ratio));
        }
        if !(ladder_ratio > 0.0 && ladder_ratio <= 0.5) {
            return Err(GameError::LadderRatio(ladder_ratio));
        }
        Ok(Self::new_unchecked(snake_ratio, ladder_ratio))
    }

    pub(crate) const fn new_unchecked(snake_ratio: f64, ladder_ratio: f64) -> Self {
        Self {
            snake_ratio,
            ladder_ratio,
        }
    }

    #[must_use]
    pub fn snake_ratio(&self) -> f64 {
        self.snake_ratio
    }

    #[must_use]
    pub fn ladder_ratio(&self) -> f64 {
        self.ladder_ratio
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::medium()
    }
}
