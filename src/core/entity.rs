//! Board entities: snakes and ladders.
//!
//! An entity anchors at its start cell (a snake's head, a ladder's bottom)
//! and transforms a player who lands exactly on the anchor to its end cell
//! (tail / top). Entities are built once at board construction and never
//! change afterwards.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Linear cell number on the board. 0 is the off-board start position;
/// playable cells are `1..=total_cells`.
pub type Cell = u16;

/// Which way an entity moves a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Snake,
    Ladder,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Snake => write!(f, "snake"),
            EntityKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A snake or ladder, anchored at its start cell.
///
/// Invariants enforced at construction:
/// - `Snake`: `head > tail`
/// - `Ladder`: `bottom < top`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Snake { head: Cell, tail: Cell },
    Ladder { bottom: Cell, top: Cell },
}

impl Entity {
    /// Create a snake. Fails unless `head > tail`.
    pub fn snake(head: Cell, tail: Cell) -> Result<Self, GameError> {
        if head <= tail {
            return Err(GameError::SnakeOrdering { head, tail });
        }
        Ok(Entity::Snake { head, tail })
    }

    /// Create a ladder. Fails unless `bottom < top`.
    pub fn ladder(bottom: Cell, top: Cell) -> Result<Self, GameError> {
        if bottom >= top {
            return Err(GameError::LadderOrdering { bottom, top });
        }
        Ok(Entity::Ladder { bottom, top })
    }

    /// The cell this entity is anchored at: a snake's head, a ladder's bottom.
    #[must_use]
    pub const fn anchor(&self) -> Cell {
        match *self {
            Entity::Snake { head, .. } => head,
            Entity::Ladder { bottom, .. } => bottom,
        }
    }

    /// The cell a player is moved to when landing on the anchor.
    #[must_use]
    pub const fn end(&self) -> Cell {
        match *self {
            Entity::Snake { tail, .. } => tail,
            Entity::Ladder { top, .. } => top,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Entity::Snake { .. } => EntityKind::Snake,
            Entity::Ladder { .. } => EntityKind::Ladder,
        }
    }

    /// Apply this entity's one-step transform.
    ///
    /// Returns the end cell if `position` is the anchor, otherwise
    /// `position` unchanged.
    #[must_use]
    pub const fn transform(&self, position: Cell) -> Cell {
        if position == self.anchor() {
            self.end()
        } else {
            position
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind(), self.anchor(), self.end())
    }
}
