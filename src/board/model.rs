//! Board model: serpentine cell layout and entity lookups.
//!
//! Cells are numbered `1..=total_cells` in boustrophedon order with row 0
//! at the bottom: even rows run left-to-right, odd rows right-to-left.
//! Entities are stored by anchor cell; the board is immutable once built.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::generator::generate_entities;
use crate::core::{Cell, Entity, GameError, GameRng, Level, PlacementMode, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// 2-D location of a cell: `row` 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u16,
    pub column: u16,
    pub cell: Cell,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) cell {}", self.row, self.column, self.cell)
    }
}

/// Immutable game board: size, entity map, placement mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    total_cells: Cell,
    entities: FxHashMap<Cell, Entity>,
    mode: PlacementMode,
}

impl Board {
    /// Build a board by running the placement engine.
    pub fn generate(
        size: u16,
        level: Level,
        mode: PlacementMode,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::BoardSize(size));
        }
        let entities = generate_entities(size * size, level, mode, rng);
        Self::from_entities(size, entities, mode)
    }

    /// Build a board from a pre-resolved entity list.
    ///
    /// Fails on out-of-range size, endpoints outside `(0, total_cells)`,
    /// or two entities sharing an anchor cell.
    pub fn from_entities(
        size: u16,
        entities: Vec<Entity>,
        mode: PlacementMode,
    ) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::BoardSize(size));
        }
        let total_cells = size * size;

        let mut map: FxHashMap<Cell, Entity> = FxHashMap::default();
        map.reserve(entities.len());
        for entity in entities {
            for cell in [entity.anchor(), entity.end()] {
                if cell == 0 || cell >= total_cells {
                    return Err(GameError::EntityOutOfBounds {
                        cell,
                        total: total_cells,
                    });
                }
            }
            if map.insert(entity.anchor(), entity).is_some() {
                return Err(GameError::DuplicateAnchor(entity.anchor()));
            }
        }

        Ok(Self {
            size,
            total_cells,
            entities: map,
            mode,
        })
    }

    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    #[must_use]
    pub fn total_cells(&self) -> Cell {
        self.total_cells
    }

    #[must_use]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Map a cell number to its serpentine 2-D coordinate.
    pub fn cell_to_coordinate(&self, cell: Cell) -> Result<Coordinate, GameError> {
        if cell < 1 || cell > self.total_cells {
            return Err(GameError::CellOutOfRange {
                cell,
                total: self.total_cells,
            });
        }

        let row = (cell - 1) / self.size;
        let column = if row % 2 == 0 {
            (cell - 1) % self.size
        } else {
            self.size - 1 - ((cell - 1) % self.size)
        };

        Ok(Coordinate { row, column, cell })
    }

    /// Apply the one-step entity transform at `position`.
    ///
    /// Non-anchor cells (including entity end cells) are fixed points;
    /// transforms never chain within one call.
    #[must_use]
    pub fn transform(&self, position: Cell) -> Cell {
        match self.entities.get(&position) {
            Some(entity) => entity.transform(position),
            None => position,
        }
    }

    /// O(1) entity lookup by anchor cell.
    #[must_use]
    pub fn entity_at(&self, position: Cell) -> Option<&Entity> {
        self.entities.get(&position)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether a player may occupy `position` (0 = off-board start).
    #[must_use]
    pub fn is_valid_position(&self, position: Cell) -> bool {
        position <= self.total_cells
    }
}
