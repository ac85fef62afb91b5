//! Entity placement engine.
//!
//! Produces a set of non-overlapping snakes and ladders for a board size
//! and difficulty. Two modes:
//!
//! - **Uniform**: independent rejection sampling over the whole board.
//! - **Balanced**: the board is partitioned into zones, entities are
//!   sampled per zone, and a final anti-clustering pass spreads anchors.
//!
//! Both modes work under bounded attempt budgets: an entity whose budget
//! is exhausted is skipped, so the engine may return fewer entities than
//! the targets `floor(total_cells * ratio)`. Under-generation is an
//! accepted outcome, never an error. What IS guaranteed:
//!
//! - every snake has `head > tail`, every ladder `bottom < top`
//! - every endpoint lies strictly inside `(0, total_cells)`
//! - no endpoint is reused across the returned entities, so anchors
//!   are unique
//!
//! All randomness flows through the caller's [`GameRng`] handle; identical
//! `(total_cells, level, mode, seed)` reproduce the identical entity list.

use rustc_hash::FxHashSet;

use crate::core::{Cell, Entity, GameRng, Level, PlacementMode};

/// Attempt budget per entity in uniform mode.
const UNIFORM_ATTEMPTS: usize = 100;
/// Attempt budget per entity within one zone in balanced mode.
const ZONE_ATTEMPTS: usize = 50;
/// Balanced mode drops entities anchored closer than this to another anchor.
const MIN_ANCHOR_SPACING: Cell = 3;

/// Generate the snake/ladder set for a board.
///
/// Targets are `floor(total_cells * ratio)` per entity kind; the result
/// may fall short of either target (see module docs).
#[must_use]
pub fn generate_entities(
    total_cells: Cell,
    level: Level,
    mode: PlacementMode,
    rng: &mut GameRng,
) -> Vec<Entity> {
    let snake_count = (f64::from(total_cells) * level.snake_ratio()) as usize;
    let ladder_count = (f64::from(total_cells) * level.ladder_ratio()) as usize;

    match mode {
        PlacementMode::Uniform => generate_uniform(total_cells, snake_count, ladder_count, rng),
        PlacementMode::Balanced => generate_balanced(total_cells, snake_count, ladder_count, rng),
    }
}

// === Uniform mode ===

fn generate_uniform(
    total_cells: Cell,
    snake_count: usize,
    ladder_count: usize,
    rng: &mut GameRng,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(snake_count + ladder_count);
    let mut occupied: FxHashSet<Cell> = FxHashSet::default();

    // Snakes first; their endpoints constrain ladder placement.
    for _ in 0..snake_count {
        if let Some(snake) = sample_snake(total_cells, &occupied, rng) {
            occupied.insert(snake.anchor());
            occupied.insert(snake.end());
            entities.push(snake);
        }
    }

    for _ in 0..ladder_count {
        if let Some(ladder) = sample_ladder(total_cells, &occupied, rng) {
            occupied.insert(ladder.anchor());
            occupied.insert(ladder.end());
            entities.push(ladder);
        }
    }

    entities
}

fn sample_snake(total_cells: Cell, occupied: &FxHashSet<Cell>, rng: &mut GameRng) -> Option<Entity> {
    let min_distance = (total_cells / 20).max(3);
    let min_head = (total_cells / 4).max(10);

    for _ in 0..UNIFORM_ATTEMPTS {
        let head = rng.gen_range(min_head..total_cells);

        let max_tail = head - min_distance;
        if max_tail <= 1 {
            continue;
        }
        let tail = rng.gen_range(1..max_tail + 1);

        if !occupied.contains(&head) && !occupied.contains(&tail) {
            return Entity::snake(head, tail).ok();
        }
    }
    None
}

fn sample_ladder(
    total_cells: Cell,
    occupied: &FxHashSet<Cell>,
    rng: &mut GameRng,
) -> Option<Entity> {
    let min_distance = (total_cells / 20).max(3);
    let max_bottom = (total_cells * 3 / 4).max(total_cells.saturating_sub(10));

    for _ in 0..UNIFORM_ATTEMPTS {
        let bottom = rng.gen_range(1..max_bottom + 1);

        let min_top = bottom + min_distance;
        if min_top >= total_cells {
            continue;
        }
        let top = rng.gen_range(min_top..total_cells);

        if !occupied.contains(&bottom) && !occupied.contains(&top) {
            return Entity::ladder(bottom, top).ok();
        }
    }
    None
}

// === Balanced mode ===

fn generate_balanced(
    total_cells: Cell,
    snake_count: usize,
    ladder_count: usize,
    rng: &mut GameRng,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(snake_count + ladder_count);
    let mut occupied: FxHashSet<Cell> = FxHashSet::default();
    let zones = zone_count(total_cells);

    let snakes_per_zone = (snake_count / zones as usize).max(1);
    let mut snakes_placed = 0;
    'snakes: for zone in 0..zones {
        let (zone_start, zone_end) = zone_bounds(total_cells, zone, zones);
        for _ in 0..snakes_per_zone {
            if snakes_placed >= snake_count {
                break 'snakes;
            }
            if let Some(snake) = sample_zone_snake(zone_start, zone_end, &occupied, rng) {
                occupied.insert(snake.anchor());
                occupied.insert(snake.end());
                entities.push(snake);
                snakes_placed += 1;
            }
        }
    }

    let ladders_per_zone = (ladder_count / zones as usize).max(1);
    let mut ladders_placed = 0;
    'ladders: for zone in 0..zones {
        let (zone_start, zone_end) = zone_bounds(total_cells, zone, zones);
        for _ in 0..ladders_per_zone {
            if ladders_placed >= ladder_count {
                break 'ladders;
            }
            if let Some(ladder) =
                sample_zone_ladder(zone_start, zone_end, total_cells, &occupied, rng)
            {
                occupied.insert(ladder.anchor());
                occupied.insert(ladder.end());
                entities.push(ladder);
                ladders_placed += 1;
            }
        }
    }

    spread_anchors(entities)
}

/// Number of zones the board is partitioned into: at most 4, at least 1.
fn zone_count(total_cells: Cell) -> u16 {
    let zones = (f64::from(total_cells / 10).sqrt() as u16).min(4);
    zones.max(1)
}

/// Zone `zone` covers `[total*zone/zones + 1, total*(zone+1)/zones]`.
fn zone_bounds(total_cells: Cell, zone: u16, zones: u16) -> (Cell, Cell) {
    let start = total_cells * zone / zones + 1;
    let end = total_cells * (zone + 1) / zones;
    (start, end)
}

fn sample_zone_snake(
    zone_start: Cell,
    zone_end: Cell,
    occupied: &FxHashSet<Cell>,
    rng: &mut GameRng,
) -> Option<Entity> {
    let width = zone_end - zone_start;
    let min_distance = (width / 8).max(2);

    for _ in 0..ZONE_ATTEMPTS {
        // Head in the upper half of the zone.
        let head_start = (zone_start + min_distance).max(zone_start + width / 2);
        if head_start >= zone_end {
            continue;
        }
        let head = rng.gen_range(head_start..zone_end);

        let max_tail = head - min_distance;
        if max_tail <= zone_start {
            continue;
        }
        let tail = rng.gen_range(zone_start..max_tail.min(zone_end));

        if !occupied.contains(&head) && !occupied.contains(&tail) {
            return Entity::snake(head, tail).ok();
        }
    }
    None
}

fn sample_zone_ladder(
    zone_start: Cell,
    zone_end: Cell,
    total_cells: Cell,
    occupied: &FxHashSet<Cell>,
    rng: &mut GameRng,
) -> Option<Entity> {
    let width = zone_end - zone_start;
    let min_distance = (width / 10).max(3);

    for _ in 0..ZONE_ATTEMPTS {
        // Bottom in the lower half of the zone.
        let bottom_end = zone_start + width / 2;
        if bottom_end <= zone_start {
            continue;
        }
        let bottom = rng.gen_range(zone_start..bottom_end);

        let min_top = bottom + min_distance;
        if min_top >= total_cells {
            continue;
        }
        // The top may land past the zone, anywhere below the final cell.
        let top = rng.gen_range(min_top..total_cells);

        if is_open(bottom, total_cells, occupied) && is_open(top, total_cells, occupied) {
            return Entity::ladder(bottom, top).ok();
        }
    }
    None
}

fn is_open(position: Cell, total_cells: Cell, occupied: &FxHashSet<Cell>) -> bool {
    position > 0 && position < total_cells && !occupied.contains(&position)
}

/// Anti-clustering pass: keep entities in generation order, dropping any
/// whose anchor lies within [`MIN_ANCHOR_SPACING`] of an already-kept
/// anchor. Survivors are mutually spaced; the count may drop below target.
fn spread_anchors(entities: Vec<Entity>) -> Vec<Entity> {
    let mut kept: Vec<Entity> = Vec::with_capacity(entities.len());
    for entity in entities {
        let crowded = kept
            .iter()
            .any(|other| entity.anchor().abs_diff(other.anchor()) < MIN_ANCHOR_SPACING);
        if !crowded {
            kept.push(entity);
        }
    }
    kept
}
