//! # snakes-ladders
//!
//! A snakes-and-ladders game engine with procedural board generation.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: All random decisions flow through a seeded
//!    [`GameRng`] handle owned by the caller. Same seed, same board, same
//!    roll sequence. No process-wide RNG state.
//!
//! 2. **Configuration over convention**: Board size, difficulty ratios,
//!    and placement mode are plain immutable values ([`GameConfig`]);
//!    presets are free constructor functions, not builder objects.
//!
//! 3. **Validated construction**: Invalid configuration (board size,
//!    ratios, player roster, malformed entities) fails at construction
//!    with a [`GameError`]. During play, `play_turn` never fails.
//!
//! ## Modules
//!
//! - `core`: entities, players, difficulty levels, configuration, RNG, dice
//! - `board`: serpentine board model and the entity placement engine
//! - `game`: the turn-resolution engine and turn results
//! - `display`: text rendering of boards and rosters

pub mod board;
pub mod core;
pub mod display;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    aesthetic_config, beginner_config, expert_config, is_six, Cell, Dice, DiceRoller, Entity,
    EntityKind, GameConfig, GameError, GameRng, Level, PlacementMode, Player, ScriptedDice,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub use crate::board::{generate_entities, Board, Coordinate};

pub use crate::game::{
    Game, TurnOutcome, TurnResult, CONSECUTIVE_SIX_LIMIT, MAX_PLAYERS, MIN_PLAYERS,
};
