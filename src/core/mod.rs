//! Core engine types: entities, players, levels, configuration, RNG, dice.
//!
//! These are the building blocks the board model and turn engine compose.
//! Everything here is a plain value type; the only mutable state lives in
//! the turn engine's roster.

pub mod config;
pub mod dice;
pub mod entity;
pub mod error;
pub mod level;
pub mod player;
pub mod rng;

pub use config::{
    aesthetic_config, beginner_config, expert_config, GameConfig, PlacementMode, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};
pub use dice::{is_six, Dice, DiceRoller, ScriptedDice};
pub use entity::{Cell, Entity, EntityKind};
pub use error::GameError;
pub use level::Level;
pub use player::Player;
pub use rng::GameRng;
