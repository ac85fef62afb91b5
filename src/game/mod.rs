//! Turn-resolution engine.

pub mod engine;
pub mod result;

pub use engine::{Game, CONSECUTIVE_SIX_LIMIT, MAX_PLAYERS, MIN_PLAYERS};
pub use result::{TurnOutcome, TurnResult};
