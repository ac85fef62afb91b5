//! Turn results.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// How a single `play_turn` call resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Normal turn; the pointer advanced to the next active player.
    TurnCompleted,
    /// Rolled a six (not the third in a row); same player rolls again.
    ExtraTurn,
    /// Third consecutive six; streak reset, turn forfeited.
    TurnRevoked,
    /// The mover reached the final cell; the game is over.
    PlayerWon,
    /// The game had already ended before this call; nothing was mutated.
    GameEnded,
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TurnOutcome::TurnCompleted => "turn completed",
            TurnOutcome::ExtraTurn => "extra turn",
            TurnOutcome::TurnRevoked => "turn revoked",
            TurnOutcome::PlayerWon => "player won",
            TurnOutcome::GameEnded => "game ended",
        };
        f.write_str(label)
    }
}

/// Structured result of one resolved turn.
///
/// `player` is a snapshot of the acting player taken after resolution;
/// `description` summarizes roll, movement, collisions, and transforms
/// for the display layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub outcome: TurnOutcome,
    pub player: Player,
    pub roll: u8,
    pub description: String,
}
