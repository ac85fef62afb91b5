//! Player roster state.
//!
//! A player starts off-board at position 0 and mutates position, six-streak,
//! and active state as turns resolve. Mutators are crate-private: only the
//! turn engine writes roster state; callers observe it through snapshots.

use serde::{Deserialize, Serialize};

use super::entity::Cell;

/// Display symbols assigned to players by roster index.
pub(crate) const DEFAULT_SYMBOLS: [&str; 6] = ["🔵", "🔴", "🟢", "🟡", "🟣", "🟠"];

/// One player's state: identity plus per-turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: String,
    position: Cell,
    consecutive_sixes: u8,
    active: bool,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            position: 0,
            consecutive_sixes: 0,
            active: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Current position: 0 before entering the board, else `1..=total_cells`.
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Sixes rolled in the player's current unbroken run of turns.
    #[must_use]
    pub fn consecutive_sixes(&self) -> u8 {
        self.consecutive_sixes
    }

    /// Whether the player takes turns and can be collided with.
    ///
    /// The turn engine itself never clears this; it is the seam where an
    /// elimination rule would attach.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn has_won(&self, total_cells: Cell) -> bool {
        self.position >= total_cells
    }

    pub(crate) fn set_position(&mut self, position: Cell) {
        self.position = position;
    }

    pub(crate) fn increment_consecutive_sixes(&mut self) {
        self.consecutive_sixes += 1;
    }

    pub(crate) fn reset_consecutive_sixes(&mut self) {
        self.consecutive_sixes = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) at position {}", self.name, self.symbol, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_off_board() {
        let player = Player::new("Alice", "🔵");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.symbol(), "🔵");
        assert_eq!(player.position(), 0);
        assert_eq!(player.consecutive_sixes(), 0);
        assert!(player.is_active());
    }

    #[test]
    fn test_has_won() {
        let mut player = Player::new("Alice", "🔵");
        assert!(!player.has_won(49));

        player.set_position(48);
        assert!(!player.has_won(49));

        player.set_position(49);
        assert!(player.has_won(49));
    }

    #[test]
    fn test_six_streak() {
        let mut player = Player::new("Alice", "🔵");
        player.increment_consecutive_sixes();
        player.increment_consecutive_sixes();
        assert_eq!(player.consecutive_sixes(), 2);

        player.reset_consecutive_sixes();
        assert_eq!(player.consecutive_sixes(), 0);
    }

    #[test]
    fn test_display() {
        let mut player = Player::new("Alice", "🔵");
        player.set_position(12);
        assert_eq!(player.to_string(), "Alice(🔵) at position 12");
    }

    #[test]
    fn test_serialization() {
        let player = Player::new("Alice", "🔵");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
