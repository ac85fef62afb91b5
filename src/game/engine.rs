//! The turn engine: roster, turn pointer, and the per-turn rule pipeline.
//!
//! One `play_turn` call resolves exactly one discrete turn:
//!
//! 1. already-ended short-circuit
//! 2. skip inactive players
//! 3. roll
//! 4. overshoot rejection (position unchanged)
//! 5. collision kill, then move, then entity transform
//! 6. win check (takes priority over six handling)
//! 7. six-streak bookkeeping (extra turn / revoked on the third six)
//! 8. otherwise streak reset and pointer advance
//!
//! The engine is generic over [`DiceRoller`] so scripted dice can drive
//! deterministic tests.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::player::DEFAULT_SYMBOLS;
use crate::core::{is_six, Cell, Dice, DiceRoller, GameConfig, GameError, GameRng, Player};
use super::result::{TurnOutcome, TurnResult};

/// Minimum roster size.
pub const MIN_PLAYERS: usize = 2;
/// Maximum roster size.
pub const MAX_PLAYERS: usize = 6;
/// Rolling this many sixes in a row forfeits the turn.
pub const CONSECUTIVE_SIX_LIMIT: u8 = 3;

type Roster = SmallVec<[Player; MAX_PLAYERS]>;

/// A running game: board, roster, dice, and outcome state.
#[derive(Clone, Debug)]
pub struct Game<D: DiceRoller = Dice> {
    board: Board,
    players: Roster,
    dice: D,
    current: usize,
    ended: bool,
    winner: Option<usize>,
    seed: u64,
    history: Vec<TurnResult>,
}

impl Game<Dice> {
    /// Build a game from a configuration and player names.
    ///
    /// The effective seed is `config.seed()` or a fresh random one; it is
    /// always recorded and readable via [`Game::seed`]. Board placement
    /// and dice consume independent streams derived from it.
    pub fn new<S: AsRef<str>>(config: GameConfig, names: &[S]) -> Result<Self, GameError> {
        let seed = config.seed().unwrap_or_else(rand::random);
        let base = GameRng::new(seed);

        let mut placement = base.for_context("placement");
        let board = Board::generate(config.board_size(), config.level(), config.mode(), &mut placement)?;

        Self::assemble(board, names, Dice::new(base.for_context("dice")), seed)
    }
}

impl<D: DiceRoller> Game<D> {
    /// Build a game with an injected dice roller.
    pub fn with_dice<S: AsRef<str>>(
        config: GameConfig,
        names: &[S],
        dice: D,
    ) -> Result<Self, GameError> {
        let seed = config.seed().unwrap_or_else(rand::random);
        let mut placement = GameRng::new(seed).for_context("placement");
        let board = Board::generate(config.board_size(), config.level(), config.mode(), &mut placement)?;

        Self::assemble(board, names, dice, seed)
    }

    /// Build a game over a pre-resolved board.
    ///
    /// This is the boundary for callers that construct or validate their
    /// board elsewhere, and the seam deterministic tests use.
    pub fn with_board<S: AsRef<str>>(board: Board, names: &[S], dice: D) -> Result<Self, GameError> {
        Self::assemble(board, names, dice, 0)
    }

    fn assemble<S: AsRef<str>>(
        board: Board,
        names: &[S],
        dice: D,
        seed: u64,
    ) -> Result<Self, GameError> {
        let players = build_roster(names)?;
        Ok(Self {
            board,
            players,
            dice,
            current: 0,
            ended: false,
            winner: None,
            seed,
            history: Vec::new(),
        })
    }

    /// Resolve exactly one turn.
    pub fn play_turn(&mut self) -> TurnResult {
        if self.ended {
            let idx = self.winner.unwrap_or(self.current);
            return self.record(TurnOutcome::GameEnded, idx, 0, "Game has already ended".to_string());
        }

        // The engine never deactivates players itself, but an inactive
        // player must not act; skip forward to the next active one.
        while !self.players[self.current].is_active() {
            self.advance_turn();
        }

        let mover = self.current;
        let roll = self.dice.roll();
        let description = self.resolve_move(mover, roll);

        if self.players[mover].has_won(self.board.total_cells()) {
            self.ended = true;
            self.winner = Some(mover);
            return self.record(TurnOutcome::PlayerWon, mover, roll, description);
        }

        if is_six(roll) {
            self.players[mover].increment_consecutive_sixes();
            if self.players[mover].consecutive_sixes() >= CONSECUTIVE_SIX_LIMIT {
                self.players[mover].reset_consecutive_sixes();
                self.advance_turn();
                let description =
                    format!("{description} - turn revoked after three consecutive sixes");
                return self.record(TurnOutcome::TurnRevoked, mover, roll, description);
            }
            let description = format!("{description} - extra turn for rolling a six");
            return self.record(TurnOutcome::ExtraTurn, mover, roll, description);
        }

        self.players[mover].reset_consecutive_sixes();
        self.advance_turn();
        self.record(TurnOutcome::TurnCompleted, mover, roll, description)
    }

    /// Apply movement, collision, and transform rules; returns the
    /// human-readable move summary.
    fn resolve_move(&mut self, mover: usize, roll: u8) -> String {
        let name = self.players[mover].name().to_string();
        let old_position = self.players[mover].position();
        let candidate = old_position + Cell::from(roll);

        // Overshoot: the move is rejected wholesale.
        if candidate > self.board.total_cells() {
            return format!(
                "{name} rolled {roll} but cannot move beyond the board (stays at {old_position})"
            );
        }

        // An active player already on the candidate cell is sent back to
        // start. This happens before the mover's transform is applied.
        let mut kill_note = String::new();
        if let Some(victim) = self.active_player_at(candidate, mover) {
            self.players[victim].set_position(0);
            kill_note = format!(" and sent {} back to start", self.players[victim].name());
        }

        self.players[mover].set_position(candidate);

        let transformed = self.board.transform(candidate);
        let mut transform_note = String::new();
        if transformed != candidate {
            self.players[mover].set_position(transformed);
            if let Some(entity) = self.board.entity_at(candidate) {
                transform_note =
                    format!(" -> {} from {candidate} to {transformed}", entity.kind());
            }
        }

        let final_position = self.players[mover].position();
        format!("{name} rolled {roll}, moved from {old_position} to {final_position}{kill_note}{transform_note}")
    }

    /// Index of the active player occupying `position`, excluding the mover.
    fn active_player_at(&self, position: Cell, except: usize) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != except && p.is_active())
            .find(|(_, p)| p.position() == position)
            .map(|(i, _)| i)
    }

    /// Advance the turn pointer to the next active player.
    fn advance_turn(&mut self) {
        for _ in 0..self.players.len() {
            self.current = (self.current + 1) % self.players.len();
            if self.players[self.current].is_active() {
                return;
            }
        }
    }

    fn record(&mut self, outcome: TurnOutcome, player: usize, roll: u8, description: String) -> TurnResult {
        let result = TurnResult {
            outcome,
            player: self.players[player].clone(),
            roll,
            description,
        };
        self.history.push(result.clone());
        result
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Snapshot of the roster in seating order.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.players.to_vec()
    }

    /// Snapshot of the players still taking turns.
    #[must_use]
    pub fn active_players(&self) -> Vec<Player> {
        self.players.iter().filter(|p| p.is_active()).cloned().collect()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    /// The effective seed this game was built from (0 when the board was
    /// injected via [`Game::with_board`]).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every result produced so far, in order.
    #[must_use]
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }
}

fn build_roster<S: AsRef<str>>(names: &[S]) -> Result<Roster, GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(GameError::PlayerCount(names.len()));
    }

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut roster = Roster::new();
    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(GameError::DuplicatePlayerName(name.to_string()));
        }
        roster.push(Player::new(name, DEFAULT_SYMBOLS[index]));
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, PlacementMode, ScriptedDice};

    fn empty_board(size: u16) -> Board {
        Board::from_entities(size, Vec::new(), PlacementMode::Uniform).unwrap()
    }

    fn two_player_game(script: Vec<u8>) -> Game<ScriptedDice> {
        Game::with_board(empty_board(10), &["Alice", "Bob"], ScriptedDice::new(script)).unwrap()
    }

    #[test]
    fn test_roster_validation() {
        let board = empty_board(5);
        let dice = ScriptedDice::new(vec![1]);

        assert_eq!(
            Game::with_board(board.clone(), &["Solo"], dice.clone()).unwrap_err(),
            GameError::PlayerCount(1)
        );
        assert_eq!(
            Game::with_board(board.clone(), &["A", "B", "C", "D", "E", "F", "G"], dice.clone())
                .unwrap_err(),
            GameError::PlayerCount(7)
        );
        assert_eq!(
            Game::with_board(board.clone(), &["Alice", "  "], dice.clone()).unwrap_err(),
            GameError::EmptyPlayerName
        );
        assert_eq!(
            Game::with_board(board, &["Alice", "ALICE"], dice).unwrap_err(),
            GameError::DuplicatePlayerName("ALICE".to_string())
        );
    }

    #[test]
    fn test_symbols_assigned_by_seat() {
        let game = two_player_game(vec![1]);
        let players = game.players();
        assert_eq!(players[0].symbol(), "🔵");
        assert_eq!(players[1].symbol(), "🔴");
    }

    #[test]
    fn test_non_six_advances_turn() {
        let mut game = two_player_game(vec![3]);
        assert_eq!(game.current_player().name(), "Alice");

        let result = game.play_turn();
        assert_eq!(result.outcome, TurnOutcome::TurnCompleted);
        assert_eq!(result.roll, 3);
        assert_eq!(result.player.position(), 3);
        assert_eq!(game.current_player().name(), "Bob");
    }

    #[test]
    fn test_six_keeps_turn() {
        let mut game = two_player_game(vec![6]);

        let result = game.play_turn();
        assert_eq!(result.outcome, TurnOutcome::ExtraTurn);
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.players()[0].consecutive_sixes(), 1);
    }

    #[test]
    fn test_third_six_revokes_turn() {
        let mut game = two_player_game(vec![6, 6, 6]);

        assert_eq!(game.play_turn().outcome, TurnOutcome::ExtraTurn);
        assert_eq!(game.play_turn().outcome, TurnOutcome::ExtraTurn);

        let third = game.play_turn();
        assert_eq!(third.outcome, TurnOutcome::TurnRevoked);
        assert!(third.description.contains("three consecutive sixes"));
        // Counter reset, turn passed.
        assert_eq!(game.players()[0].consecutive_sixes(), 0);
        assert_eq!(game.current_player().name(), "Bob");
        // The moves themselves stood: 6+6+6 = 18.
        assert_eq!(game.players()[0].position(), 18);
    }

    #[test]
    fn test_non_six_resets_streak() {
        let mut game = two_player_game(vec![6, 2, 1, 6]);

        game.play_turn(); // Alice 6 -> streak 1
        game.play_turn(); // Alice 2 -> streak reset, turn to Bob
        assert_eq!(game.players()[0].consecutive_sixes(), 0);

        game.play_turn(); // Bob 1
        game.play_turn(); // Alice 6 -> streak restarts at 1
        assert_eq!(game.players()[0].consecutive_sixes(), 1);
    }

    #[test]
    fn test_collision_sends_victim_to_start() {
        // Alice moves to 5; Bob lands on 5 and kills her.
        let mut game = two_player_game(vec![5, 5]);

        game.play_turn();
        assert_eq!(game.players()[0].position(), 5);

        let result = game.play_turn();
        assert_eq!(result.outcome, TurnOutcome::TurnCompleted);
        assert!(result.description.contains("sent Alice back to start"));
        assert_eq!(game.players()[0].position(), 0);
        assert_eq!(game.players()[1].position(), 5);
    }

    #[test]
    fn test_no_collision_with_off_board_players() {
        // Bob is at 0 (off-board); Alice landing anywhere must not "kill" him.
        let mut game = two_player_game(vec![2]);
        let result = game.play_turn();
        assert!(!result.description.contains("back to start"));
        assert_eq!(game.players()[1].position(), 0);
    }

    #[test]
    fn test_game_ended_short_circuit() {
        // 10x10 empty board is too big to win quickly; use a 5x5.
        let board = empty_board(5);
        // Turns alternate, so the cycle gives Alice 5s and Bob 4s; their
        // paths never intersect and Alice reaches 25 on her fifth roll.
        let dice = ScriptedDice::new(vec![5, 4]);
        let mut game = Game::with_board(board, &["Alice", "Bob"], dice).unwrap();
        let mut winner = None;
        for _ in 0..20 {
            let result = game.play_turn();
            if result.outcome == TurnOutcome::PlayerWon {
                winner = Some(result.player.name().to_string());
                break;
            }
        }
        assert_eq!(winner.as_deref(), Some("Alice"));
        assert!(game.is_ended());
        assert_eq!(game.winner().map(Player::name), Some("Alice"));

        // Further calls mutate nothing and report GameEnded.
        let positions: Vec<_> = game.players().iter().map(Player::position).collect();
        let result = game.play_turn();
        assert_eq!(result.outcome, TurnOutcome::GameEnded);
        assert_eq!(result.roll, 0);
        assert_eq!(result.player.name(), "Alice");
        let after: Vec<_> = game.players().iter().map(Player::position).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_history_records_results() {
        let mut game = two_player_game(vec![3, 4]);
        game.play_turn();
        game.play_turn();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].player.name(), "Alice");
        assert_eq!(history[1].player.name(), "Bob");
    }

    #[test]
    fn test_new_game_is_reproducible_from_its_seed() {
        let config = GameConfig::new(10, Level::medium(), PlacementMode::Balanced)
            .unwrap()
            .with_seed(42);
        let mut game1 = Game::new(config, &["Alice", "Bob"]).unwrap();
        let mut game2 = Game::new(config, &["Alice", "Bob"]).unwrap();

        assert_eq!(game1.seed(), 42);
        for _ in 0..50 {
            let r1 = game1.play_turn();
            let r2 = game2.play_turn();
            assert_eq!(r1, r2);
            if game1.is_ended() {
                break;
            }
        }
    }

    #[test]
    fn test_with_dice_pairs_generated_board_with_injected_roller() {
        let config = GameConfig::new(8, Level::medium(), PlacementMode::Balanced)
            .unwrap()
            .with_seed(11);
        let mut game =
            Game::with_dice(config, &["Alice", "Bob"], ScriptedDice::new(vec![3])).unwrap();

        // The board comes from the seed, the rolls from the script.
        let reference = Game::new(config, &["Alice", "Bob"]).unwrap();
        assert_eq!(game.board().entity_count(), reference.board().entity_count());

        let result = game.play_turn();
        assert_eq!(result.roll, 3);
        assert_eq!(result.outcome, TurnOutcome::TurnCompleted);
        assert_eq!(game.current_player().name(), "Bob");
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let config = GameConfig::new(5, Level::easy(), PlacementMode::Uniform).unwrap();
        let game = Game::new(config, &["Alice", "Bob"]).unwrap();

        // Replaying the recorded seed reproduces the board.
        let replay = Game::new(config.with_seed(game.seed()), &["Alice", "Bob"]).unwrap();
        let mut first: Vec<_> = game.board().entities().copied().collect();
        let mut second: Vec<_> = replay.board().entities().copied().collect();
        first.sort_by_key(|e| e.anchor());
        second.sort_by_key(|e| e.anchor());
        assert_eq!(first, second);
    }
}
