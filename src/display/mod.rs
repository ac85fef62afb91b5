//! Text rendering of boards and rosters.
//!
//! Pure string producers; the library performs no I/O. Callers decide
//! where the text goes.

use crate::board::Board;
use crate::core::{Cell, EntityKind, Player};

const SNAKE_MARK: &str = "S";
const LADDER_MARK: &str = "L";
const CELL_WIDTH: usize = 8;

/// Render the board grid top row first, with cell numbers, entity marks,
/// and the symbols of any players on each cell.
#[must_use]
pub fn render_board(board: &Board, players: &[Player]) -> String {
    let size = board.size();
    let mut out = String::new();

    for row in (0..size).rev() {
        let mut numbers = String::from("|");
        let mut contents = String::from("|");

        for column in 0..size {
            let cell = cell_at(size, row, column);
            numbers.push_str(&format!("{:>4}   |", cell));
            contents.push_str(&format!("{:<7}|", cell_content(board, players, cell)));
        }

        out.push_str(&numbers);
        out.push('\n');
        out.push_str(&contents);
        out.push('\n');
        if row > 0 {
            out.push_str(&"-".repeat(usize::from(size) * CELL_WIDTH + 1));
            out.push('\n');
        }
    }

    out
}

/// Inverse of the serpentine mapping: the cell number at (row, column).
fn cell_at(size: u16, row: u16, column: u16) -> Cell {
    if row % 2 == 0 {
        row * size + column + 1
    } else {
        row * size + (size - column)
    }
}

fn cell_content(board: &Board, players: &[Player], cell: Cell) -> String {
    let mut content = String::new();
    for player in players.iter().filter(|p| p.position() == cell) {
        content.push_str(player.symbol());
    }
    if let Some(entity) = board.entity_at(cell) {
        content.push_str(match entity.kind() {
            EntityKind::Snake => SNAKE_MARK,
            EntityKind::Ladder => LADDER_MARK,
        });
    }
    content
}

/// List the board's snakes and ladders, snakes first, by anchor.
#[must_use]
pub fn render_entities(board: &Board) -> String {
    let mut entities: Vec<_> = board.entities().collect();
    entities.sort_by_key(|e| (e.kind() != EntityKind::Snake, e.anchor()));

    let mut out = String::new();
    for entity in entities {
        out.push_str(&format!("  {entity}\n"));
    }
    out
}

/// One status line per player: symbol, name, position, streak, turn marker.
#[must_use]
pub fn render_roster(players: &[Player], current: &Player) -> String {
    let mut out = String::new();
    for player in players {
        let streak = if player.consecutive_sixes() > 0 {
            format!(" (sixes x{})", player.consecutive_sixes())
        } else {
            String::new()
        };
        let marker = if player.name() == current.name() {
            " <- current turn"
        } else {
            ""
        };
        let status = if player.is_active() { "active" } else { "inactive" };
        out.push_str(&format!(
            "{} {} - position {} - {}{}{}\n",
            player.symbol(),
            player.name(),
            player.position(),
            status,
            streak,
            marker,
        ));
    }
    out
}
