//! Plain-text rendering of a game.

use crate::settings::Settings;
use tictactoe_engine::{Board, Cell, GameEngine, GameSnapshot, Position, WinningLine};

/// Renders the board grid.
///
/// Winning marks are bracketed when highlighting is on; empty cells show
/// their 1-based number when coordinates are on.
pub fn render_board(board: &Board, line: Option<WinningLine>, settings: &Settings) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|column| Position::from_row_column(row, column))
                .map(|pos| render_cell(board.get(pos), pos, line, settings))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_cell(
    cell: Cell,
    pos: Position,
    line: Option<WinningLine>,
    settings: &Settings,
) -> String {
    match cell {
        Cell::Occupied(player) => {
            let winning = line.is_some_and(|line| line.contains(pos));
            if winning && *settings.highlight_winning_line() {
                format!("[{}]", player)
            } else {
                format!(" {} ", player)
            }
        }
        Cell::Empty if *settings.show_coordinates() => format!(" {} ", pos.to_index() + 1),
        Cell::Empty => "   ".to_string(),
    }
}

/// Renders the board followed by the turn line or the result banner.
pub fn render(engine: &GameEngine, settings: &Settings) -> String {
    let board = render_board(engine.board(), engine.winning_line(), settings);
    let footer = match engine.turn() {
        Some(player) => format!("Player {}'s turn", player),
        None => engine.status().to_string(),
    };
    format!("{}\n\n{}", board, footer)
}

/// The game's snapshot as pretty-printed JSON.
pub fn snapshot_json(engine: &GameEngine) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&engine.snapshot())
}

/// The JSON schema describing [`snapshot_json`] output.
pub fn snapshot_schema() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&schemars::schema_for!(GameSnapshot))
}
