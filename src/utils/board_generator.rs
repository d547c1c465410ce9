//! `GameState` to board text, the inverse of `board_parser`.
//!
//! The three `0` lines after the closing brace are part of the format the
//! downstream consumer expects and are always written.

use crate::game_state::game_state::GameState;

pub fn serialize_board(game_state: &GameState) -> String {
    let entries: Vec<String> = game_state
        .pieces
        .iter()
        .map(|(square, piece)| format!("  {square}: '{}'", piece.code()))
        .collect();

    format!(
        "{} {} {} {}\n{{\n{}\n}}\n0\n0\n0\n",
        game_state.side_to_move.letter(),
        game_state.diff_values[0],
        game_state.diff_values[1],
        game_state.diff_values[2],
        entries.join(",\n")
    )
}
