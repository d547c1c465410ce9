//! Terminal-oriented board renderer for logs and diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board as an 8x8 diagram, rank 8 on top.
///
/// White pieces are upper-case kind letters, Black lower-case, empty `.`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let cell = Square::new(file, rank)
                .and_then(|square| game_state.piece_at(square))
                .map_or('.', piece_char);
            out.push(cell);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match game_state.side_to_move {
        Color::White => "white to move",
        Color::Black => "black to move",
    });

    out
}

fn piece_char(piece: &Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}
