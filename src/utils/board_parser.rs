//! Board text to `GameState` parser.
//!
//! Layout:
//!
//! ```text
//! w 0 0 0
//! {
//!   a1: 'wB',
//!   h8: 'bK'
//! }
//! ```
//!
//! The first non-empty line is the header (turn letter plus three integers).
//! Later lines holding a `:` are piece entries; everything else (braces, the
//! zero trailer lines written by the serializer) is ignored. Entries with an
//! unknown kind letter are skipped; a repeated square keeps the last entry.

use log::warn;

use crate::errors::{ChezzError, ChezzResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_board(text: &str) -> ChezzResult<GameState> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| ChezzError::Format("missing header line".to_owned()))?;
    let (side_to_move, diff_values) = parse_header(header)?;

    let mut game_state = GameState::new_empty(side_to_move, diff_values);
    for line in lines {
        if line.starts_with('{') || line.starts_with('}') {
            continue;
        }
        let Some((position, code)) = line.split_once(':') else {
            continue;
        };
        if let Some(piece) = parse_entry(position, code)? {
            if game_state.piece_at(piece.square).is_some() {
                warn!("square {} listed twice, keeping the later entry", piece.square);
            }
            game_state.place(piece.color, piece.kind, piece.square);
        }
    }

    game_state.validate()?;
    Ok(game_state)
}

fn parse_header(header: &str) -> ChezzResult<(Color, DiffValues)> {
    let mut parts = header.split_whitespace();

    let turn = parts
        .next()
        .ok_or_else(|| ChezzError::Format("missing turn in header".to_owned()))?;
    let side_to_move = match turn {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(ChezzError::Format(format!("invalid turn: {other}"))),
    };

    let values = parts
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ChezzError::Format(format!("invalid header value: {part}")))
        })
        .collect::<ChezzResult<Vec<i64>>>()?;
    let diff_values: DiffValues = values.as_slice().try_into().map_err(|_| {
        ChezzError::Format(format!(
            "header must carry three integers after the turn, found {}",
            values.len()
        ))
    })?;

    Ok((side_to_move, diff_values))
}

/// `Ok(None)` for entries with a kind letter this engine does not know. The
/// kind is read before the square and color, so such entries are dropped
/// whatever else is wrong with them.
fn parse_entry(position: &str, code: &str) -> ChezzResult<Option<Piece>> {
    let position = position.trim();
    let code = code.trim().trim_end_matches(',').trim_matches('\'');
    let mut chars = code.chars();
    let (Some(color), Some(kind)) = (chars.next(), chars.next()) else {
        return Err(ChezzError::Format(format!("piece code too short on {position}: {code:?}")));
    };

    let Some(kind) = PieceKind::from_letter(kind) else {
        warn!("skipping unknown piece kind '{kind}' on {position}");
        return Ok(None);
    };

    let square = algebraic_to_square(position)?;
    let color = Color::from_letter(color)
        .ok_or_else(|| ChezzError::Format(format!("invalid piece color on {square}: {color}")))?;

    Ok(Some(Piece::new(color, kind, square)))
}

#[cfg(test)]
mod tests {
    use super::parse_board;
    use crate::errors::ChezzError;
    use crate::game_state::chess_types::*;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn parses_header_and_entries_in_order() {
        let text = "b 3 -1 42\n{\n  e4: 'wZ',\n  a1: 'bK',\n  h8: 'wF'\n}\n0\n0\n0\n";
        let board = parse_board(text).expect("board should parse");

        assert_eq!(board.side_to_move, Color::Black);
        assert_eq!(board.diff_values, [3, -1, 42]);
        let order: Vec<Square> = board.pieces.keys().copied().collect();
        assert_eq!(order, vec![sq(4, 3), sq(0, 0), sq(7, 7)]);
        let king = board.piece_at(sq(0, 0)).expect("king on a1");
        assert_eq!((king.color, king.kind), (Color::Black, PieceKind::King));
    }

    #[test]
    fn unknown_kind_letter_is_skipped() {
        let text = "w 0 0 0\n{\n  a1: 'wX',\n  b2: 'wQ'\n}\n";
        let board = parse_board(text).expect("board should parse");
        assert_eq!(board.piece_count(), 1);
        assert!(board.piece_at(sq(1, 1)).is_some());
    }

    #[test]
    fn unknown_kind_is_dropped_before_square_and_color_checks() {
        let off_board = "w 0 0 0\n{\n  i1: 'wX',\n  b2: 'wQ'\n}\n";
        let board = parse_board(off_board).expect("off-board unknown kind should be skipped");
        assert_eq!(board.piece_count(), 1);

        let bad_color = "w 0 0 0\n{\n  a1: 'xX',\n  b2: 'wQ'\n}\n";
        let board = parse_board(bad_color).expect("bad-color unknown kind should be skipped");
        assert_eq!(board.piece_count(), 1);
        assert!(board.piece_at(sq(1, 1)).is_some());
    }

    #[test]
    fn known_kind_with_bad_color_is_a_format_error() {
        let text = "w 0 0 0\n{\n  a1: 'xQ'\n}\n";
        assert!(matches!(parse_board(text), Err(ChezzError::Format(_))));
    }

    #[test]
    fn repeated_square_keeps_last_entry() {
        let text = "w 0 0 0\n{\n  c3: 'wQ',\n  c3: 'bN'\n}\n";
        let board = parse_board(text).expect("board should parse");
        assert_eq!(board.piece_count(), 1);
        let piece = board.piece_at(sq(2, 2)).expect("piece on c3");
        assert_eq!((piece.color, piece.kind), (Color::Black, PieceKind::Knight));
    }

    #[test]
    fn missing_header_is_a_format_error() {
        assert!(matches!(parse_board(""), Err(ChezzError::Format(_))));
        assert!(matches!(parse_board("  \n\n"), Err(ChezzError::Format(_))));
        assert!(matches!(parse_board("x 0 0 0\n"), Err(ChezzError::Format(_))));
        assert!(matches!(parse_board("w 0 0\n"), Err(ChezzError::Format(_))));
    }

    #[test]
    fn off_board_square_is_an_invalid_position() {
        let text = "w 0 0 0\n{\n  i1: 'wQ'\n}\n";
        assert!(matches!(
            parse_board(text),
            Err(ChezzError::InvalidPosition { file: 8, rank: 0 })
        ));
    }

    #[test]
    fn empty_board_parses() {
        let board = parse_board("w 0 0 0\n{\n\n}\n0\n0\n0\n").expect("board should parse");
        assert_eq!(board.piece_count(), 0);
    }
}
