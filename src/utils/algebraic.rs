//! Algebraic coordinate parsing (for example `e4`).
//!
//! Used by the board text parser.

use crate::errors::{ChezzError, ChezzResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
///
/// A well-formed file letter or rank digit that lands off the board is an
/// `InvalidPosition`; anything unreadable is a `Format` error.
pub fn algebraic_to_square(square: &str) -> ChezzResult<Square> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChezzError::Format(format!("invalid algebraic square: {square}")));
    };

    let file = file.to_ascii_lowercase();
    if !file.is_ascii_lowercase() {
        return Err(ChezzError::Format(format!("invalid algebraic file: {file}")));
    }
    let rank = rank
        .to_digit(10)
        .ok_or_else(|| ChezzError::Format(format!("invalid algebraic rank: {rank}")))?;

    let file_index = i32::from(file as u8 - b'a');
    let rank_index = rank as i32 - 1;
    Square::try_new(file_index, rank_index)
}

#[cfg(test)]
mod tests {
    use super::algebraic_to_square;
    use crate::errors::ChezzError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn parses_corner_squares_case_insensitively() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let h8 = algebraic_to_square("H8").expect("h8 should parse");
        assert_eq!(a1, Square::new(0, 0).expect("a1 is on the board"));
        assert_eq!(h8, Square::new(7, 7).expect("h8 is on the board"));
        assert_eq!(h8.to_string(), "h8");
    }

    #[test]
    fn off_board_squares_are_invalid_positions() {
        assert!(matches!(
            algebraic_to_square("i4"),
            Err(ChezzError::InvalidPosition { file: 8, rank: 3 })
        ));
        assert!(matches!(
            algebraic_to_square("a9"),
            Err(ChezzError::InvalidPosition { file: 0, rank: 8 })
        ));
        assert!(matches!(
            algebraic_to_square("a0"),
            Err(ChezzError::InvalidPosition { file: 0, rank: -1 })
        ));
    }

    #[test]
    fn unreadable_squares_are_format_errors() {
        assert!(matches!(algebraic_to_square("e"), Err(ChezzError::Format(_))));
        assert!(matches!(algebraic_to_square("ex"), Err(ChezzError::Format(_))));
        assert!(matches!(algebraic_to_square("4e"), Err(ChezzError::Format(_))));
    }
}
