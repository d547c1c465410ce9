//! Slide and step walks shared by the movement rules.

use crate::game_state::chess_rules::Step;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Walk each direction until the edge or the first occupied square. Empty
/// squares and an enemy stop square each yield a relocation; a friendly
/// blocker yields nothing.
pub fn push_slider_successors(
    game_state: &GameState,
    piece: &Piece,
    directions: &[Step],
    out: &mut Vec<GameState>,
) {
    for &(file_step, rank_step) in directions {
        let mut cursor = piece.square;
        while let Some(target) = cursor.offset(file_step, rank_step) {
            match game_state.piece_at(target) {
                None => {
                    out.push(game_state.relocation_successor(piece, target, piece.kind));
                }
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(game_state.relocation_successor(piece, target, piece.kind));
                    }
                    break;
                }
            }
            cursor = target;
        }
    }
}

/// Try each offset once: empty or enemy-held targets are relocations.
pub fn push_stepper_successors(
    game_state: &GameState,
    piece: &Piece,
    offsets: &[Step],
    out: &mut Vec<GameState>,
) {
    for &(file_step, rank_step) in offsets {
        let Some(target) = piece.square.offset(file_step, rank_step) else {
            continue;
        };
        let open = game_state
            .piece_at(target)
            .map_or(true, |occupant| occupant.color != piece.color);
        if open {
            out.push(game_state.relocation_successor(piece, target, piece.kind));
        }
    }
}

/// Try each offset once, accepting only empty targets.
pub fn push_quiet_step_successors(
    game_state: &GameState,
    piece: &Piece,
    offsets: &[Step],
    out: &mut Vec<GameState>,
) {
    for &(file_step, rank_step) in offsets {
        if let Some(target) = piece.square.offset(file_step, rank_step) {
            if game_state.piece_at(target).is_none() {
                out.push(game_state.relocation_successor(piece, target, piece.kind));
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::game_state::{chess_types::*, game_state::GameState};

    pub fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    pub fn board_with(side: Color, pieces: &[(Color, PieceKind, (i8, i8))]) -> GameState {
        let mut board = GameState::new_empty(side, [0, 0, 0]);
        for &(color, kind, (file, rank)) in pieces {
            board.place(color, kind, sq(file, rank));
        }
        board
    }

    pub fn piece_on(board: &GameState, file: i8, rank: i8) -> Piece {
        *board
            .piece_at(sq(file, rank))
            .expect("test expects a piece on this square")
    }

    /// Squares where the mover of kind `kind` and color `color` ends up, one per successor.
    pub fn landing_squares(
        successors: &[GameState],
        color: Color,
        kind: PieceKind,
        origin: Square,
    ) -> Vec<Square> {
        successors
            .iter()
            .filter_map(|board| {
                board
                    .pieces
                    .values()
                    .find(|p| p.color == color && p.kind == kind && p.square != origin)
                    .map(|p| p.square)
            })
            .collect()
    }
}
