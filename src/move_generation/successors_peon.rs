//! Peon: one step forward onto an empty square, or one step diagonally
//! forward onto an enemy. Reaching the far rank always yields a Zombie.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_peon_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    let forward = piece.color.forward();

    if let Some(target) = piece.square.offset(0, forward) {
        if game_state.piece_at(target).is_none() {
            out.push(game_state.relocation_successor(piece, target, landing_kind(piece, target)));
        }
    }

    for file_step in [-1, 1] {
        let Some(target) = piece.square.offset(file_step, forward) else {
            continue;
        };
        let is_capture = game_state
            .piece_at(target)
            .is_some_and(|occupant| occupant.color != piece.color);
        if is_capture {
            out.push(game_state.relocation_successor(piece, target, landing_kind(piece, target)));
        }
    }
}

#[inline]
fn landing_kind(piece: &Piece, target: Square) -> PieceKind {
    if target.rank() == promotion_rank(piece.color) {
        PieceKind::Zombie
    } else {
        PieceKind::Peon
    }
}
