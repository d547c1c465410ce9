//! Cannon: quiet orthogonal repositioning plus a diagonal sweep that clears
//! every piece on a ray while the Cannon stays put.

use crate::game_state::chess_rules::{CANNON_SWEEP_DIRECTIONS, ORTHOGONAL_OFFSETS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_quiet_step_successors;

pub fn generate_cannon_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_quiet_step_successors(game_state, piece, &ORTHOGONAL_OFFSETS, out);

    for (file_step, rank_step) in CANNON_SWEEP_DIRECTIONS {
        let mut hit = Vec::new();
        let mut cursor = piece.square;
        while let Some(target) = cursor.offset(file_step, rank_step) {
            if game_state.piece_at(target).is_some() {
                hit.push(target);
            }
            cursor = target;
        }
        if !hit.is_empty() {
            out.push(game_state.removal_successor(&hit));
        }
    }
}
