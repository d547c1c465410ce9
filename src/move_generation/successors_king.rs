//! King: one step in any of eight directions.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_stepper_successors;

pub fn generate_king_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_stepper_successors(game_state, piece, &KING_OFFSETS, out);
}
