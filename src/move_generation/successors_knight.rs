//! Knight: the eight L-shaped jumps.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_stepper_successors;

pub fn generate_knight_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_stepper_successors(game_state, piece, &KNIGHT_OFFSETS, out);
}
