//! Bishop: diagonal slider.

use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_slider_successors;

pub fn generate_bishop_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_slider_successors(game_state, piece, &BISHOP_DIRECTIONS, out);
}
