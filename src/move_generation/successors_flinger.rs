//! Flinger: quiet king-like steps, plus flings of an adjacent friendly piece
//! one square further along the same line.
//!
//! A fling onto an empty square relocates the flung piece. A fling onto an
//! enemy other than a King removes both the flung piece and the target. The
//! Flinger itself stays where it is for every fling, and Peons are only ever
//! flung orthogonally.

use crate::game_state::chess_rules::{is_diagonal, Step, FLINGER_DIRECTIONS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_quiet_step_successors;

pub fn generate_flinger_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_quiet_step_successors(game_state, piece, &FLINGER_DIRECTIONS, out);

    for direction in FLINGER_DIRECTIONS {
        if let Some(next) = fling(game_state, piece, direction) {
            out.push(next);
        }
    }
}

fn fling(game_state: &GameState, flinger: &Piece, (file_step, rank_step): Step) -> Option<GameState> {
    let adjacent = flinger.square.offset(file_step, rank_step)?;
    let flung = game_state.piece_at(adjacent)?;
    if flung.color != flinger.color {
        return None;
    }
    if flung.kind == PieceKind::Peon && is_diagonal((file_step, rank_step)) {
        return None;
    }

    let landing = adjacent.offset(file_step, rank_step)?;
    match game_state.piece_at(landing) {
        None => Some(game_state.relocation_successor(flung, landing, flung.kind)),
        Some(target) if target.color != flinger.color && target.kind != PieceKind::King => {
            Some(game_state.removal_successor(&[landing, adjacent]))
        }
        Some(_) => None,
    }
}
