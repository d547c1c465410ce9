//! Zombie: one orthogonal step, capturing like a King.

use crate::game_state::chess_rules::ORTHOGONAL_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::successor_shared::push_stepper_successors;

pub fn generate_zombie_successors(game_state: &GameState, piece: &Piece, out: &mut Vec<GameState>) {
    push_stepper_successors(game_state, piece, &ORTHOGONAL_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_zombie_successors;
    use crate::game_state::chess_types::*;
    use crate::move_generation::successor_shared::test_support::*;

    #[test]
    fn zombie_moves_orthogonally_only() {
        let board = board_with(Color::White, &[(Color::White, PieceKind::Zombie, (4, 4))]);
        let mut out = Vec::new();
        generate_zombie_successors(&board, &piece_on(&board, 4, 4), &mut out);

        let landings = landing_squares(&out, Color::White, PieceKind::Zombie, sq(4, 4));
        assert_eq!(landings, vec![sq(3, 4), sq(5, 4), sq(4, 3), sq(4, 5)]);
    }

    #[test]
    fn zombie_may_capture_a_king() {
        let board = board_with(
            Color::White,
            &[
                (Color::White, PieceKind::Zombie, (0, 0)),
                (Color::Black, PieceKind::King, (0, 1)),
            ],
        );
        let mut out = Vec::new();
        generate_zombie_successors(&board, &piece_on(&board, 0, 0), &mut out);

        assert_eq!(out.len(), 2);
        assert!(out
            .iter()
            .any(|b| b.piece_count() == 1 && piece_on(b, 0, 1).kind == PieceKind::Zombie));
    }
}
