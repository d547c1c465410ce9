//! Post-move contagion pass.
//!
//! Every Zombie converts its orthogonal enemy neighbors (except Kings and
//! other Zombies) into Zombies of its own color. Claims are read from the
//! board as it stands before the pass, so a fresh convert does not spread
//! further in the same pass. When two Zombies claim the same square, the one
//! earlier in board iteration order wins.

use indexmap::IndexMap;

use crate::game_state::chess_rules::ORTHOGONAL_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Apply contagion in place, returning the number of converted squares.
pub fn apply_contagion(game_state: &mut GameState) -> usize {
    let conversions = contagion_claims(game_state);
    for (&square, &color) in &conversions {
        game_state.place(color, PieceKind::Zombie, square);
    }
    conversions.len()
}

/// Target square -> converting color, first claim wins.
pub fn contagion_claims(game_state: &GameState) -> IndexMap<Square, Color> {
    let mut claims = IndexMap::new();

    let zombies = game_state
        .pieces
        .values()
        .filter(|piece| piece.kind == PieceKind::Zombie);

    for zombie in zombies {
        for (file_step, rank_step) in ORTHOGONAL_OFFSETS {
            let Some(neighbor) = zombie.square.offset(file_step, rank_step) else {
                continue;
            };
            let Some(target) = game_state.piece_at(neighbor) else {
                continue;
            };
            let susceptible = target.color != zombie.color
                && !matches!(target.kind, PieceKind::King | PieceKind::Zombie);
            if susceptible {
                claims.entry(neighbor).or_insert(zombie.color);
            }
        }
    }

    claims
}
