//! Full successor generation pipeline.
//!
//! Dispatches every piece of the side to move to its movement rule, then
//! flips the turn and runs the contagion pass on each candidate board.

use std::thread;

use log::{debug, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::contagion::apply_contagion;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::move_generation::successors_bishop::generate_bishop_successors;
use crate::move_generation::successors_cannon::generate_cannon_successors;
use crate::move_generation::successors_flinger::generate_flinger_successors;
use crate::move_generation::successors_king::generate_king_successors;
use crate::move_generation::successors_knight::generate_knight_successors;
use crate::move_generation::successors_peon::generate_peon_successors;
use crate::move_generation::successors_queen::generate_queen_successors;
use crate::move_generation::successors_rook::generate_rook_successors;
use crate::move_generation::successors_zombie::generate_zombie_successors;

pub struct SuccessorGenerator;

/// Splits the pieces of the side to move across worker threads. Output order
/// matches `SuccessorGenerator`.
pub struct ParallelSuccessorGenerator {
    pub threads: usize,
}

impl MoveGenerator for SuccessorGenerator {
    fn generate_successors(&self, game_state: &GameState) -> MoveGenResult<Vec<GameState>> {
        check_state(game_state)?;

        let mut successors = Vec::with_capacity(64);
        for piece in game_state.pieces_of(game_state.side_to_move) {
            successors.extend(piece_successors(game_state, piece));
        }

        debug!(
            "generated {} successors for {:?} over {} pieces",
            successors.len(),
            game_state.side_to_move,
            game_state.piece_count()
        );
        Ok(successors)
    }
}

impl MoveGenerator for ParallelSuccessorGenerator {
    fn generate_successors(&self, game_state: &GameState) -> MoveGenResult<Vec<GameState>> {
        check_state(game_state)?;

        let movers: Vec<&Piece> = game_state.pieces_of(game_state.side_to_move).collect();
        if movers.is_empty() {
            return Ok(Vec::new());
        }
        let chunk_size = movers.len().div_ceil(self.threads.max(1));

        let per_chunk = thread::scope(|scope| {
            let handles: Vec<_> = movers
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .flat_map(|piece| piece_successors(game_state, piece))
                            .collect::<Vec<GameState>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().map_err(|_| MoveGenerationError::WorkerPanicked))
                .collect::<MoveGenResult<Vec<_>>>()
        })?;

        let successors: Vec<GameState> = per_chunk.into_iter().flatten().collect();
        debug!(
            "generated {} successors for {:?} on {} threads",
            successors.len(),
            game_state.side_to_move,
            self.threads.max(1)
        );
        Ok(successors)
    }
}

/// Pick the sequential or parallel generator from a thread count.
pub fn generator_for_threads(threads: usize) -> Box<dyn MoveGenerator> {
    if threads > 1 {
        Box::new(ParallelSuccessorGenerator { threads })
    } else {
        Box::new(SuccessorGenerator)
    }
}

fn check_state(game_state: &GameState) -> MoveGenResult<()> {
    game_state
        .validate()
        .map_err(|e| MoveGenerationError::InvalidState(e.to_string()))
}

/// Run one piece's rule and finish each candidate board.
fn piece_successors(game_state: &GameState, piece: &Piece) -> Vec<GameState> {
    let mut candidates = Vec::new();
    match piece.kind {
        PieceKind::Bishop => generate_bishop_successors(game_state, piece, &mut candidates),
        PieceKind::Cannon => generate_cannon_successors(game_state, piece, &mut candidates),
        PieceKind::Flinger => generate_flinger_successors(game_state, piece, &mut candidates),
        PieceKind::King => generate_king_successors(game_state, piece, &mut candidates),
        PieceKind::Knight => generate_knight_successors(game_state, piece, &mut candidates),
        PieceKind::Peon => generate_peon_successors(game_state, piece, &mut candidates),
        PieceKind::Queen => generate_queen_successors(game_state, piece, &mut candidates),
        PieceKind::Rook => generate_rook_successors(game_state, piece, &mut candidates),
        PieceKind::Zombie => generate_zombie_successors(game_state, piece, &mut candidates),
    }
    trace!(
        "{} {:?} on {} -> {} candidates",
        piece.code(),
        piece.kind,
        piece.square,
        candidates.len()
    );

    for candidate in &mut candidates {
        candidate.switch_turn();
        apply_contagion(candidate);
    }
    candidates
}
