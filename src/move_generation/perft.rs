//! Successor-tree node counting to a fixed depth.
//!
//! Used by the diagnostics binary and the benchmark as a correctness and
//! throughput probe. Each level is one call to a `MoveGenerator`.

use std::sync::Arc;
use std::thread;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaf boards with fewer pieces than their parent.
    pub captures: usize,
    /// Leaf boards with more mover Zombies than their parent.
    pub zombie_gains: usize,
    /// Interior boards with no successors at all.
    pub terminal_positions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.zombie_gains += rhs.zombie_gains;
        self.terminal_positions += rhs.terminal_positions;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    perft_recurse(generator, game_state, depth, &mut counts)?;
    Ok(counts)
}

/// Root-split variant: one thread per root successor.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return perft(generator.as_ref(), game_state, 0);
    }

    let root_successors = generator.generate_successors(game_state)?;
    let mut total = PerftCounts::default();
    if root_successors.is_empty() {
        total.terminal_positions = 1;
        return Ok(total);
    }

    let mut handles = Vec::with_capacity(root_successors.len());
    for next in root_successors {
        let generator_ref = Arc::clone(&generator);
        let parent = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            if depth == 1 {
                tally_leaf(&parent, &next, &mut local);
                return Ok(local);
            }
            perft_recurse(generator_ref.as_ref(), &next, depth - 1, &mut local).map(|_| local)
        }));
    }

    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| MoveGenerationError::WorkerPanicked)??;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    let successors = generator.generate_successors(game_state)?;
    if successors.is_empty() {
        counts.terminal_positions += 1;
        return Ok(());
    }

    for next in &successors {
        if depth == 1 {
            tally_leaf(game_state, next, counts);
        } else {
            perft_recurse(generator, next, depth - 1, counts)?;
        }
    }
    Ok(())
}

fn tally_leaf(parent: &GameState, leaf: &GameState, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if leaf.piece_count() < parent.piece_count() {
        counts.captures += 1;
    }
    let mover = parent.side_to_move;
    if zombies_of(leaf, mover) > zombies_of(parent, mover) {
        counts.zombie_gains += 1;
    }
}

fn zombies_of(game_state: &GameState, color: Color) -> usize {
    game_state
        .pieces_of(color)
        .filter(|piece| piece.kind == PieceKind::Zombie)
        .count()
}
