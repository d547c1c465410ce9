use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
    WorkerPanicked,
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
            MoveGenerationError::WorkerPanicked => {
                write!(f, "successor generation worker thread panicked")
            }
        }
    }
}

impl Error for MoveGenerationError {}

/// One-ply successor enumeration for the side to move.
pub trait MoveGenerator: Send + Sync {
    /// Every successor board, turn flipped and contagion applied, in
    /// piece-then-candidate order. Either the full list or an error.
    fn generate_successors(&self, game_state: &GameState) -> MoveGenResult<Vec<GameState>>;
}
