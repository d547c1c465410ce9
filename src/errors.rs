//! Crate error type for board text handling and the driver.
//!
//! Unknown piece letters are not errors: the parser skips them and logs.

use std::error::Error;
use std::fmt;
use std::io;

use crate::move_generation::move_generator::MoveGenerationError;

pub type ChezzResult<T> = Result<T, ChezzError>;

#[derive(Debug)]
pub enum ChezzError {
    /// Malformed or incomplete text: header line, turn token, diff values or entry.
    Format(String),
    /// Coordinate outside the 8x8 board, or a piece stored under the wrong key.
    InvalidPosition { file: i32, rank: i32 },
    /// The generator refused the board.
    Generation(MoveGenerationError),
    /// Reading input or writing an output artifact failed.
    Io(io::Error),
}

impl fmt::Display for ChezzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChezzError::Format(msg) => write!(f, "format error: {msg}"),
            ChezzError::InvalidPosition { file, rank } => {
                write!(f, "invalid position: ({file}, {rank}) is not a valid board square")
            }
            ChezzError::Generation(err) => write!(f, "generation error: {err}"),
            ChezzError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl Error for ChezzError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChezzError::Generation(err) => Some(err),
            ChezzError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ChezzError {
    fn from(err: io::Error) -> Self {
        ChezzError::Io(err)
    }
}

impl From<MoveGenerationError> for ChezzError {
    fn from(err: MoveGenerationError) -> Self {
        ChezzError::Generation(err)
    }
}
