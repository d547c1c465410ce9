//! Value types shared by the board model and the movement rules.
//!
//! A `Square` can only be built inside the 8x8 grid, so every key stored in a
//! `GameState` satisfies the bounds invariant by construction.

use std::fmt;

use crate::errors::ChezzError;

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a Peon of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[inline]
    pub const fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

/// The nine piece behaviors of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bishop,
    Cannon,
    Flinger,
    King,
    Knight,
    Peon,
    Queen,
    Rook,
    Zombie,
}

impl PieceKind {
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Bishop,
        PieceKind::Cannon,
        PieceKind::Flinger,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Peon,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Zombie,
    ];

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Bishop => 'B',
            PieceKind::Cannon => 'C',
            PieceKind::Flinger => 'F',
            PieceKind::King => 'K',
            PieceKind::Knight => 'N',
            PieceKind::Peon => 'P',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Zombie => 'Z',
        }
    }

    #[inline]
    pub const fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'B' => Some(PieceKind::Bishop),
            'C' => Some(PieceKind::Cannon),
            'F' => Some(PieceKind::Flinger),
            'K' => Some(PieceKind::King),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Peon),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'Z' => Some(PieceKind::Zombie),
            _ => None,
        }
    }
}

/// Board coordinate, `file` and `rank` both in `0..8` (`a1 == (0, 0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// Returns `None` when the coordinate falls off the board.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Checked constructor for untrusted coordinates (parser input).
    pub fn try_new(file: i32, rank: i32) -> Result<Self, ChezzError> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Self {
                file: file as i8,
                rank: rank as i8,
            })
        } else {
            Err(ChezzError::InvalidPosition { file, rank })
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn offset(self, file_step: i8, rank_step: i8) -> Option<Self> {
        Self::new(self.file + file_step, self.rank + rank_step)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file as u8),
            char::from(b'1' + self.rank as u8)
        )
    }
}

/// A piece together with the square it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            color,
            kind,
            square,
        }
    }

    /// Two-letter code used by the text format, e.g. `wZ`.
    pub fn code(&self) -> String {
        format!("{}{}", self.color.letter(), self.kind.letter())
    }
}

/// Opaque trailer from the header line, carried through untouched.
pub type DiffValues = [i64; 3];
