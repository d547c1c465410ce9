//! Board model and copy-on-write successor construction.
//!
//! `GameState` owns an insertion-ordered square->piece map, the side to move
//! and the opaque diff values. Movement rules never touch the board they read;
//! they call one of the `*_successor` helpers, which clone the whole map and
//! apply a single edit to the clone.

use indexmap::IndexMap;

use crate::errors::{ChezzError, ChezzResult};
use crate::game_state::chess_types::*;
use crate::utils::board_generator::serialize_board;
use crate::utils::board_parser::parse_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Iteration order of this map is the board iteration order.
    pub pieces: IndexMap<Square, Piece>,
    pub side_to_move: Color,
    pub diff_values: DiffValues,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: IndexMap::new(),
            side_to_move: Color::White,
            diff_values: [0; 3],
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty(side_to_move: Color, diff_values: DiffValues) -> Self {
        Self {
            pieces: IndexMap::new(),
            side_to_move,
            diff_values,
        }
    }

    #[inline]
    pub fn from_text(text: &str) -> ChezzResult<Self> {
        parse_board(text)
    }

    #[inline]
    pub fn to_text(&self) -> String {
        serialize_board(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |piece| piece.color == color)
    }

    /// Put a fresh piece on `square`. An occupied square keeps its place in
    /// iteration order; an empty one is appended.
    #[inline]
    pub fn place(&mut self, color: Color, kind: PieceKind, square: Square) {
        self.pieces.insert(square, Piece::new(color, kind, square));
    }

    /// Remove whatever stands on `square`, keeping the order of the rest.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.shift_remove(&square)
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Full independent copy of this board; turn and diff values unchanged.
    #[inline]
    pub fn successor(&self) -> GameState {
        self.clone()
    }

    /// Copy with `piece` taken off its square and a `kind` piece of the same
    /// color placed on `to` (replacing any occupant).
    pub fn relocation_successor(&self, piece: &Piece, to: Square, kind: PieceKind) -> GameState {
        let mut next = self.successor();
        next.place(piece.color, kind, to);
        next.remove(piece.square);
        next
    }

    /// Copy with every listed square emptied.
    pub fn removal_successor(&self, squares: &[Square]) -> GameState {
        let mut next = self.successor();
        for square in squares {
            next.remove(*square);
        }
        next
    }

    /// Check that every piece is stored under its own square.
    ///
    /// Bounds are guaranteed by `Square`; the map guarantees one entry per
    /// square. Boards assembled by hand through `pieces` can still break the
    /// key/square agreement, which is what this reports.
    pub fn validate(&self) -> ChezzResult<()> {
        for (square, piece) in &self.pieces {
            if piece.square != *square {
                return Err(ChezzError::InvalidPosition {
                    file: i32::from(piece.square.file()),
                    rank: i32::from(piece.square.rank()),
                });
            }
        }
        Ok(())
    }
}
