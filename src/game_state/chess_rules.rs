//! Rule constants of the variant.
//!
//! Direction tables are listed in the order the movement rules scan them; that
//! order fixes the order successors are emitted in.

use crate::game_state::chess_types::Color;

pub type Step = (i8, i8);

pub const BISHOP_DIRECTIONS: [Step; 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

pub const ROOK_DIRECTIONS: [Step; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const QUEEN_DIRECTIONS: [Step; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

pub const KING_OFFSETS: [Step; 8] = QUEEN_DIRECTIONS;

pub const KNIGHT_OFFSETS: [Step; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Zombie steps, Cannon repositioning and the contagion neighborhood.
pub const ORTHOGONAL_OFFSETS: [Step; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const CANNON_SWEEP_DIRECTIONS: [Step; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Flinger steps and fling directions.
pub const FLINGER_DIRECTIONS: [Step; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub const fn is_diagonal(step: Step) -> bool {
    step.0 != 0 && step.1 != 0
}

/// Rank on which a Peon of `color` turns into a Zombie.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
