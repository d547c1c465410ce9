//! Crate root module declarations for the chezz successor engine.
//!
//! Exposes the board model, the per-piece movement rules with the contagion
//! pass and generator pipeline, and the board text utilities so the driver,
//! diagnostics binaries and benchmarks can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod contagion;
    pub mod move_generator;
    pub mod perft;
    pub mod successor_generator;
    pub mod successor_shared;
    pub mod successors_bishop;
    pub mod successors_cannon;
    pub mod successors_flinger;
    pub mod successors_king;
    pub mod successors_knight;
    pub mod successors_peon;
    pub mod successors_queen;
    pub mod successors_rook;
    pub mod successors_zombie;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_generator;
    pub mod board_parser;
    pub mod render_game_state;
}
