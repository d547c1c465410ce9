//! Random playout runner for eyeballing rule behavior.
//!
//! Picks a uniformly random successor each ply and prints the diagram.
//!
//! Usage:
//! `cargo run --bin random_playout -- --input board.txt --plies 20 --seed 7`

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chezz::errors::ChezzResult;
use chezz::game_state::game_state::GameState;
use chezz::move_generation::move_generator::MoveGenerator;
use chezz::move_generation::successor_generator::SuccessorGenerator;
use chezz::utils::render_game_state::render_game_state;

#[derive(Parser)]
#[command(name = "random_playout", about = "Play random successors from a board")]
struct Cli {
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value_t = 10)]
    plies: usize,

    /// Fixed seed for a reproducible playout; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ChezzResult<()> {
    env_logger::Builder::from_env(Env::default().filter_or("CHEZZ_LOG", "info")).init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut board = GameState::from_text(&fs::read_to_string(&cli.input)?)?;
    println!("{}\n", render_game_state(&board));

    for ply in 1..=cli.plies {
        let successors = SuccessorGenerator.generate_successors(&board)?;
        let Some(next) = successors.choose(&mut rng) else {
            info!("ply {ply}: no successors, stopping");
            break;
        };
        info!("ply {ply}: picked one of {} successors", successors.len());
        board = next.clone();
        println!("{}\n", render_game_state(&board));
    }

    print!("{}", board.to_text());
    Ok(())
}
