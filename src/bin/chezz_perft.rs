//! Successor-tree node counter.
//!
//! Usage:
//! `cargo run --release --bin chezz_perft -- --input board.txt --depth 3`
//! `cargo run --release --bin chezz_perft -- --input board.txt --depth 4 --threads 8`

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use env_logger::Env;

use chezz::errors::ChezzResult;
use chezz::game_state::game_state::GameState;
use chezz::move_generation::move_generator::MoveGenerator;
use chezz::move_generation::perft::{perft, perft_multi_threaded};
use chezz::move_generation::successor_generator::SuccessorGenerator;

#[derive(Parser)]
#[command(name = "chezz_perft", about = "Count successor-tree nodes to a fixed depth")]
struct Cli {
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Values above 1 split the root across threads.
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn main() -> ChezzResult<()> {
    env_logger::Builder::from_env(Env::default().filter_or("CHEZZ_LOG", "warn")).init();
    let cli = Cli::parse();

    let board = GameState::from_text(&fs::read_to_string(&cli.input)?)?;

    println!("depth,nodes,captures,zombie_gains,terminal_positions,elapsed_ms");
    for depth in 1..=cli.depth.max(1) {
        let start = Instant::now();
        let counts = if cli.threads > 1 {
            let generator: Arc<dyn MoveGenerator> = Arc::new(SuccessorGenerator);
            perft_multi_threaded(generator, &board, depth)?
        } else {
            perft(&SuccessorGenerator, &board, depth)?
        };
        println!(
            "{},{},{},{},{},{}",
            depth,
            counts.nodes,
            counts.captures,
            counts.zombie_gains,
            counts.terminal_positions,
            start.elapsed().as_millis()
        );
    }
    Ok(())
}
