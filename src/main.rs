//! Driver: read one board, write every successor to its own numbered file.
//!
//! Usage:
//! `chezz < board.txt`
//! `chezz --input board.txt --output-dir out --threads 4`

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use chezz::errors::ChezzResult;
use chezz::game_state::game_state::GameState;
use chezz::move_generation::move_generator::MoveGenerator;
use chezz::move_generation::successor_generator::generator_for_threads;

#[derive(Parser)]
#[command(name = "chezz", version, about = "Enumerate every successor of a chezz board")]
struct Cli {
    /// Board file to read; standard input when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory the numbered successor files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// File name stem, files are named `<prefix>.000`, `<prefix>.001`, ...
    #[arg(long, default_value = "board")]
    prefix: String,

    /// Worker threads for generation.
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

/// `<dir>/<prefix>.NNN`, zero-padded to three digits.
fn successor_path(output_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    output_dir.join(format!("{prefix}.{index:03}"))
}

fn run(cli: &Cli) -> ChezzResult<usize> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let board = GameState::from_text(&text)?;
    let generator = generator_for_threads(cli.threads);
    let successors = generator.generate_successors(&board)?;

    for (index, next) in successors.iter().enumerate() {
        fs::write(successor_path(&cli.output_dir, &cli.prefix, index), next.to_text())?;
    }
    Ok(successors.len())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or("CHEZZ_LOG", "warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(count) => {
            info!("wrote {count} successor boards to {}", cli.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("chezz: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::successor_path;

    #[test]
    fn successor_files_are_numbered_with_three_digits_from_zero() {
        let dir = Path::new("out");
        assert_eq!(successor_path(dir, "board", 0), PathBuf::from("out/board.000"));
        assert_eq!(successor_path(dir, "board", 7), PathBuf::from("out/board.007"));
        assert_eq!(successor_path(dir, "next", 42), PathBuf::from("out/next.042"));
        assert_eq!(successor_path(dir, "board", 999), PathBuf::from("out/board.999"));
    }
}
