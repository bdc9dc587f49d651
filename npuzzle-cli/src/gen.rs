use anyhow::{Result, bail};
use clap::Parser;
use npuzzle_common::generate::{format_puzzle, make_puzzle};
use npuzzle_common::grid::{MAX_SIZE, MIN_SIZE};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Size of the puzzle's side
    size: usize,
    /// Forces generation of a solvable puzzle
    #[arg(short, long, conflicts_with = "unsolvable")]
    solvable: bool,
    /// Forces generation of an unsolvable puzzle
    #[arg(short, long)]
    unsolvable: bool,
    /// Number of random blank moves
    #[arg(short, long, default_value_t = 10_000, value_name = "NUM")]
    iterations: usize,
    /// Seed for a reproducible puzzle
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let Cli {
        size,
        solvable,
        unsolvable,
        iterations,
        seed,
    } = Cli::parse();

    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        bail!("Puzzle size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}.");
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let solvable = match (solvable, unsolvable) {
        (true, _) => true,
        (_, true) => false,
        _ => rng.random_bool(0.5),
    };

    let grid = make_puzzle(size, solvable, iterations, &mut rng);
    print!("{}", format_puzzle(size, &grid, solvable));

    Ok(())
}
