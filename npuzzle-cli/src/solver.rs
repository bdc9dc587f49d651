mod utils;

use crate::utils::*;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use npuzzle_common::{
    GoalShape, Puzzle,
    grid::to_pretty_string,
    parse::parse_grid,
    solvability::is_solvable,
};
use npuzzle_solver::HeuristicKind;

use std::{
    io::{IsTerminal, Read, stdin},
    path::PathBuf,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Heuristic: uniform, hamming, manhattan or linear
    #[arg(short = 'H', long, default_value = "manhattan", value_name = "NAME")]
    heuristic: String,
    /// Goal layout: ascending, descending, random or spiral
    #[arg(short, long, default_value = "spiral", value_name = "NAME")]
    shape: String,
    /// Rank nodes by heuristic only (faster, may not be minimal)
    #[arg(short, long)]
    greedy: bool,
    /// Preview the puzzle and its goal without solving
    #[arg(short, long)]
    preview: bool,
    /// Path to a puzzle file to solve
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logger();
    let Cli {
        heuristic,
        shape,
        greedy,
        preview,
        file,
    } = Cli::parse();

    let content = if let Some(file) = file {
        std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read '{}'", file.display()))?
    } else if !stdin().is_terminal() {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        content
    } else {
        bail!("No puzzle `file` provided.");
    };

    let (size, start) = parse_grid(&content).context("Failed to parse puzzle")?;
    let shape = GoalShape::from_name(&shape);
    let puzzle = Puzzle::with_shape(size, start, shape)?;
    let kind = HeuristicKind::from_name(&heuristic);
    info!(
        "loaded {size}x{size} puzzle, goal shape {}, heuristic {}",
        shape.name(),
        kind.name()
    );

    if preview {
        println!("{}", to_pretty_string(size, puzzle.start()));
        println!("{}", to_pretty_string(size, puzzle.goal()));
        return Ok(());
    }
    if !is_solvable(&puzzle) {
        bail!("The puzzle is unsolvable.");
    }

    let solution = do_solve(&puzzle, kind, greedy)?;
    print!("{}", format_solution(size, &solution));

    Ok(())
}
