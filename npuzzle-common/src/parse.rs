use crate::grid::{Grid, MAX_SIZE, MIN_SIZE, Tile, is_permutation};

use anyhow::{Context, Result, bail};

/// Parses the puzzle text format:
///
/// ```text
/// # comment
/// 3
/// 1 2 3
/// 8 0 4  # trailing comment
/// 7 6 5
/// ```
pub fn parse_grid(content: &str) -> Result<(usize, Grid)> {
    let mut lines = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty());

    let size_line = lines.next().context("Missing puzzle size")?;
    let size = size_line
        .parse::<usize>()
        .with_context(|| format!("Failed to parse size at '{size_line}'"))?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        bail!("Puzzle size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}.");
    }

    let mut grid = Grid::with_capacity(size * size);
    let mut rows = 0;
    for line in lines {
        let line_context = || format!("Failed to parse at '{line}'");
        if rows == size {
            bail!("Too many rows, expected {size}; {}", line_context());
        }
        let row = line
            .split_whitespace()
            .map(|value| value.parse::<Tile>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid tile")
            .with_context(line_context)?;
        if row.len() != size {
            bail!(
                "Expected {size} tiles per row, got {}; {}",
                row.len(),
                line_context()
            );
        }
        grid.extend(row);
        rows += 1;
    }

    if rows != size {
        bail!("Expected {size} rows, got {rows}.");
    }
    if !is_permutation(size, &grid) {
        bail!("Tiles must be a permutation of 0..{}.", size * size);
    }

    Ok((size, grid))
}
