use crate::grid::{BLANK, Grid, Tile, blank_index, build_move_table};
use crate::shape::GoalShape;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Scrambles the spiral goal with `iterations` random blank moves. An
/// unsolvable puzzle additionally gets two non-blank tiles swapped, which
/// flips the permutation parity.
pub fn make_puzzle<R: Rng + ?Sized>(
    size: usize,
    solvable: bool,
    iterations: usize,
    rng: &mut R,
) -> Grid {
    let moves = build_move_table(size);
    let mut grid = GoalShape::Spiral.generate_with(size, rng);
    let mut blank = blank_index(&grid);

    for _ in 0..iterations {
        let Some(&mov) = moves[blank].choose(rng) else {
            break;
        };
        let target = (blank as isize + mov) as usize;
        grid.swap(blank, target);
        blank = target;
    }

    if !solvable {
        let len = grid.len();
        if grid[0] == BLANK || grid[1] == BLANK {
            grid.swap(len - 1, len - 2);
        } else {
            grid.swap(0, 1);
        }
    }

    grid
}

pub fn format_puzzle(size: usize, grid: &[Tile], solvable: bool) -> String {
    let width = (size * size).to_string().len();
    let mut output = format!(
        "# This puzzle is {}\n{size}\n",
        if solvable { "solvable" } else { "unsolvable" }
    );
    for row in grid.chunks(size) {
        for tile in row {
            output.push_str(&format!(" {tile:>width$}"));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Puzzle;
    use crate::parse::parse_grid;
    use crate::solvability::is_solvable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_solvability() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..=5 {
            for solvable in [true, false] {
                let grid = make_puzzle(size, solvable, 200, &mut rng);
                let puzzle = Puzzle::with_shape(size, grid, GoalShape::Spiral).unwrap();
                assert_eq!(is_solvable(&puzzle), solvable);
            }
        }
    }

    #[test]
    fn test_format_then_parse() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = make_puzzle(4, true, 1000, &mut rng);
        let text = format_puzzle(4, &grid, true);
        assert!(text.starts_with("# This puzzle is solvable\n4\n"));
        let (size, parsed) = parse_grid(&text).unwrap();
        assert_eq!(size, 4);
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_zero_iterations() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            make_puzzle(3, true, 0, &mut rng),
            GoalShape::Spiral.generate(3)
        );
    }
}
