use crate::grid::{BLANK, Grid, Tile};

use rand::Rng;
use rand::seq::SliceRandom;

/// Layout of the goal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalShape {
    /// `0, 1, 2, ..` with the blank first.
    Ascending,
    /// `n²-1, .., 1, 0` with the blank last.
    Descending,
    /// A uniformly shuffled permutation.
    Random,
    /// Clockwise snail from the top-left corner; the blank ends the spiral.
    #[default]
    Spiral,
}

impl GoalShape {
    pub const NAMES: [&'static str; 4] = ["ascending", "descending", "random", "spiral"];

    /// Unknown names resolve to `Spiral`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ascending" => GoalShape::Ascending,
            "descending" => GoalShape::Descending,
            "random" => GoalShape::Random,
            _ => GoalShape::Spiral,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GoalShape::Ascending => "ascending",
            GoalShape::Descending => "descending",
            GoalShape::Random => "random",
            GoalShape::Spiral => "spiral",
        }
    }

    pub fn generate(&self, size: usize) -> Grid {
        self.generate_with(size, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Grid {
        let total = (size * size) as Tile;
        match self {
            GoalShape::Ascending => (0..total).collect(),
            GoalShape::Descending => (0..total).rev().collect(),
            GoalShape::Random => {
                let mut grid: Grid = (0..total).collect();
                grid.shuffle(rng);
                grid
            }
            GoalShape::Spiral => spiral(size),
        }
    }
}

fn spiral(size: usize) -> Grid {
    const UNSET: Tile = Tile::MAX;
    let total = size * size;
    let mut grid: Grid = smallvec::smallvec![UNSET; total];
    let (mut x, mut y) = (0_isize, 0_isize);
    let (mut dx, mut dy) = (1_isize, 0_isize);
    let n = size as isize;
    let is_free = |grid: &Grid, x: isize, y: isize| {
        x >= 0 && y >= 0 && x < n && y < n && grid[(y * n + x) as usize] == UNSET
    };

    for label in 1..total {
        grid[(y * n + x) as usize] = label as Tile;
        if !is_free(&grid, x + dx, y + dy) {
            // turn clockwise
            (dx, dy) = (-dy, dx);
        }
        x += dx;
        y += dy;
    }
    grid[(y * n + x) as usize] = BLANK;
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spiral() {
        assert_eq!(
            GoalShape::Spiral.generate(3).as_slice(),
            &[1, 2, 3, 8, 0, 4, 7, 6, 5]
        );
        assert_eq!(
            GoalShape::Spiral.generate(4).as_slice(),
            &[1, 2, 3, 4, 12, 13, 14, 5, 11, 0, 15, 6, 10, 9, 8, 7]
        );
        assert_eq!(GoalShape::Spiral.generate(2).as_slice(), &[1, 2, 0, 3]);
    }

    #[test]
    fn test_linear_shapes() {
        assert_eq!(GoalShape::Ascending.generate(2).as_slice(), &[0, 1, 2, 3]);
        assert_eq!(GoalShape::Descending.generate(2).as_slice(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_random_shape_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = GoalShape::Random.generate_with(4, &mut rng);
        assert!(crate::grid::is_permutation(4, &grid));
    }

    #[test]
    fn test_from_name() {
        for name in GoalShape::NAMES {
            assert_eq!(GoalShape::from_name(name).name(), name);
        }
        assert_eq!(GoalShape::from_name("snail"), GoalShape::Spiral);
    }
}
