use crate::shape::GoalShape;

use anyhow::{Result, bail};
use smallvec::SmallVec;

/// Tile label; `BLANK` is the empty cell.
pub type Tile = u16;

pub const BLANK: Tile = 0;
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 255;

/// Row-major tile layout. Boards up to 4x4 stay inline.
pub type Grid = SmallVec<[Tile; 16]>;

/// Blank offsets per position, in the order -1, +1, -size, +size.
pub type MoveTable = Vec<SmallVec<[isize; 4]>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    start: Grid,
    goal: Grid,
    moves: MoveTable,
}

impl Puzzle {
    pub fn new(size: usize, start: Grid, goal: Grid) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            bail!("Puzzle size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}.");
        }
        if !is_permutation(size, &start) {
            bail!("Start state is not a permutation of 0..{}.", size * size);
        }
        if !is_permutation(size, &goal) {
            bail!("Goal state is not a permutation of 0..{}.", size * size);
        }
        Ok(Self {
            size,
            start,
            goal,
            moves: build_move_table(size),
        })
    }

    pub fn with_shape(size: usize, start: Grid, shape: GoalShape) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            bail!("Puzzle size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}.");
        }
        Self::new(size, start, shape.generate(size))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> &Grid {
        &self.start
    }

    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    /// Legal blank offsets when the blank sits at `position`.
    #[inline]
    pub fn moves_at(&self, position: usize) -> &[isize] {
        &self.moves[position]
    }
}

pub fn is_permutation(size: usize, grid: &[Tile]) -> bool {
    let total = size * size;
    if grid.len() != total {
        return false;
    }
    let mut seen = vec![false; total];
    for &tile in grid {
        let idx = tile as usize;
        if idx >= total || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

pub fn build_move_table(size: usize) -> MoveTable {
    let step = size as isize;
    (0..size * size)
        .map(|tile| {
            let (x, y) = (tile % size, tile / size);
            let mut moves = SmallVec::new();
            if x > 0 {
                moves.push(-1);
            }
            if x < size - 1 {
                moves.push(1);
            }
            if y > 0 {
                moves.push(-step);
            }
            if y < size - 1 {
                moves.push(step);
            }
            moves
        })
        .collect()
}

#[inline]
pub fn blank_index(grid: &[Tile]) -> usize {
    grid.iter().position(|&t| t == BLANK).unwrap_or(grid.len())
}

/// Slides the blank by `mov`. The move must come from the move table entry of
/// the blank's position; anything else indexes out of the grid.
pub fn apply_move(grid: &[Tile], mov: isize) -> Grid {
    let blank = blank_index(grid);
    let target = (blank as isize + mov) as usize;
    let mut next = Grid::from_slice(grid);
    next.swap(blank, target);
    next
}

#[inline]
pub fn inverse(mov: isize) -> isize {
    -mov
}

pub fn to_pretty_string(size: usize, grid: &[Tile]) -> String {
    let width = (size * size - 1).to_string().len();
    let mut output = String::new();
    for row in grid.chunks(size) {
        let line = row
            .iter()
            .map(|tile| format!("{tile:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }
    output
}
