use super::*;

use ahash::AHashMap;
use smallvec::SmallVec;

/// Estimates the remaining number of moves from `grid` to `goal`.
pub trait Heuristic {
    fn estimate(&mut self, size: usize, grid: &[Tile], goal: &[Tile]) -> u32;
}

impl<F> Heuristic for F
where
    F: FnMut(usize, &[Tile], &[Tile]) -> u32,
{
    fn estimate(&mut self, size: usize, grid: &[Tile], goal: &[Tile]) -> u32 {
        self(size, grid, goal)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    Uniform,
    Hamming,
    #[default]
    Manhattan,
    Linear,
}

impl HeuristicKind {
    pub const NAMES: [&'static str; 4] = ["uniform", "hamming", "manhattan", "linear"];

    /// Unknown names resolve to `Manhattan`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "uniform" => HeuristicKind::Uniform,
            "hamming" => HeuristicKind::Hamming,
            "linear" => HeuristicKind::Linear,
            _ => HeuristicKind::Manhattan,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Uniform => "uniform",
            HeuristicKind::Hamming => "hamming",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Linear => "linear",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            HeuristicKind::Uniform => "Uniform Cost",
            HeuristicKind::Hamming => "Hamming Distance",
            HeuristicKind::Manhattan => "Manhattan Distance",
            HeuristicKind::Linear => "Linear Conflicts",
        }
    }

    pub fn build(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Uniform => Box::new(uniform_cost),
            HeuristicKind::Hamming => Box::new(hamming_distance),
            HeuristicKind::Manhattan => Box::new(manhattan_distance),
            HeuristicKind::Linear => Box::new(LinearConflict::new()),
        }
    }
}

pub fn select_heuristic(name: &str) -> Box<dyn Heuristic> {
    HeuristicKind::from_name(name).build()
}

/// No information at all: best-first search degrades to uniform-cost search.
pub fn uniform_cost(_size: usize, _grid: &[Tile], _goal: &[Tile]) -> u32 {
    0
}

/// Misplaced tiles. The blank is not counted.
pub fn hamming_distance(_size: usize, grid: &[Tile], goal: &[Tile]) -> u32 {
    grid.iter()
        .zip(goal)
        .filter(|&(&tile, &target)| tile != target && tile != BLANK)
        .count() as u32
}

/// Sum of row and column distances of every tile to its goal cell. The blank
/// is not counted.
pub fn manhattan_distance(size: usize, grid: &[Tile], goal: &[Tile]) -> u32 {
    let goal_positions = goal_positions(goal);
    grid.iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(idx, &tile)| {
            let target = goal_positions[tile as usize];
            ((idx % size).abs_diff(target % size) + (idx / size).abs_diff(target / size)) as u32
        })
        .sum()
}

fn goal_positions(goal: &[Tile]) -> SmallVec<[usize; 16]> {
    let mut positions = SmallVec::from_elem(0, goal.len());
    for (idx, &tile) in goal.iter().enumerate() {
        positions[tile as usize] = idx;
    }
    positions
}

type Line = SmallVec<[Tile; 8]>;

/// Manhattan distance plus two moves for every linear conflict that has to be
/// resolved. Per-line results are cached for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct LinearConflict {
    cache: AHashMap<(Line, Line), u32>,
}

impl LinearConflict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_lines(&self) -> usize {
        self.cache.len()
    }

    /// Minimal conflicts of one row or column.
    pub fn line_conflicts(&mut self, grid_line: &[Tile], goal_line: &[Tile]) -> u32 {
        let key = (Line::from_slice(grid_line), Line::from_slice(goal_line));
        if let Some(&conflicts) = self.cache.get(&key) {
            return conflicts;
        }
        let conflicts = minimal_line_conflicts(grid_line, goal_line);
        self.cache.insert(key, conflicts);
        conflicts
    }
}

impl Heuristic for LinearConflict {
    fn estimate(&mut self, size: usize, grid: &[Tile], goal: &[Tile]) -> u32 {
        let mut conflicts = 0;
        let mut grid_line = Line::with_capacity(size);
        let mut goal_line = Line::with_capacity(size);

        for row in 0..size {
            let range = row * size..(row + 1) * size;
            conflicts += self.line_conflicts(&grid[range.clone()], &goal[range]);
        }
        for col in 0..size {
            grid_line.clear();
            goal_line.clear();
            grid_line.extend((col..grid.len()).step_by(size).map(|idx| grid[idx]));
            goal_line.extend((col..goal.len()).step_by(size).map(|idx| goal[idx]));
            conflicts += self.line_conflicts(&grid_line, &goal_line);
        }

        manhattan_distance(size, grid, goal) + 2 * conflicts
    }
}

/// Repeatedly drops the tile involved in the most conflicts (the lowest
/// index wins a tie) until the line is conflict free. Returns the number of
/// tiles dropped.
fn minimal_line_conflicts(grid_line: &[Tile], goal_line: &[Tile]) -> u32 {
    // goal slot of each tile that belongs to this line, None otherwise
    let mut slots: SmallVec<[Option<usize>; 8]> = grid_line
        .iter()
        .map(|&tile| match tile {
            BLANK => None,
            _ => goal_line.iter().position(|&target| target == tile),
        })
        .collect();

    let mut removed = 0;
    let mut counts: SmallVec<[u32; 8]> = SmallVec::from_elem(0, slots.len());
    loop {
        counts.fill(0);
        for j in 0..slots.len() {
            let Some(slot_j) = slots[j] else { continue };
            for k in j + 1..slots.len() {
                let Some(slot_k) = slots[k] else { continue };
                if slot_j > slot_k {
                    counts[j] += 1;
                    counts[k] += 1;
                }
            }
        }

        let mut worst = 0;
        for idx in 1..counts.len() {
            if counts[idx] > counts[worst] {
                worst = idx;
            }
        }
        if counts.get(worst).copied().unwrap_or(0) == 0 {
            return removed;
        }
        slots[worst] = None;
        removed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npuzzle_common::GoalShape;

    const SPIRAL_3: [Tile; 9] = [1, 2, 3, 8, 0, 4, 7, 6, 5];

    #[test]
    fn test_zero_at_goal() {
        let goal = GoalShape::Spiral.generate(4);
        assert_eq!(hamming_distance(4, &goal, &goal), 0);
        assert_eq!(manhattan_distance(4, &goal, &goal), 0);
        assert_eq!(LinearConflict::new().estimate(4, &goal, &goal), 0);
        assert_eq!(uniform_cost(4, &goal, &goal), 0);
    }

    #[test]
    fn test_nonzero_off_goal() {
        let goal = GoalShape::Spiral.generate(2);
        let moves = npuzzle_common::build_move_table(2);
        let mut seen = vec![goal.clone()];
        let mut frontier = vec![goal.clone()];
        while let Some(grid) = frontier.pop() {
            for &mov in &moves[npuzzle_common::blank_index(&grid)] {
                let next = npuzzle_common::apply_move(&grid, mov);
                if !seen.contains(&next) {
                    seen.push(next.clone());
                    frontier.push(next);
                }
            }
        }
        assert_eq!(seen.len(), 12);
        for grid in seen.iter().filter(|&grid| *grid != goal) {
            assert!(hamming_distance(2, grid, &goal) > 0, "{grid:?}");
            assert!(manhattan_distance(2, grid, &goal) > 0, "{grid:?}");
        }
    }

    #[test]
    fn test_hamming_ignores_blank() {
        // blank swapped with 4
        let grid = [1, 2, 3, 8, 4, 0, 7, 6, 5];
        assert_eq!(hamming_distance(3, &grid, &SPIRAL_3), 1);
        assert_eq!(manhattan_distance(3, &grid, &SPIRAL_3), 1);
    }

    #[test]
    fn test_manhattan() {
        let goal: Vec<Tile> = (0..9).collect();
        let grid = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        // every tile sits one cell before its goal; 3 and 6 wrap a row
        assert_eq!(manhattan_distance(3, &grid, &goal), 12);

        let grid = [8, 1, 2, 3, 4, 5, 6, 7, 0];
        assert_eq!(manhattan_distance(3, &grid, &goal), 4);
        assert!(manhattan_distance(3, &grid, &goal) >= hamming_distance(3, &grid, &goal));
    }

    #[test]
    fn test_line_conflicts() {
        let mut heuristic = LinearConflict::new();
        assert_eq!(heuristic.line_conflicts(&[1, 2, 3], &[1, 2, 3]), 0);
        assert_eq!(heuristic.line_conflicts(&[2, 1, 3], &[1, 2, 3]), 1);
        assert_eq!(heuristic.line_conflicts(&[3, 2, 1], &[1, 2, 3]), 2);
        // blank never conflicts
        assert_eq!(heuristic.line_conflicts(&[0, 2, 1], &[1, 2, 0]), 1);
        // one tile against two: dropping it clears the line
        assert_eq!(heuristic.line_conflicts(&[3, 1, 2], &[1, 2, 3]), 1);
        assert_eq!(heuristic.cached_lines(), 5);
        assert_eq!(heuristic.line_conflicts(&[3, 1, 2], &[1, 2, 3]), 1);
        assert_eq!(heuristic.cached_lines(), 5);
    }

    #[test]
    fn test_line_without_shared_tiles() {
        let mut heuristic = LinearConflict::new();
        assert_eq!(heuristic.line_conflicts(&[6, 5, 4], &[1, 2, 3]), 0);
        assert_eq!(heuristic.line_conflicts(&[0, 5, 4], &[1, 2, 3]), 0);
    }

    #[test]
    fn test_linear_conflict_dominates_manhattan() {
        let goal: Vec<Tile> = (0..9).collect();
        let grid = [0, 2, 1, 3, 4, 5, 6, 7, 8];
        let mut heuristic = LinearConflict::new();
        let manhattan = manhattan_distance(3, &grid, &goal);
        assert_eq!(manhattan, 2);
        assert_eq!(heuristic.estimate(3, &grid, &goal), manhattan + 2);

        let grid = [8, 1, 2, 3, 4, 5, 6, 7, 0];
        assert!(heuristic.estimate(3, &grid, &goal) >= manhattan_distance(3, &grid, &goal));
    }

    #[test]
    fn test_select_heuristic() {
        let goal: Vec<Tile> = (0..4).collect();
        let grid = [3, 1, 2, 0];
        assert_eq!(select_heuristic("uniform").estimate(2, &grid, &goal), 0);
        assert_eq!(select_heuristic("hamming").estimate(2, &grid, &goal), 1);
        assert_eq!(select_heuristic("manhattan").estimate(2, &grid, &goal), 2);
        assert_eq!(select_heuristic("unknown").estimate(2, &grid, &goal), 2);
        for name in HeuristicKind::NAMES {
            assert_eq!(HeuristicKind::from_name(name).name(), name);
        }
        assert_eq!(HeuristicKind::from_name("nope"), HeuristicKind::Manhattan);
    }

    #[test]
    fn test_closure_heuristic() {
        let mut calls = 0;
        let mut counting = |size: usize, grid: &[Tile], goal: &[Tile]| {
            calls += 1;
            hamming_distance(size, grid, goal)
        };
        assert_eq!(counting.estimate(2, &[1, 0, 2, 3], &[0, 1, 2, 3]), 1);
        assert_eq!(calls, 1);
    }
}
