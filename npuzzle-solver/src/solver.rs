use super::*;

use ahash::AHashSet;
use cpu_time::ProcessTime;
use log::{debug, trace};
use std::{collections::BinaryHeap, time::Duration};

pub fn solve(puzzle: &Puzzle, heuristic: &mut dyn Heuristic, greedy: bool) -> SolveResult {
    Solver::new(puzzle, heuristic).greedy(greedy).solve()
}

/// Best-first search over puzzle states.
///
/// Nodes live in an append-only arena; the open heap holds indices into it
/// and may contain several entries for one state. Stale entries are dropped
/// when popped. A state is closed for good on its first expansion, which
/// keeps A* optimal only because every move costs the same.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    heuristic: &'a mut dyn Heuristic,
    greedy: bool,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle, heuristic: &'a mut dyn Heuristic) -> Self {
        Self {
            puzzle,
            heuristic,
            greedy: false,
        }
    }

    /// Greedy mode keeps g at 0 so nodes rank by h alone. Faster, but the
    /// solution is no longer guaranteed to be the shortest.
    pub fn greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    fn path_cost_increment(&self) -> u32 {
        if self.greedy { 0 } else { 1 }
    }

    fn estimate(&mut self, grid: &[Tile]) -> u32 {
        let puzzle = self.puzzle;
        self.heuristic.estimate(puzzle.size(), grid, puzzle.goal())
    }

    pub fn solve(mut self) -> SolveResult {
        let timer = ProcessTime::now();
        let puzzle = self.puzzle;
        let increment = self.path_cost_increment();

        let mut open = BinaryHeap::new();
        let mut closed: AHashSet<Grid> = AHashSet::new();
        let mut node_storage: Vec<Node> = Vec::new();

        let root = Node::root(puzzle.start().clone(), self.estimate(puzzle.start()));
        debug!(
            "search start: size={} h0={} greedy={}",
            puzzle.size(),
            root.heuristic_cost,
            self.greedy
        );
        open.push(NodeIndex::new(0, &root));
        node_storage.push(root);

        let mut expanded = 0;
        let mut peak_size = 1;
        let mut solution = None;

        while let Some(entry) = open.pop() {
            expanded += 1;
            let current = &node_storage[entry.index as usize];

            if current.grid == *puzzle.goal() {
                solution = Some(current.path(&node_storage));
                break;
            }
            if closed.contains(&current.grid) {
                continue;
            }
            closed.insert(current.grid.clone());

            let grid = current.grid.clone();
            let path_cost = current.path_cost + increment;
            trace!(
                "expand #{} g={} h={}",
                entry.index, current.path_cost, current.heuristic_cost
            );

            for &mov in puzzle.moves_at(blank_index(&grid)) {
                let next_grid = apply_move(&grid, mov);
                if closed.contains(&next_grid) {
                    continue;
                }
                let heuristic_cost = self.estimate(&next_grid);
                let node = Node {
                    grid: next_grid,
                    parent: entry.index,
                    path_cost,
                    heuristic_cost,
                };
                open.push(NodeIndex::new(node_storage.len() as u32, &node));
                node_storage.push(node);
            }

            peak_size = peak_size.max(open.len() + closed.len());
        }

        let elapsed = timer.elapsed();
        debug!(
            "search end: solved={} expanded={expanded} peak={peak_size} open={} closed={} elapsed={elapsed:?}",
            solution.is_some(),
            open.len(),
            closed.len()
        );

        SolveResult {
            elapsed,
            expanded,
            peak_size,
            open_size: open.len(),
            closed_size: closed.len(),
            solution,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Process CPU time spent inside `solve`.
    pub elapsed: Duration,
    /// Nodes popped from the open set ("time complexity").
    pub expanded: usize,
    /// Largest `|open| + |closed|` seen ("size complexity").
    pub peak_size: usize,
    pub open_size: usize,
    pub closed_size: usize,
    /// Grids from start to goal inclusive; `None` when the open set ran dry.
    pub solution: Option<Vec<Grid>>,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }
}
