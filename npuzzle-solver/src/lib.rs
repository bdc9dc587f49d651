//! This crate solves sliding-tile puzzles with best-first (A* or greedy) search.
//!
mod heuristic;
mod node;
mod solver;

use npuzzle_common::grid::{BLANK, Grid, Puzzle, Tile, apply_move, blank_index};

use crate::node::*;

pub use crate::heuristic::{
    Heuristic, HeuristicKind, LinearConflict, hamming_distance, manhattan_distance,
    select_heuristic, uniform_cost,
};
pub use crate::solver::{SolveResult, Solver, solve};
