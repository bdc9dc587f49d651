//! Puzzle model shared by the solver and the command-line tools: grids, moves,
//! goal shapes, parsing, solvability and generation.
pub mod generate;
pub mod grid;
pub mod parse;
pub mod shape;
pub mod solvability;

pub use crate::grid::{Grid, MoveTable, Puzzle, Tile, apply_move, blank_index, build_move_table};
pub use crate::shape::GoalShape;
