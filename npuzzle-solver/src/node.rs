use super::*;

use std::cmp::Ordering;

pub const NO_PARENT: u32 = u32::MAX;

/// Arena slot for a discovered state. `parent` indexes the same arena and
/// always points at an earlier slot.
#[derive(Debug, Clone)]
pub struct Node {
    pub grid: Grid,
    pub parent: u32,
    pub path_cost: u32,
    pub heuristic_cost: u32,
}

impl Node {
    pub fn root(grid: Grid, heuristic_cost: u32) -> Self {
        Node {
            grid,
            parent: NO_PARENT,
            path_cost: 0,
            heuristic_cost,
        }
    }

    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.path_cost + self.heuristic_cost
    }

    /// Grids from the root down to this node.
    pub fn path(&self, nodes: &[Node]) -> Vec<Grid> {
        let mut path = vec![self.grid.clone()];
        let mut current_parent = self.parent;
        while current_parent != NO_PARENT {
            let parent = &nodes[current_parent as usize];
            path.push(parent.grid.clone());
            current_parent = parent.parent;
        }
        path.reverse();
        path
    }
}

/// Open-set entry. The heap pops the lowest `priority` (f) first; ties go to
/// the lower `heuristic` (h), then to the entry pushed first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NodeIndex {
    pub index: u32,
    pub priority: u32,
    pub heuristic: u32,
}

impl NodeIndex {
    pub fn new(index: u32, node: &Node) -> Self {
        NodeIndex {
            index,
            priority: node.total_cost(),
            heuristic: node.heuristic_cost,
        }
    }
}

impl Ord for NodeIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for NodeIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
