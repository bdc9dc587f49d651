use crate::grid::{Puzzle, Tile, blank_index};

/// Number of tile pairs whose relative order differs between `start` and
/// `goal`, blank included.
pub fn inversion_sum(start: &[Tile], goal: &[Tile]) -> usize {
    let mut goal_positions = vec![0; goal.len()];
    for (idx, &tile) in goal.iter().enumerate() {
        goal_positions[tile as usize] = idx;
    }
    let ranks: Vec<usize> = start
        .iter()
        .map(|&tile| goal_positions[tile as usize])
        .collect();

    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| ranks[i + 1..].iter().filter(|&&next| next < rank).count())
        .sum()
}

/// A position is reachable iff the permutation parity matches the parity of
/// the blank's Manhattan displacement.
pub fn is_solvable(puzzle: &Puzzle) -> bool {
    let size = puzzle.size();
    let (start, goal) = (puzzle.start(), puzzle.goal());
    let inversions = inversion_sum(start, goal);

    let start_blank = blank_index(start);
    let goal_blank = blank_index(goal);
    let blank_distance = (start_blank % size).abs_diff(goal_blank % size)
        + (start_blank / size).abs_diff(goal_blank / size);

    inversions % 2 == blank_distance % 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GoalShape;
    use smallvec::smallvec;

    #[test]
    fn test_inversion_sum() {
        assert_eq!(inversion_sum(&[0, 1, 2, 3], &[0, 1, 2, 3]), 0);
        assert_eq!(inversion_sum(&[1, 0, 2, 3], &[0, 1, 2, 3]), 1);
        assert_eq!(inversion_sum(&[3, 2, 1, 0], &[0, 1, 2, 3]), 6);
    }

    #[test]
    fn test_is_solvable() {
        let solvable =
            Puzzle::with_shape(3, smallvec![1, 2, 3, 8, 4, 0, 7, 6, 5], GoalShape::Spiral)
                .unwrap();
        assert!(is_solvable(&solvable));

        let unsolvable =
            Puzzle::with_shape(3, smallvec![2, 1, 3, 8, 0, 4, 7, 6, 5], GoalShape::Spiral)
                .unwrap();
        assert!(!is_solvable(&unsolvable));

        let swapped_row =
            Puzzle::with_shape(2, smallvec![0, 2, 1, 3], GoalShape::Ascending).unwrap();
        assert!(!is_solvable(&swapped_row));
    }
}
