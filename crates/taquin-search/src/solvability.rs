//! Inversion-parity solvability test for the bounded topology.
//!
//! Slides on a bounded board preserve a parity invariant of the tile
//! permutation: horizontal slides change nothing, and a vertical slide
//! moves one tile past n−1 others while shifting the blank one row. For
//! odd n the inversion count keeps its parity; for even n the inversion
//! count plus the blank's row does. Two boards are mutually reachable
//! exactly when their invariants agree.
//!
//! The invariant says nothing about circular or knight boards, whose extra
//! moves break it; the solver never consults this check for those
//! topologies and instead reports unsolvable instances by exhausting the
//! frontier.

use taquin_core::Board;

/// Whether `start` can reach `goal` using bounded slides.
///
/// Both boards must share the same side length.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    debug_assert_eq!(start.size(), goal.size());
    invariant(start) == invariant(goal)
}

/// The conserved parity bit of a board.
fn invariant(board: &Board) -> bool {
    let tiles: Vec<u16> = board.tiles().map(|(_, tile)| tile).collect();
    let mut inversions = 0usize;
    for (i, &a) in tiles.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for &b in &tiles[i + 1..] {
            if b != 0 && a > b {
                inversions += 1;
            }
        }
    }

    let n = board.size();
    if n % 2 == 1 {
        inversions % 2 == 0
    } else {
        // 1-indexed from the bottom, as the classical theorem states it.
        let blank_row_from_bottom = n - board.blank().row as usize;
        (inversions + blank_row_from_bottom) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taquin_core::Cell;

    fn board(rows: &[&[u16]]) -> Board {
        let rows: Vec<Vec<u16>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_grid(&rows).unwrap()
    }

    #[test]
    fn goal_reaches_itself() {
        for n in [2, 3, 4, 5] {
            let goal = Board::goal(n).unwrap();
            assert!(is_solvable(&goal, &goal));
        }
    }

    #[test]
    fn classic_fourteen_fifteen_swap_is_unsolvable() {
        let start = board(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
            &[13, 15, 14, 0],
        ]);
        assert!(!is_solvable(&start, &Board::goal(4).unwrap()));
    }

    #[test]
    fn three_by_three_swap_is_unsolvable() {
        let start = board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
        assert!(!is_solvable(&start, &Board::goal(3).unwrap()));
    }

    #[test]
    fn scrambled_but_even_is_solvable() {
        let start = board(&[
            &[1, 2, 3, 4],
            &[5, 0, 6, 7],
            &[9, 10, 11, 8],
            &[13, 14, 15, 12],
        ]);
        assert!(is_solvable(&start, &Board::goal(4).unwrap()));
    }

    #[test]
    fn every_slide_preserves_the_invariant() {
        // Walk a few boards through all legal slides and check the
        // invariant never flips.
        let seeds = [
            board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]),
            board(&[&[0, 2, 3, 4], &[1, 5, 6, 7], &[9, 10, 11, 8], &[13, 14, 15, 12]]),
        ];
        for b in seeds {
            let before = invariant(&b);
            let blank = b.blank();
            for (dr, dc) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let dest = Cell::new(blank.row + dr, blank.col + dc);
                if dest.in_bounds(b.size()) {
                    assert_eq!(invariant(&b.with_swap(blank, dest)), before);
                }
            }
        }
    }

    #[test]
    fn arbitrary_goal_pairs() {
        // Reachability is symmetric and transitive through the invariant:
        // two odd-permutation boards are reachable from each other even
        // though neither reaches the canonical goal.
        let a = board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
        let c = board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert!(is_solvable(&a, &c));
        assert!(!is_solvable(&a, &Board::goal(3).unwrap()));
    }
}
