//! The reconstructed output of a successful search.

use taquin_core::{Board, Move};

/// An ordered move sequence transforming a start board into the goal.
///
/// Holds both the move labels and every intermediate board, start and goal
/// included, so callers can replay or render the solution without
/// re-running the topology.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    moves: Vec<Move>,
    boards: Vec<Board>,
}

impl Solution {
    /// `boards` must hold exactly one more entry than `moves`: the board
    /// before and after each move.
    pub(crate) fn new(moves: Vec<Move>, boards: Vec<Board>) -> Self {
        debug_assert_eq!(boards.len(), moves.len() + 1);
        Self { moves, boards }
    }

    /// The moves, in execution order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every board along the path, from the start through the goal.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Total move count.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the start already was the goal.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The compact one-letter-per-move string, e.g. `"LLUU"`.
    pub fn symbols(&self) -> String {
        self.moves.iter().map(|mv| mv.symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taquin_core::Cell;

    fn two_move_solution() -> Solution {
        let start = Board::from_grid(&[vec![1, 2], vec![0, 3]]).unwrap();
        let mid = start.with_swap(Cell::new(1, 0), Cell::new(1, 1));
        let goal = mid.with_swap(Cell::new(1, 1), Cell::new(0, 1)); // not canonical, just a path
        Solution::new(vec![Move::Left, Move::Down], vec![start, mid, goal])
    }

    #[test]
    fn accessors() {
        let s = two_move_solution();
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.moves(), &[Move::Left, Move::Down]);
        assert_eq!(s.boards().len(), 3);
    }

    #[test]
    fn symbols_concatenate_move_letters() {
        assert_eq!(two_move_solution().symbols(), "LD");
    }

    #[test]
    fn empty_solution() {
        let b = Board::goal(2).unwrap();
        let s = Solution::new(Vec::new(), vec![b]);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.symbols(), "");
    }
}
