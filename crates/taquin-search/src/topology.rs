//! Board topologies: the legal-move rule applied to the blank.

use taquin_core::{Board, Cell, Move};

const SLIDES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

const JUMPS: [Move; 8] = [
    Move::Nnw,
    Move::Nne,
    Move::Ssw,
    Move::Sse,
    Move::Wnw,
    Move::Ene,
    Move::Wsw,
    Move::Ese,
];

/// The adjacency rule set of a search.
///
/// A topology decides which moves exist and where they lead; it carries no
/// state of its own and is fixed for the lifetime of a
/// [`Solver`](crate::Solver).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Four unit slides; moves off the grid are illegal.
    Bounded,
    /// Four unit slides; coordinates wrap modulo the board side.
    Circular,
    /// Eight knight-shaped jumps; moves off the grid are illegal.
    Knight,
}

impl Topology {
    /// The variant's move table, in fixed declared order.
    ///
    /// Successor generation iterates this table front to back, so
    /// expansion order is deterministic and reproducible.
    pub fn moves(self) -> &'static [Move] {
        match self {
            Topology::Bounded | Topology::Circular => &SLIDES,
            Topology::Knight => &JUMPS,
        }
    }

    /// Where `mv` sends a blank at `blank` on an n×n board, or `None` if
    /// the move is illegal there.
    ///
    /// `Circular` wraps coordinates before the bounds check, which then
    /// always passes; the other variants reject out-of-grid destinations.
    pub fn destination(self, blank: Cell, mv: Move, n: usize) -> Option<Cell> {
        let dest = blank + mv.blank_delta();
        match self {
            Topology::Circular => Some(dest.wrapped(n)),
            Topology::Bounded | Topology::Knight => dest.in_bounds(n).then_some(dest),
        }
    }

    /// Generate all successor boards of `board` into `out`.
    ///
    /// `prev` is the move that produced `board`, if any; when given, the
    /// single move that exactly reverses it is suppressed. The reversal is
    /// derived from the move symbol rather than from board content, since
    /// on circular boards a state can be reached by more than one move and
    /// content alone cannot tell "came from here" apart.
    pub fn successors(self, board: &Board, prev: Option<Move>, out: &mut Vec<(Board, Move)>) {
        out.clear();
        let blocked = prev.map(Move::reverse);
        let blank = board.blank();
        let n = board.size();
        for &mv in self.moves() {
            if Some(mv) == blocked {
                continue;
            }
            let Some(dest) = self.destination(blank, mv, n) else {
                continue;
            };
            if dest == blank {
                // Degenerate wrap on a 1-wide board; a self-swap is not a move.
                continue;
            }
            out.push((board.with_swap(blank, dest), mv));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u16]]) -> Board {
        let rows: Vec<Vec<u16>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_grid(&rows).unwrap()
    }

    fn successor_moves(topology: Topology, b: &Board, prev: Option<Move>) -> Vec<Move> {
        let mut out = Vec::new();
        topology.successors(b, prev, &mut out);
        out.iter().map(|(_, mv)| *mv).collect()
    }

    // -----------------------------------------------------------------------
    // Bounded
    // -----------------------------------------------------------------------

    #[test]
    fn bounded_corner_has_two_successors() {
        // Blank in the top-left corner: only the tiles below and to the
        // right can slide in (tile slides up / left).
        let b = board(&[&[0, 1], &[2, 3]]);
        assert_eq!(
            successor_moves(Topology::Bounded, &b, None),
            vec![Move::Up, Move::Left]
        );
    }

    #[test]
    fn bounded_center_has_four_successors() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(
            successor_moves(Topology::Bounded, &b, None),
            vec![Move::Up, Move::Down, Move::Left, Move::Right]
        );
    }

    #[test]
    fn bounded_successor_boards_swap_with_blank() {
        let b = board(&[&[0, 1], &[2, 3]]);
        let mut out = Vec::new();
        Topology::Bounded.successors(&b, None, &mut out);
        let (up, _) = out.iter().find(|(_, mv)| *mv == Move::Up).unwrap();
        assert_eq!(up.to_rows(), vec![vec![2, 1], vec![0, 3]]);
    }

    // -----------------------------------------------------------------------
    // Circular
    // -----------------------------------------------------------------------

    #[test]
    fn circular_corner_wraps_to_four_successors() {
        let b = board(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(
            successor_moves(Topology::Circular, &b, None),
            vec![Move::Up, Move::Down, Move::Left, Move::Right]
        );
        let mut out = Vec::new();
        Topology::Circular.successors(&b, None, &mut out);
        // "Down" sends the blank up, off the top row, wrapping to the bottom.
        let (down, _) = out.iter().find(|(_, mv)| *mv == Move::Down).unwrap();
        assert_eq!(down.to_rows(), vec![vec![6, 1, 2], vec![3, 4, 5], vec![0, 7, 8]]);
    }

    #[test]
    fn circular_two_moves_can_reach_the_same_board() {
        // On a 2-wide circular board, sliding left or right wraps to the
        // same destination cell; both moves are still generated.
        let b = board(&[&[0, 1], &[2, 3]]);
        let mut out = Vec::new();
        Topology::Circular.successors(&b, None, &mut out);
        let boards: Vec<_> = out
            .iter()
            .filter(|(_, mv)| matches!(mv, Move::Left | Move::Right))
            .map(|(b, _)| b.clone())
            .collect();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0], boards[1]);
    }

    // -----------------------------------------------------------------------
    // Knight
    // -----------------------------------------------------------------------

    #[test]
    fn knight_corner_has_two_successors() {
        let b = board(&[
            &[0, 1, 2, 3],
            &[4, 5, 6, 7],
            &[8, 9, 10, 11],
            &[12, 13, 14, 15],
        ]);
        // From (0, 0) only the two inward jumps stay on the board.
        assert_eq!(
            successor_moves(Topology::Knight, &b, None),
            vec![Move::Sse, Move::Ese]
        );
    }

    // -----------------------------------------------------------------------
    // Reverse-move pruning
    // -----------------------------------------------------------------------

    #[test]
    fn prev_move_suppresses_only_its_reverse() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        // This board was produced by sliding a tile up; undoing that means
        // sliding it back down.
        assert_eq!(
            successor_moves(Topology::Bounded, &b, Some(Move::Up)),
            vec![Move::Up, Move::Left, Move::Right]
        );
    }

    #[test]
    fn pruning_keeps_content_duplicates_on_circular_boards() {
        // Left and Right reach the same board here; pruning the reverse of
        // Left must still generate Left itself.
        let b = board(&[&[0, 1], &[2, 3]]);
        let moves = successor_moves(Topology::Circular, &b, Some(Move::Left));
        assert!(moves.contains(&Move::Left));
        assert!(!moves.contains(&Move::Right));
    }
}
