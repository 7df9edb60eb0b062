//! Precomputed knight-move distances on the 4×4 board.
//!
//! Knight jumps cover a 4×4 grid so irregularly that no closed-form
//! distance exists, so the knight heuristic looks distances up in a
//! (source, destination) table. The table is built from four hard-coded
//! canonical distance patterns (one per rotation class: corner, the edge
//! cell next to a corner, the far edge cell, and a center cell) rotated
//! into all sixteen source cells. The two edge patterns are mirror images
//! of each other, which is how the reflective symmetries of the square
//! enter without a separate mirroring pass.

use taquin_core::Cell;

/// Board side the canonical patterns are written for.
pub const SIDE: usize = 4;

const CELLS: usize = SIDE * SIDE;

/// Minimum jump counts from source (0, 0).
const CORNER: [[u8; SIDE]; SIDE] = [
    [0, 3, 2, 5],
    [3, 4, 1, 2],
    [2, 1, 4, 3],
    [5, 2, 3, 2],
];

/// Minimum jump counts from source (0, 1).
const NEAR_EDGE: [[u8; SIDE]; SIDE] = [
    [3, 0, 3, 2],
    [2, 3, 2, 1],
    [1, 2, 1, 4],
    [2, 3, 2, 3],
];

/// Minimum jump counts from source (0, 2).
const FAR_EDGE: [[u8; SIDE]; SIDE] = [
    [2, 3, 0, 3],
    [1, 2, 3, 2],
    [4, 1, 2, 1],
    [3, 2, 3, 2],
];

/// Minimum jump counts from source (1, 1).
const CENTER: [[u8; SIDE]; SIDE] = [
    [4, 3, 2, 1],
    [3, 0, 3, 2],
    [2, 3, 2, 1],
    [1, 2, 1, 4],
];

const PATTERNS: [(Cell, [[u8; SIDE]; SIDE]); 4] = [
    (Cell::new(0, 0), CORNER),
    (Cell::new(0, 1), NEAR_EDGE),
    (Cell::new(0, 2), FAR_EDGE),
    (Cell::new(1, 1), CENTER),
];

/// Rotate a cell by `k` quarter turns.
///
/// The four rotations map each canonical source cell onto its whole
/// rotation class; across the four patterns that covers all sixteen cells
/// exactly once.
fn rotate(k: usize, cell: Cell) -> Cell {
    let m = (SIDE - 1) as i32;
    match k % 4 {
        0 => cell,
        1 => Cell::new(cell.col, m - cell.row),
        2 => Cell::new(m - cell.row, m - cell.col),
        _ => Cell::new(m - cell.col, cell.row),
    }
}

/// Knight-move distance table for the 4×4 board.
///
/// Distances are symmetric (a knight jump is reversible), so
/// `distance(p, q) == distance(q, p)` for every pair of cells.
#[derive(Clone, Debug)]
pub struct KnightTable {
    dist: [[u8; CELLS]; CELLS],
}

impl Default for KnightTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KnightTable {
    /// Build the full table by symmetry expansion of the canonical patterns.
    pub fn new() -> Self {
        let mut dist = [[0u8; CELLS]; CELLS];
        let mut filled = [false; CELLS];

        for (source, pattern) in PATTERNS {
            for k in 0..4 {
                let s = idx(rotate(k, source));
                debug_assert!(!filled[s]);
                for (r, row) in pattern.iter().enumerate() {
                    for (c, &d) in row.iter().enumerate() {
                        let dest = rotate(k, Cell::new(r as i32, c as i32));
                        dist[s][idx(dest)] = d;
                    }
                }
                filled[s] = true;
            }
        }
        debug_assert!(filled.iter().all(|&f| f));

        Self { dist }
    }

    /// Minimum number of knight jumps between two cells.
    #[inline]
    pub fn distance(&self, from: Cell, to: Cell) -> u32 {
        debug_assert!(from.in_bounds(SIDE) && to.in_bounds(SIDE));
        self.dist[idx(from)][idx(to)] as u32
    }
}

#[inline]
fn idx(cell: Cell) -> usize {
    (cell.row as usize) * SIDE + (cell.col as usize)
}
