//! Admissible cost estimates from a board to the goal.
//!
//! A [`Heuristic`] is just a selector; the solver resolves it into an
//! [`Estimator`] once at construction, precomputing the goal's tile
//! positions (and the knight table where needed) so the hot loop never
//! re-inspects a mode flag.

use crate::knight::KnightTable;
use crate::topology::Topology;
use taquin_core::{Board, Cell};

/// Heuristic strategy selector.
///
/// Each strategy is admissible only for the topology it matches, so the
/// solver enforces the pairing below at construction:
///
/// | Topology   | Default            | Also accepted    |
/// |------------|--------------------|------------------|
/// | `Bounded`  | `Manhattan`        | `LinearConflict` |
/// | `Circular` | `CircularManhattan`| (none)           |
/// | `Knight`   | `KnightDistance`   | (none)           |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Sum over non-blank tiles of |Δrow| + |Δcol| to the goal cell.
    Manhattan,
    /// Manhattan with each axis distance taken as `min(d, n − d)`, so wrap
    /// shortcuts are never underrated as overestimates.
    CircularManhattan,
    /// Manhattan plus 2 for every tile that must leave its goal row or
    /// goal column to let a conflicting tile pass.
    LinearConflict,
    /// Sum over non-blank tiles of precomputed minimum knight-jump counts.
    KnightDistance,
}

impl Heuristic {
    /// The default heuristic matching `topology`.
    pub fn default_for(topology: Topology) -> Self {
        match topology {
            Topology::Bounded => Heuristic::Manhattan,
            Topology::Circular => Heuristic::CircularManhattan,
            Topology::Knight => Heuristic::KnightDistance,
        }
    }

    /// Whether this heuristic is admissible under `topology`.
    pub(crate) fn admissible_for(self, topology: Topology) -> bool {
        matches!(
            (self, topology),
            (Heuristic::Manhattan, Topology::Bounded)
                | (Heuristic::LinearConflict, Topology::Bounded)
                | (Heuristic::CircularManhattan, Topology::Circular)
                | (Heuristic::KnightDistance, Topology::Knight)
        )
    }
}

/// A heuristic bound to a concrete goal board.
///
/// Resolving the selector here, once, is what keeps mode dispatch out of
/// the search loop: the knight table is built up front and the goal's tile
/// positions are indexed by tile id.
pub(crate) struct Estimator {
    kind: Resolved,
    n: usize,
    /// Goal cell of each tile id, indexed by tile. Entry 0 (the blank) is
    /// present but never read: heuristics sum non-blank tiles only.
    goal_pos: Box<[Cell]>,
}

enum Resolved {
    Manhattan,
    CircularManhattan,
    LinearConflict,
    Knight(KnightTable),
}

impl Estimator {
    pub(crate) fn new(goal: &Board, kind: Heuristic) -> Self {
        let n = goal.size();
        let mut goal_pos = vec![Cell::ZERO; n * n].into_boxed_slice();
        for (cell, tile) in goal.tiles() {
            goal_pos[tile as usize] = cell;
        }
        let kind = match kind {
            Heuristic::Manhattan => Resolved::Manhattan,
            Heuristic::CircularManhattan => Resolved::CircularManhattan,
            Heuristic::LinearConflict => Resolved::LinearConflict,
            Heuristic::KnightDistance => Resolved::Knight(KnightTable::new()),
        };
        Self { kind, n, goal_pos }
    }

    /// Estimated cost from `board` to the bound goal. Never negative, zero
    /// at the goal itself.
    pub(crate) fn estimate(&self, board: &Board) -> u32 {
        match &self.kind {
            Resolved::Manhattan => self.manhattan(board),
            Resolved::CircularManhattan => self.circular_manhattan(board),
            Resolved::LinearConflict => self.manhattan(board) + 2 * self.conflicts(board),
            Resolved::Knight(table) => self.knight_distance(board, table),
        }
    }

    fn manhattan(&self, board: &Board) -> u32 {
        let mut total = 0;
        for (cell, tile) in board.tiles() {
            if tile == 0 {
                continue;
            }
            let goal = self.goal_pos[tile as usize];
            total += (goal.row - cell.row).unsigned_abs() + (goal.col - cell.col).unsigned_abs();
        }
        total
    }

    fn circular_manhattan(&self, board: &Board) -> u32 {
        let n = self.n as u32;
        let axis = |d: u32| d.min(n - d);
        let mut total = 0;
        for (cell, tile) in board.tiles() {
            if tile == 0 {
                continue;
            }
            let goal = self.goal_pos[tile as usize];
            total += axis((goal.row - cell.row).unsigned_abs())
                + axis((goal.col - cell.col).unsigned_abs());
        }
        total
    }

    /// Count tiles that must leave their goal line.
    ///
    /// For each row, take the tiles already in their goal row in
    /// left-to-right order; the ones outside a longest increasing
    /// subsequence of goal columns have to step aside (two extra moves
    /// each). Columns likewise. Counting evicted tiles rather than
    /// conflicting pairs keeps the estimate a true lower bound when three
    /// or more tiles are mutually reversed.
    fn conflicts(&self, board: &Board) -> u32 {
        let n = self.n as i32;
        let mut evicted = 0;
        let mut line = Vec::with_capacity(self.n);

        for row in 0..n {
            line.clear();
            for col in 0..n {
                let cell = Cell::new(row, col);
                let tile = board.tile_at(cell).unwrap_or(0);
                if tile != 0 && self.goal_pos[tile as usize].row == row {
                    line.push(self.goal_pos[tile as usize].col);
                }
            }
            evicted += (line.len() - longest_increasing(&line)) as u32;
        }
        for col in 0..n {
            line.clear();
            for row in 0..n {
                let cell = Cell::new(row, col);
                let tile = board.tile_at(cell).unwrap_or(0);
                if tile != 0 && self.goal_pos[tile as usize].col == col {
                    line.push(self.goal_pos[tile as usize].row);
                }
            }
            evicted += (line.len() - longest_increasing(&line)) as u32;
        }
        evicted
    }

    fn knight_distance(&self, board: &Board, table: &KnightTable) -> u32 {
        let mut total = 0;
        for (cell, tile) in board.tiles() {
            if tile == 0 {
                continue;
            }
            total += table.distance(cell, self.goal_pos[tile as usize]);
        }
        total
    }
}

/// Length of the longest strictly increasing subsequence.
fn longest_increasing(values: &[i32]) -> usize {
    // Values are distinct (each goal cell appears once per line), so the
    // quadratic scan is over at most n entries.
    let mut best = vec![1usize; values.len()];
    for i in 0..values.len() {
        for j in 0..i {
            if values[j] < values[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}
