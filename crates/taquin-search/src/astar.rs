//! The A* engine.
//!
//! [`Solver`] binds a goal board, a topology, and a heuristic once at
//! construction; [`Solver::solve`] then runs best-first search over
//! immutable boards. The open queue is a [`BinaryHeap`], which cannot
//! remove or reprioritize arbitrary entries, so a cheaper path to a queued
//! board *tombstones* the old node (clears its liveness flag) and pushes a
//! replacement; dead entries are skipped when popped. Nodes live in an
//! arena for the whole search: parent links always point at strictly
//! cheaper ancestors, and the surviving goal node is unwound into a
//! [`Solution`].

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use taquin_core::{Board, Move};

use crate::heuristic::{Estimator, Heuristic};
use crate::knight;
use crate::solution::Solution;
use crate::solvability;
use crate::topology::Topology;

// ---------------------------------------------------------------------------
// Errors and outcomes
// ---------------------------------------------------------------------------

/// A topology/heuristic/board combination rejected at setup.
///
/// Configuration is validated before any search work happens; once a
/// search starts, every operation is total and no error can occur
/// mid-flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The heuristic is not admissible under the topology.
    HeuristicMismatch {
        topology: Topology,
        heuristic: Heuristic,
    },
    /// Knight searches need the 4×4 board the distance table is built for.
    KnightGridSize { n: usize },
    /// Start and goal boards have different side lengths.
    SizeMismatch { start: usize, goal: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeuristicMismatch {
                topology,
                heuristic,
            } => write!(
                f,
                "config: heuristic {heuristic:?} is not admissible for topology {topology:?}"
            ),
            Self::KnightGridSize { n } => write!(
                f,
                "config: knight topology requires a {side}x{side} board, got {n}x{n}",
                side = knight::SIDE
            ),
            Self::SizeMismatch { start, goal } => write!(
                f,
                "config: start board is {start}x{start} but goal is {goal}x{goal}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Terminal result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A minimum-cost path was found.
    Solved(Solution),
    /// The parity pre-check proved the instance unreachable. Only the
    /// bounded topology can report this.
    Unsolvable,
    /// The frontier emptied without reaching the goal. This is the normal
    /// "no path" signal for topologies the parity check does not cover.
    Exhausted,
}

// ---------------------------------------------------------------------------
// Search nodes and the lazily-invalidated frontier
// ---------------------------------------------------------------------------

struct Node {
    board: Board,
    g: u32,
    f: u32,
    parent: Option<u32>,
    mv: Option<Move>,
    /// Cleared when a cheaper node for the same board supersedes this one.
    /// The only field ever written after construction.
    live: bool,
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: u32,
    f: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties go
        // to the earliest-created node, keeping expansion order
        // deterministic.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open list with lazy invalidation.
///
/// Tracks, per board, the single live frontier node. Pushing a strictly
/// cheaper duplicate tombstones the old node instead of removing it from
/// the heap; [`pop`](Frontier::pop) discards tombstones as they surface.
struct Frontier {
    heap: BinaryHeap<NodeRef>,
    nodes: Vec<Node>,
    best: HashMap<Board, u32>,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            nodes: Vec::new(),
            best: HashMap::new(),
        }
    }

    fn node(&self, idx: u32) -> &Node {
        &self.nodes[idx as usize]
    }

    /// Offer a path of cost `g` to `board`. Returns whether a node was
    /// created: a board already queued at `g` or cheaper is left alone
    /// (strict domination keeps the search terminating).
    fn push(&mut self, board: Board, g: u32, h: u32, parent: Option<u32>, mv: Option<Move>) -> bool {
        if let Some(&old) = self.best.get(&board) {
            if self.nodes[old as usize].g <= g {
                return false;
            }
            self.nodes[old as usize].live = false;
        }
        let idx = self.nodes.len() as u32;
        let f = g + h;
        self.nodes.push(Node {
            board: board.clone(),
            g,
            f,
            parent,
            mv,
            live: true,
        });
        self.best.insert(board, idx);
        self.heap.push(NodeRef { idx, f });
        true
    }

    /// Pop the live node with the smallest `f`, skipping tombstones.
    fn pop(&mut self) -> Option<u32> {
        while let Some(NodeRef { idx, .. }) = self.heap.pop() {
            if self.nodes[idx as usize].live {
                self.best.remove(&self.nodes[idx as usize].board);
                return Some(idx);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// A configured search engine.
///
/// The goal board, topology, and heuristic are bound here once; repeated
/// [`solve`](Solver::solve) calls share nothing but this configuration, so
/// a `Solver` can be reused across independent start boards.
pub struct Solver {
    goal: Board,
    topology: Topology,
    heuristic: Heuristic,
    estimator: Estimator,
    prune_reverse: bool,
}

impl Solver {
    /// Create a solver with the default heuristic for `topology`.
    pub fn new(goal: Board, topology: Topology) -> Result<Self, ConfigError> {
        Self::with_heuristic(goal, topology, Heuristic::default_for(topology))
    }

    /// Create a solver with an explicit heuristic.
    ///
    /// Rejects pairings the heuristic is not admissible for, and knight
    /// searches on any board the distance table does not cover.
    pub fn with_heuristic(
        goal: Board,
        topology: Topology,
        heuristic: Heuristic,
    ) -> Result<Self, ConfigError> {
        if !heuristic.admissible_for(topology) {
            return Err(ConfigError::HeuristicMismatch {
                topology,
                heuristic,
            });
        }
        if topology == Topology::Knight && goal.size() != knight::SIDE {
            return Err(ConfigError::KnightGridSize { n: goal.size() });
        }
        let estimator = Estimator::new(&goal, heuristic);
        Ok(Self {
            goal,
            topology,
            heuristic,
            estimator,
            prune_reverse: true,
        })
    }

    /// Whether successor generation skips the move that undoes the parent
    /// edge. On by default; purely an expansion-count optimization, since
    /// the closed set would reject the parent board anyway.
    pub fn prune_reverse(mut self, on: bool) -> Self {
        self.prune_reverse = on;
        self
    }

    /// The goal board this solver searches toward.
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// The topology this solver searches under.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The heuristic this solver estimates with.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Search for a minimum-cost path from `start` to the goal.
    ///
    /// Runs to completion in one call: either a path is found, the parity
    /// pre-check (bounded topology only) proves there is none, or the
    /// frontier empties. The search itself cannot fail; the only error is
    /// a start board whose size does not match the goal's.
    pub fn solve(&self, start: &Board) -> Result<Outcome, ConfigError> {
        if start.size() != self.goal.size() {
            return Err(ConfigError::SizeMismatch {
                start: start.size(),
                goal: self.goal.size(),
            });
        }

        log::debug!(
            "solving {n}x{n} board: topology={:?} heuristic={:?}",
            self.topology,
            self.heuristic,
            n = start.size(),
        );

        if start == &self.goal {
            return Ok(Outcome::Solved(Solution::new(
                Vec::new(),
                vec![start.clone()],
            )));
        }

        if self.topology == Topology::Bounded && !solvability::is_solvable(start, &self.goal) {
            log::debug!("parity check: unsolvable, search skipped");
            return Ok(Outcome::Unsolvable);
        }

        let mut frontier = Frontier::new();
        let mut closed: HashSet<Board> = HashSet::new();
        let mut successors: Vec<(Board, Move)> = Vec::with_capacity(8);
        let mut expanded = 0u64;

        frontier.push(start.clone(), 0, self.estimator.estimate(start), None, None);

        while let Some(idx) = frontier.pop() {
            if frontier.node(idx).board == self.goal {
                let solution = reconstruct(&frontier.nodes, idx);
                log::debug!(
                    "solved in {} moves ({expanded} expanded, {} generated)",
                    solution.len(),
                    frontier.nodes.len(),
                );
                return Ok(Outcome::Solved(solution));
            }

            let current = frontier.node(idx);
            let g = current.g;
            let prev = if self.prune_reverse { current.mv } else { None };
            let board = current.board.clone();
            closed.insert(board.clone());
            expanded += 1;

            self.topology.successors(&board, prev, &mut successors);
            for (succ, mv) in successors.drain(..) {
                if closed.contains(&succ) {
                    continue;
                }
                let h = self.estimator.estimate(&succ);
                frontier.push(succ, g + 1, h, Some(idx), Some(mv));
            }
        }

        log::debug!("frontier exhausted after {expanded} expansions, no path");
        Ok(Outcome::Exhausted)
    }
}

/// Walk parent links from the goal node back to the start and reverse.
fn reconstruct(nodes: &[Node], goal_idx: u32) -> Solution {
    let mut moves = Vec::new();
    let mut boards = Vec::new();
    let mut cursor = Some(goal_idx);
    while let Some(idx) = cursor {
        let node = &nodes[idx as usize];
        boards.push(node.board.clone());
        if let Some(mv) = node.mv {
            moves.push(mv);
        }
        cursor = node.parent;
    }
    moves.reverse();
    boards.reverse();
    Solution::new(moves, boards)
}
