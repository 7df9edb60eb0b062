//! **taquin-search** — A* search for sliding-tile puzzles.
//!
//! This crate turns a start board and a goal board into a minimum-cost
//! move sequence under a selectable adjacency rule:
//!
//! - **Topologies** ([`Topology`]): bounded slides, wrap-around slides, or
//!   knight-shaped jumps.
//! - **Heuristics** ([`Heuristic`]): Manhattan, circular Manhattan, linear
//!   conflict, or precomputed knight distances ([`KnightTable`]), each
//!   admissible for its matching topology.
//! - **Solvability** ([`is_solvable`]): the classical inversion-parity
//!   pre-check, applied for the bounded topology only.
//! - **Engine** ([`Solver`]): A* with a lazily-invalidated binary-heap
//!   frontier, returning a typed [`Outcome`].
//!
//! # Topology and heuristic pairing
//!
//! | Topology   | Default heuristic   | Also accepted    |
//! |------------|---------------------|------------------|
//! | `Bounded`  | `Manhattan`         | `LinearConflict` |
//! | `Circular` | `CircularManhattan` | (none)           |
//! | `Knight`   | `KnightDistance`    | (none)           |
//!
//! Mismatched pairings are rejected at [`Solver`] construction; nothing is
//! re-validated inside the search loop.

mod astar;
mod heuristic;
mod knight;
mod solution;
mod solvability;
mod topology;

pub use astar::{ConfigError, Outcome, Solver};
pub use heuristic::Heuristic;
pub use knight::KnightTable;
pub use solution::Solution;
pub use solvability::is_solvable;
pub use topology::Topology;
