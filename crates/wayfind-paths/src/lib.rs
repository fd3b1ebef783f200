//! Shortest paths over caller-supplied graphs.
//!
//! The crate knows nothing about worlds, maps or positions. A host describes
//! its topology through the [`Graph`] trait ("list the outgoing connections of
//! this node") and asks a [`PathFinder`] for the cheapest route between two
//! opaque [`Node`] ids:
//!
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **A\*** heuristic-guided search ([`AStar`]), driven by any [`Heuristic`],
//!   including plain closures
//!
//! A search answers `Ok(Some(path))`, `Ok(None)` when the destination is
//! unreachable, or a [`SearchError`] when the graph or heuristic breaks the
//! rules (negative costs, connections that start elsewhere, exhausted
//! expansion budget).
//!
//! [`TileGraph`] and [`AdjacencyGraph`] are ready-made graphs for grid worlds
//! and explicit edge lists.
//!
//! ```
//! use wayfind_core::{Point, Range};
//! use wayfind_paths::{Connectivity, Dijkstra, PathFinder, TileGraph};
//!
//! let mut grid = TileGraph::new(Range::sized(3, 3), Connectivity::Four);
//! grid.set_passable(Point::new(1, 1), false);
//!
//! let from = grid.node(Point::new(0, 0)).unwrap();
//! let to = grid.node(Point::new(2, 2)).unwrap();
//! let path = Dijkstra::new().find_path(&grid, from, to).unwrap().unwrap();
//! assert_eq!(path.cost(), 4.0);
//! ```
//!
//! # Tie-breaking
//!
//! Frontier entries with equal priority are expanded in the order they were
//! pushed, so the same inputs always produce the same path.

mod astar;
mod connection;
mod dijkstra;
mod distance;
mod error;
mod finder;
mod frontier;
mod graph;
mod path;
mod tile;
mod traits;

#[cfg(test)]
mod tests;

pub use astar::AStar;
pub use connection::{Connection, Cost, Node};
pub use dijkstra::Dijkstra;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::{SearchError, SearchResult};
pub use finder::{PathFinder, Search, SearchOptions, SearchStats, Strategy};
pub use graph::AdjacencyGraph;
pub use path::Path;
pub use tile::{Connectivity, GridHeuristic, Metric, TileGraph};
pub use traits::{Graph, Heuristic, Zero};
