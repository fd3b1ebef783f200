//! Grid-backed graphs for tile worlds.
//!
//! Cells of a [`Range`] become nodes numbered in row-major order, so a cell at
//! `(x, y)` in a range anchored at the origin is node `y * width + x`.

use std::f32::consts::SQRT_2;

use wayfind_core::{Point, Range};

use crate::connection::{Connection, Cost, Node};
use crate::distance::{chebyshev, euclidean, manhattan, octile};
use crate::traits::{Graph, Heuristic};

/// Which neighbouring cells a tile connects to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinals plus diagonals. A diagonal step needs both cells it cuts
    /// past to be passable.
    Eight,
}

/// A rectangle of passable and blocked tiles seen as a graph.
///
/// Cardinal steps cost 1, diagonal steps cost `SQRT_2`. Blocked cells and
/// nodes outside the range have no connections and are never connected to.
#[derive(Debug, Clone)]
pub struct TileGraph {
    rng: Range,
    passable: Vec<bool>,
    connectivity: Connectivity,
}

impl TileGraph {
    /// A graph where every cell of `rng` is passable.
    pub fn new(rng: Range, connectivity: Connectivity) -> Self {
        Self {
            rng,
            passable: vec![true; rng.len()],
            connectivity,
        }
    }

    /// A graph whose passable cells are those for which `passable` is true.
    pub fn from_fn(rng: Range, connectivity: Connectivity, passable: impl Fn(Point) -> bool) -> Self {
        Self {
            rng,
            passable: rng.iter().map(passable).collect(),
            connectivity,
        }
    }

    /// The rectangle of cells.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Block or unblock a cell. Returns `false` if `p` is outside the range.
    pub fn set_passable(&mut self, p: Point, passable: bool) -> bool {
        match self.rng.index_of(p) {
            Some(i) => {
                self.passable[i] = passable;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is inside the range and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.rng.index_of(p).is_some_and(|i| self.passable[i])
    }

    /// Node id of the cell at `p`, or `None` outside the range.
    #[inline]
    pub fn node(&self, p: Point) -> Option<Node> {
        self.rng.index_of(p)
    }

    /// Cell position of `node`, or `None` if the node is not part of the grid.
    #[inline]
    pub fn point(&self, node: Node) -> Option<Point> {
        self.rng.point_at(node)
    }

    /// Heuristic measuring `metric` distance between cells of this grid.
    pub fn heuristic(&self, metric: Metric) -> GridHeuristic {
        GridHeuristic {
            rng: self.rng,
            metric,
        }
    }

    /// The tightest admissible heuristic for this grid's connectivity:
    /// Manhattan for 4-way, octile for 8-way movement.
    pub fn default_heuristic(&self) -> GridHeuristic {
        match self.connectivity {
            Connectivity::Four => self.heuristic(Metric::Manhattan),
            Connectivity::Eight => self.heuristic(Metric::Octile),
        }
    }

    fn push_step(&self, from: Node, p: Point, q: Point, buf: &mut Vec<Connection>) {
        let Some(to) = self.rng.index_of(q) else {
            return;
        };
        if !self.passable[to] {
            return;
        }
        let cost = if p.is_diagonal_to(q) {
            // No squeezing between two blocked corners.
            if !self.is_passable(Point::new(q.x, p.y)) || !self.is_passable(Point::new(p.x, q.y)) {
                return;
            }
            SQRT_2
        } else {
            1.0
        };
        buf.push(Connection::new(from, to, cost));
    }
}

impl Graph for TileGraph {
    fn connections(&self, node: Node, buf: &mut Vec<Connection>) {
        let Some(p) = self.point(node) else {
            return;
        };
        if !self.passable[node] {
            return;
        }
        match self.connectivity {
            Connectivity::Four => {
                for q in p.neighbors_4() {
                    self.push_step(node, p, q, buf);
                }
            }
            Connectivity::Eight => {
                for q in p.neighbors_8() {
                    self.push_step(node, p, q, buf);
                }
            }
        }
    }
}

/// Distance metric used by [`GridHeuristic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Manhattan,
    Chebyshev,
    Euclidean,
    Octile,
}

/// Node heuristic over the cells of a grid.
///
/// Nodes outside the grid are estimated at 0. Holds only the range, so it can
/// outlive the graph and be moved into a boxed finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridHeuristic {
    rng: Range,
    metric: Metric,
}

impl GridHeuristic {
    pub fn new(rng: Range, metric: Metric) -> Self {
        Self { rng, metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl Heuristic for GridHeuristic {
    fn estimate(&self, node: Node, destination: Node) -> Cost {
        let (Some(a), Some(b)) = (self.rng.point_at(node), self.rng.point_at(destination)) else {
            return 0.0;
        };
        match self.metric {
            Metric::Manhattan => manhattan(a, b) as Cost,
            Metric::Chebyshev => chebyshev(a, b) as Cost,
            Metric::Euclidean => euclidean(a, b),
            Metric::Octile => octile(a, b),
        }
    }
}
