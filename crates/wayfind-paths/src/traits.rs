use crate::connection::{Connection, Cost, Node};

/// Read-only graph interface that enumerates outgoing connections.
///
/// Implementations must return the same connections for a node every time
/// they are asked during a search. A node the graph does not know about simply
/// has no connections.
pub trait Graph {
    /// Append the outgoing connections of `node` into `buf`. The caller clears
    /// `buf` before calling. Every appended connection must start at `node`.
    fn connections(&self, node: Node, buf: &mut Vec<Connection>);
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn connections(&self, node: Node, buf: &mut Vec<Connection>) {
        (**self).connections(node, buf)
    }
}

/// Estimate of the remaining cost from `node` to `destination`, used by A*.
///
/// Must be finite and non-negative. Closed nodes are never reopened, so the
/// first expansion of a node has to be optimal: that holds when the estimate
/// never overestimates the true cost (admissible) and satisfies
/// `h(n) <= cost(n, m) + h(m)` on every connection (consistent). Any other
/// heuristic still terminates but may produce a suboptimal path.
///
/// Implemented for every `Fn(Node, Node) -> Cost` closure.
pub trait Heuristic {
    fn estimate(&self, node: Node, destination: Node) -> Cost;
}

impl<F> Heuristic for F
where
    F: Fn(Node, Node) -> Cost,
{
    #[inline]
    fn estimate(&self, node: Node, destination: Node) -> Cost {
        self(node, destination)
    }
}

/// The heuristic that always answers 0. A* driven by it behaves like Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _node: Node, _destination: Node) -> Cost {
        0.0
    }
}
