use rustc_hash::FxHashMap;

use crate::connection::{Connection, Cost, Node};
use crate::traits::Graph;

/// Explicit adjacency-list graph.
///
/// Useful for non-spatial topologies and for tests. Connections are returned
/// in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: FxHashMap<Node, Vec<Connection>>,
    connection_count: usize,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed connection from `from` to `to`.
    pub fn connect(&mut self, from: Node, to: Node, cost: Cost) -> &mut Self {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Connection::new(from, to, cost));
        self.connection_count += 1;
        self
    }

    /// Add connections in both directions with the same cost.
    pub fn connect_both(&mut self, a: Node, b: Node, cost: Cost) -> &mut Self {
        self.connect(a, b, cost).connect(b, a, cost)
    }

    /// Outgoing connections of `node`, empty if it has none.
    pub fn outgoing(&self, node: Node) -> &[Connection] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Nodes with at least one outgoing connection, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.keys().copied()
    }
}

impl Graph for AdjacencyGraph {
    fn connections(&self, node: Node, buf: &mut Vec<Connection>) {
        buf.extend_from_slice(self.outgoing(node));
    }
}

impl FromIterator<Connection> for AdjacencyGraph {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        let mut g = Self::new();
        for c in iter {
            g.connect(c.from, c.to, c.cost);
        }
        g
    }
}
