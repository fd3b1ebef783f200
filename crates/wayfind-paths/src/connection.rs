use std::fmt;

/// Opaque node identifier. Only meaningful together with the graph that
/// produced it.
pub type Node = usize;

/// Edge cost. Finite and non-negative.
pub type Cost = f32;

/// A directed, costed edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub from: Node,
    pub to: Node,
    pub cost: Cost,
}

impl Connection {
    /// Create a new connection.
    #[inline]
    pub const fn new(from: Node, to: Node, cost: Cost) -> Self {
        Self { from, to, cost }
    }

    /// Whether the cost can take part in a shortest-path search.
    #[inline]
    pub fn has_valid_cost(&self) -> bool {
        self.cost.is_finite() && self.cost >= 0.0
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cost)
    }
}
