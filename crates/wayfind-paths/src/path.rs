use std::slice;

use crate::connection::{Connection, Cost, Node};

/// The connections leading from a search's source to its destination, in
/// travel order.
///
/// Consecutive connections chain: each one starts where the previous one
/// ends. A search whose source equals its destination yields the empty path.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    connections: Vec<Connection>,
}

impl Path {
    /// The path that goes nowhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path from connections already in travel order.
    pub(crate) fn from_connections(connections: Vec<Connection>) -> Self {
        debug_assert!(connections.windows(2).all(|w| w[0].to == w[1].from));
        Self { connections }
    }

    /// Number of connections.
    #[inline]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Sum of connection costs. Zero for the empty path.
    pub fn cost(&self) -> Cost {
        self.connections.iter().map(|c| c.cost).sum()
    }

    /// First connection, i.e. the next step to take.
    #[inline]
    pub fn first(&self) -> Option<&Connection> {
        self.connections.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Connection> {
        self.connections.last()
    }

    /// Node the path starts at, if it has any connections.
    pub fn source(&self) -> Option<Node> {
        self.first().map(|c| c.from)
    }

    /// Node the path ends at, if it has any connections.
    pub fn destination(&self) -> Option<Node> {
        self.last().map(|c| c.to)
    }

    /// Every node on the path, source first. Empty for the empty path.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.source()
            .into_iter()
            .chain(self.connections.iter().map(|c| c.to))
    }

    /// Iterate connections in travel order. Can be called any number of times.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Connection] {
        &self.connections
    }

    pub fn into_vec(self) -> Vec<Connection> {
        self.connections
    }
}

impl IntoIterator for Path {
    type Item = Connection;
    type IntoIter = std::vec::IntoIter<Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Connection;
    type IntoIter = slice::Iter<'a, Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::from_connections(vec![
            Connection::new(0, 1, 1.0),
            Connection::new(1, 4, 2.5),
            Connection::new(4, 7, 0.5),
        ])
    }

    #[test]
    fn empty_path() {
        let p = Path::empty();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.cost(), 0.0);
        assert_eq!(p.source(), None);
        assert_eq!(p.destination(), None);
        assert_eq!(p.nodes().count(), 0);
    }

    #[test]
    fn endpoints_and_nodes() {
        let p = sample();
        assert_eq!(p.len(), 3);
        assert_eq!(p.source(), Some(0));
        assert_eq!(p.destination(), Some(7));
        assert_eq!(p.nodes().collect::<Vec<_>>(), vec![0, 1, 4, 7]);
        assert_eq!(p.cost(), 4.0);
    }

    #[test]
    fn iteration_is_restartable() {
        let p = sample();
        let first: Vec<_> = p.iter().map(|c| c.to).collect();
        let second: Vec<_> = (&p).into_iter().map(|c| c.to).collect();
        assert_eq!(first, second);
        let owned: Vec<Connection> = p.clone().into_iter().collect();
        assert_eq!(owned.as_slice(), p.as_slice());
    }
}
