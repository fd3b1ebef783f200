use crate::connection::Node;
use crate::error::SearchResult;
use crate::finder::{PathFinder, Search, SearchOptions};
use crate::frontier::best_first;
use crate::traits::{Graph, Zero};

/// Uniform-cost shortest-path search.
///
/// Expands nodes in order of their cost from the source, breaking ties by
/// discovery order. Once a node is closed its cost is final, which holds
/// because connection costs are never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    options: SearchOptions,
}

impl Dijkstra {
    /// A finder with default [`SearchOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

impl PathFinder for Dijkstra {
    fn search(&self, graph: &dyn Graph, source: Node, destination: Node) -> SearchResult<Search> {
        best_first::<Zero>(graph, source, destination, None, &self.options)
    }
}
