use crate::connection::Node;
use crate::error::SearchResult;
use crate::finder::{PathFinder, Search, SearchOptions};
use crate::frontier::best_first;
use crate::traits::{Graph, Heuristic};

/// Heuristic-guided shortest-path search.
///
/// Nodes are expanded in order of `cost so far + heuristic estimate`. The
/// heuristic is never checked for admissibility: one that overestimates still
/// terminates but may return a more expensive path than necessary.
///
/// ```
/// use wayfind_paths::{AStar, AdjacencyGraph, PathFinder};
///
/// let mut g = AdjacencyGraph::new();
/// g.connect_both(0, 1, 1.0);
/// g.connect_both(1, 2, 1.0);
///
/// // Node ids double as positions on a line.
/// let astar = AStar::new(|n: usize, dest: usize| n.abs_diff(dest) as f32);
/// let path = astar.find_path(&g, 0, 2).unwrap().unwrap();
/// assert_eq!(path.cost(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H> {
    heuristic: H,
    options: SearchOptions,
}

impl<H: Heuristic> AStar<H> {
    /// A finder with default [`SearchOptions`].
    pub fn new(heuristic: H) -> Self {
        Self::with_options(heuristic, SearchOptions::default())
    }

    pub fn with_options(heuristic: H, options: SearchOptions) -> Self {
        Self { heuristic, options }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

impl<H: Heuristic> PathFinder for AStar<H> {
    fn search(&self, graph: &dyn Graph, source: Node, destination: Node) -> SearchResult<Search> {
        best_first(graph, source, destination, Some(&self.heuristic), &self.options)
    }
}
