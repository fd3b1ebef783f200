use crate::astar::AStar;
use crate::connection::Node;
use crate::dijkstra::Dijkstra;
use crate::error::SearchResult;
use crate::path::Path;
use crate::traits::{Graph, Heuristic, Zero};

/// Common contract of every search strategy.
///
/// Finders hold no per-search state: each call owns its frontier and records,
/// so one finder can serve any number of calls, from any number of threads
/// when it is `Sync`. The trait is object safe.
pub trait PathFinder {
    /// Search for a cheapest path and report how much work it took.
    fn search(&self, graph: &dyn Graph, source: Node, destination: Node) -> SearchResult<Search>;

    /// Search for a cheapest path from `source` to `destination`.
    ///
    /// `Ok(None)` means the destination is unreachable. When `source` equals
    /// `destination` the result is the empty path.
    fn find_path(
        &self,
        graph: &dyn Graph,
        source: Node,
        destination: Node,
    ) -> SearchResult<Option<Path>> {
        self.search(graph, source, destination).map(|s| s.path)
    }
}

/// Outcome of a single [`PathFinder::search`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// The path found, `None` if the destination is unreachable.
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Work counters of a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier and closed.
    pub expanded: usize,
    /// Frontier insertions, including the source.
    pub pushed: usize,
}

/// Tunables shared by every finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Give up with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
    /// after closing this many nodes. `None` searches until the frontier is empty.
    pub max_expansions: Option<usize>,
    /// Reject negative or non-finite connection costs.
    pub validate_costs: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_expansions: None,
            validate_costs: true,
        }
    }
}

impl SearchOptions {
    /// Options with an expansion limit.
    pub fn limited(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }
}

/// Which algorithm a host wants, for picking a finder from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    #[default]
    Dijkstra,
    AStar,
}

impl Strategy {
    /// Build a boxed finder. A* gets the [`Zero`] heuristic; use
    /// [`finder_with`](Self::finder_with) to supply a real one.
    pub fn finder(self, options: SearchOptions) -> Box<dyn PathFinder + Send + Sync> {
        self.finder_with(Zero, options)
    }

    /// Build a boxed finder. `heuristic` is only used by [`Strategy::AStar`].
    pub fn finder_with<H>(
        self,
        heuristic: H,
        options: SearchOptions,
    ) -> Box<dyn PathFinder + Send + Sync>
    where
        H: Heuristic + Send + Sync + 'static,
    {
        match self {
            Self::Dijkstra => Box::new(Dijkstra::with_options(options)),
            Self::AStar => Box::new(AStar::with_options(heuristic, options)),
        }
    }
}
