use thiserror::Error;

use crate::connection::{Connection, Cost, Node};

/// Precondition violations detected while searching.
///
/// An unreachable destination is not an error: searches report it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A connection carries a negative, infinite or NaN cost.
    #[error("connection {connection} has an invalid cost")]
    InvalidCost { connection: Connection },

    /// The graph listed a connection that does not start at the queried node.
    #[error("graph listed connection {connection} as outgoing from node {node}")]
    DanglingConnection { node: Node, connection: Connection },

    /// The heuristic produced a negative or non-finite estimate.
    #[error("heuristic returned {value} for node {node}")]
    InvalidHeuristic { node: Node, value: Cost },

    /// The search expanded as many nodes as it was allowed to.
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
}

/// Result alias used throughout the crate.
pub type SearchResult<T> = Result<T, SearchError>;
