//! Best-first search loop shared by Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::connection::{Connection, Cost, Node};
use crate::error::{SearchError, SearchResult};
use crate::finder::{Search, SearchOptions, SearchStats};
use crate::path::Path;
use crate::traits::{Graph, Heuristic};

// ---------------------------------------------------------------------------
// Search records
// ---------------------------------------------------------------------------

/// Per-node bookkeeping, stored in an arena slot.
#[derive(Clone, Debug)]
struct Record {
    node: Node,
    /// Best known cost from the source.
    g: Cost,
    /// Connection that achieved `g`. `None` only for the source.
    via: Option<Connection>,
    closed: bool,
}

/// Frontier entry, ordered by `f` then by insertion sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    slot: usize,
    f: OrderedFloat<Cost>,
    g: OrderedFloat<Cost>,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest pushed among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// State owned by one in-flight search: record arena, node index and
/// frontier.
struct Frontier {
    records: Vec<Record>,
    slots: FxHashMap<Node, usize>,
    open: BinaryHeap<Entry>,
    seq: u64,
    stats: SearchStats,
}

impl Frontier {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            slots: FxHashMap::default(),
            open: BinaryHeap::new(),
            seq: 0,
            stats: SearchStats::default(),
        }
    }

    fn push(&mut self, slot: usize, h: Cost) {
        let g = self.records[slot].g;
        self.open.push(Entry {
            slot,
            f: OrderedFloat(g + h),
            g: OrderedFloat(g),
            seq: self.seq,
        });
        self.seq += 1;
        self.stats.pushed += 1;
    }

    /// Pop the next live entry, skipping those superseded by a cheaper push.
    fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let rec = &self.records[entry.slot];
            if rec.closed || entry.g.0 > rec.g {
                continue;
            }
            return Some(entry.slot);
        }
        None
    }

    /// Walk predecessor connections back from `slot` and reverse them.
    fn reconstruct(&self, mut slot: usize) -> Path {
        let mut conns = Vec::new();
        while let Some(conn) = self.records[slot].via {
            conns.push(conn);
            slot = self.slots[&conn.from];
        }
        conns.reverse();
        Path::from_connections(conns)
    }
}

fn estimate<H: Heuristic + ?Sized>(heuristic: &H, node: Node, destination: Node) -> SearchResult<Cost> {
    let value = heuristic.estimate(node, destination);
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        log::warn!("heuristic returned {value} for node {node}");
        Err(SearchError::InvalidHeuristic { node, value })
    }
}

/// Best-first search from `source` to `destination`.
///
/// Frontier priority is `g + h`. With `heuristic = None` this is uniform-cost
/// search.
pub(crate) fn best_first<H: Heuristic + ?Sized>(
    graph: &dyn Graph,
    source: Node,
    destination: Node,
    heuristic: Option<&H>,
    options: &SearchOptions,
) -> SearchResult<Search> {
    if source == destination {
        return Ok(Search {
            path: Some(Path::empty()),
            stats: SearchStats::default(),
        });
    }

    log::debug!(
        "searching {source} -> {destination} ({})",
        if heuristic.is_some() { "a*" } else { "dijkstra" }
    );

    let h = |node: Node| match heuristic {
        Some(heu) => estimate(heu, node, destination),
        None => Ok(0.0),
    };

    let mut fr = Frontier::new();
    fr.records.push(Record {
        node: source,
        g: 0.0,
        via: None,
        closed: false,
    });
    fr.slots.insert(source, 0);
    fr.push(0, h(source)?);

    let mut buf: Vec<Connection> = Vec::new();

    while let Some(ci) = fr.pop() {
        let current = fr.records[ci].node;
        if current == destination {
            let path = fr.reconstruct(ci);
            log::debug!(
                "reached {destination}: {} steps, cost {}, {} expanded",
                path.len(),
                path.cost(),
                fr.stats.expanded
            );
            return Ok(Search {
                path: Some(path),
                stats: fr.stats,
            });
        }

        if let Some(limit) = options.max_expansions {
            if fr.stats.expanded >= limit {
                log::warn!("search {source} -> {destination} hit expansion limit {limit}");
                return Err(SearchError::ExpansionLimit { limit });
            }
        }

        fr.records[ci].closed = true;
        fr.stats.expanded += 1;
        let current_g = fr.records[ci].g;
        log::trace!("expand {current} g={current_g}");

        buf.clear();
        graph.connections(current, &mut buf);

        for &conn in buf.iter() {
            if conn.from != current {
                log::warn!("graph listed {conn} under node {current}");
                return Err(SearchError::DanglingConnection {
                    node: current,
                    connection: conn,
                });
            }
            if options.validate_costs && !conn.has_valid_cost() {
                log::warn!("rejecting connection {conn}");
                return Err(SearchError::InvalidCost { connection: conn });
            }

            let tentative = current_g + conn.cost;
            let ni = match fr.slots.get(&conn.to) {
                Some(&ni) => {
                    let n = &fr.records[ni];
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                    ni
                }
                None => {
                    let ni = fr.records.len();
                    fr.records.push(Record {
                        node: conn.to,
                        g: Cost::INFINITY,
                        via: None,
                        closed: false,
                    });
                    fr.slots.insert(conn.to, ni);
                    ni
                }
            };

            let n = &mut fr.records[ni];
            n.g = tentative;
            n.via = Some(conn);
            fr.push(ni, h(conn.to)?);
        }
    }

    log::debug!(
        "no path {source} -> {destination}, {} expanded",
        fr.stats.expanded
    );
    Ok(Search {
        path: None,
        stats: fr.stats,
    })
}
