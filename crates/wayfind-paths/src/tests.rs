//! Cross-algorithm properties checked on seeded random graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_core::{Point, Range};

use crate::{
    AStar, AdjacencyGraph, Connectivity, Cost, Dijkstra, Graph, Node, Path, PathFinder, TileGraph,
    Zero,
};

const EPS: Cost = 1e-4;

/// Random directed graph on `0..n` with small integer costs.
fn random_graph(rng: &mut StdRng, n: usize, density: f64) -> AdjacencyGraph {
    let mut g = AdjacencyGraph::new();
    for a in 0..n {
        for b in 0..n {
            if a != b && rng.random_bool(density) {
                g.connect(a, b, rng.random_range(0..5) as Cost);
            }
        }
    }
    g
}

/// Cheapest simple path cost by exhaustive enumeration.
fn brute_force(g: &AdjacencyGraph, source: Node, destination: Node, n: usize) -> Option<Cost> {
    fn walk(
        g: &AdjacencyGraph,
        node: Node,
        destination: Node,
        visited: &mut [bool],
        cost: Cost,
        best: &mut Option<Cost>,
    ) {
        if node == destination {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        visited[node] = true;
        for c in g.outgoing(node) {
            if !visited[c.to] {
                walk(g, c.to, destination, visited, cost + c.cost, best);
            }
        }
        visited[node] = false;
    }

    let mut best = None;
    let mut visited = vec![false; n];
    walk(g, source, destination, &mut visited, 0.0, &mut best);
    best
}

/// Every connection exists in the graph and consecutive ones chain.
fn assert_well_formed(g: &dyn Graph, path: &Path, source: Node, destination: Node) {
    if source == destination {
        assert!(path.is_empty());
        return;
    }
    assert_eq!(path.source(), Some(source));
    assert_eq!(path.destination(), Some(destination));
    for w in path.as_slice().windows(2) {
        assert_eq!(w[0].to, w[1].from);
    }
    let mut buf = Vec::new();
    for c in path {
        buf.clear();
        g.connections(c.from, &mut buf);
        assert!(buf.contains(c), "{c} is not a connection of the graph");
    }
}

#[test]
fn dijkstra_is_optimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let n = rng.random_range(2..8);
        let g = random_graph(&mut rng, n, 0.35);
        let source = rng.random_range(0..n);
        let destination = rng.random_range(0..n);

        let expected = if source == destination {
            Some(0.0)
        } else {
            brute_force(&g, source, destination, n)
        };
        let found = Dijkstra::new().find_path(&g, source, destination).unwrap();
        match (expected, found) {
            (None, None) => {}
            (Some(cost), Some(path)) => {
                assert_eq!(path.cost(), cost, "{source} -> {destination} in {g:?}");
                assert_well_formed(&g, &path, source, destination);
            }
            (e, f) => panic!("brute force {e:?} vs dijkstra {f:?} in {g:?}"),
        }
    }
}

#[test]
fn zero_heuristic_astar_agrees_with_dijkstra() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let n = rng.random_range(2..10);
        let g = random_graph(&mut rng, n, 0.3);
        let source = rng.random_range(0..n);
        let destination = rng.random_range(0..n);

        let a = AStar::new(Zero).search(&g, source, destination).unwrap();
        let d = Dijkstra::new().search(&g, source, destination).unwrap();
        assert_eq!(a.path.map(|p| p.cost()), d.path.map(|p| p.cost()));
    }
}

#[test]
fn partitioned_graph_is_unreachable_across_components() {
    let mut rng = StdRng::seed_from_u64(7);
    // Component A on 0..5, component B on 5..10, shifted by 5.
    let a = random_graph(&mut rng, 5, 0.6);
    let b = random_graph(&mut rng, 5, 0.6);
    let mut g = AdjacencyGraph::new();
    for c in (0..5).flat_map(|n| a.outgoing(n).iter().copied()) {
        g.connect(c.from, c.to, c.cost);
    }
    for c in (0..5).flat_map(|n| b.outgoing(n).iter().copied()) {
        g.connect(c.from + 5, c.to + 5, c.cost);
    }

    let finders: [&dyn PathFinder; 2] = [&Dijkstra::new(), &AStar::new(Zero)];
    for finder in finders {
        for s in 0..5 {
            for t in 5..10 {
                assert_eq!(finder.find_path(&g, s, t).unwrap(), None);
                assert_eq!(finder.find_path(&g, t, s).unwrap(), None);
            }
        }
    }
}

#[test]
fn astar_matches_dijkstra_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(1234);
    for round in 0..60 {
        let connectivity = if round % 2 == 0 {
            Connectivity::Four
        } else {
            Connectivity::Eight
        };
        let rng_rect = Range::sized(rng.random_range(3..12), rng.random_range(3..12));
        let blocked: Vec<bool> = rng_rect.iter().map(|_| rng.random_bool(0.25)).collect();
        let g = TileGraph::from_fn(rng_rect, connectivity, |p| {
            !blocked[rng_rect.index_of(p).unwrap()]
        });

        let pick = |rng: &mut StdRng| {
            Point::new(
                rng.random_range(0..rng_rect.width()),
                rng.random_range(0..rng_rect.height()),
            )
        };
        let source = g.node(pick(&mut rng)).unwrap();
        let destination = g.node(pick(&mut rng)).unwrap();

        let astar = AStar::new(g.default_heuristic());
        let a = astar.search(&g, source, destination).unwrap();
        let d = Dijkstra::new().search(&g, source, destination).unwrap();

        match (&a.path, &d.path) {
            (None, None) => {}
            (Some(pa), Some(pd)) => {
                assert!((pa.cost() - pd.cost()).abs() < EPS, "round {round}");
                assert_well_formed(&g, pa, source, destination);
                assert_well_formed(&g, pd, source, destination);
                assert!(a.stats.expanded <= d.stats.expanded, "round {round}");
            }
            _ => panic!("finders disagree on reachability in round {round}"),
        }
    }
}

#[test]
fn finders_can_be_shared_across_threads() {
    let g = TileGraph::new(Range::sized(16, 16), Connectivity::Eight);
    let astar = AStar::new(g.default_heuristic());
    std::thread::scope(|s| {
        for i in 0..4 {
            let (g, astar) = (&g, &astar);
            s.spawn(move || {
                let path = astar.find_path(g, i, 255 - i).unwrap().unwrap();
                assert_well_formed(g, &path, i, 255 - i);
            });
        }
    });
}
