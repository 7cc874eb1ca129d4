use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::model::WeightedGraph;
use crate::{NodeId, Weight};

/// Single-source shortest-path result: one entry per node, with an
/// infinite distance and `None` parent for unreached nodes.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub dist: Vec<Weight>,
    pub parent: Vec<Option<NodeId>>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Weight,
    node: NodeId,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `source` over the whole graph.
///
/// Returns full distance and parent vectors so a single run can answer
/// queries for every destination. The frontier uses lazy deletion:
/// stale heap entries for already-finalized nodes are skipped when
/// popped, never removed eagerly.
///
/// Weights must be non-negative. The relaxation invariant does not hold
/// for negative weights and results on such graphs are unspecified; use
/// [`floyd_warshall`](super::floyd_warshall()) there instead.
pub fn dijkstra(graph: &WeightedGraph, source: NodeId) -> ShortestPathTree {
    let n = graph.node_count();
    let mut dist = vec![Weight::INFINITY; n];
    let mut parent = vec![None; n];
    let mut finalized = FixedBitSet::with_capacity(n);
    let mut heap = BinaryHeap::with_capacity(n);

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { node, .. }) = heap.pop() {
        if finalized.contains(node) {
            continue;
        }
        finalized.insert(node);

        for &(next, weight) in graph.neighbors(node) {
            let next_cost = dist[node] + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                parent[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    ShortestPathTree { dist, parent }
}

/// Reconstructs the `source -> dest` node sequence from a Dijkstra
/// parent vector.
///
/// Returns an empty vec when `dest` was never reached and `[source]`
/// when `source == dest`.
pub fn reconstruct_path(tree: &ShortestPathTree, source: NodeId, dest: NodeId) -> Vec<NodeId> {
    if source == dest {
        return vec![source];
    }
    if tree.parent[dest].is_none() {
        return Vec::new();
    }

    let mut path = vec![dest];
    let mut current = dest;
    while let Some(prev) = tree.parent[current] {
        path.push(prev);
        current = prev;
        if current == source {
            path.reverse();
            return path;
        }
    }

    // The parent chain ended on a node other than the source, so dest
    // hangs off a different tree.
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge(0, 1, 10.0, true);
        graph.add_edge(0, 2, 5.0, true);
        graph.add_edge(2, 3, 2.0, true);
        graph.add_edge(1, 3, 3.0, true);
        graph
    }

    #[test]
    fn distances_and_path_on_diamond() {
        let tree = dijkstra(&sample_graph(), 0);

        assert_eq!(tree.dist, vec![0.0, 10.0, 5.0, 7.0]);
        assert_eq!(reconstruct_path(&tree, 0, 3), vec![0, 2, 3]);
    }

    #[test]
    fn parents_point_along_shortest_paths() {
        let tree = dijkstra(&sample_graph(), 0);

        assert_eq!(tree.parent[0], None);
        assert_eq!(tree.parent[1], Some(0));
        assert_eq!(tree.parent[2], Some(0));
        assert_eq!(tree.parent[3], Some(2));
    }

    #[test]
    fn unreachable_node_is_infinite_with_empty_path() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, 1.0, true);

        let tree = dijkstra(&graph, 0);
        assert_eq!(tree.dist[2], Weight::INFINITY);
        assert!(reconstruct_path(&tree, 0, 2).is_empty());
    }

    #[test]
    fn source_to_itself_is_single_node_path() {
        let tree = dijkstra(&sample_graph(), 0);

        assert_eq!(tree.dist[0], 0.0);
        assert_eq!(reconstruct_path(&tree, 0, 0), vec![0]);
    }

    #[test]
    fn later_cheaper_route_replaces_earlier_relaxation() {
        // 0 -> 2 direct costs 10, but 0 -> 1 -> 2 costs 3.
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 2, 10.0, true);
        graph.add_edge(0, 1, 1.0, true);
        graph.add_edge(1, 2, 2.0, true);

        let tree = dijkstra(&graph, 0);
        assert_eq!(tree.dist[2], 3.0);
        assert_eq!(reconstruct_path(&tree, 0, 2), vec![0, 1, 2]);
    }

    #[test]
    fn path_weights_sum_to_reported_distance() {
        let graph = sample_graph();
        let tree = dijkstra(&graph, 0);

        for dest in 0..graph.node_count() {
            let path = reconstruct_path(&tree, 0, dest);
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&dest));

            let total: Weight = path
                .windows(2)
                .map(|hop| {
                    graph
                        .neighbors(hop[0])
                        .iter()
                        .find(|&&(v, _)| v == hop[1])
                        .map(|&(_, w)| w)
                        .unwrap()
                })
                .sum();
            assert_eq!(total, tree.dist[dest]);
        }
    }
}
