use log::warn;

use crate::error::Error;
use crate::model::WeightedGraph;
use crate::{NodeId, Weight};

/// All-pairs shortest-path result. `dist[i][j]` is the shortest `i -> j`
/// distance (infinite when unreachable); `parent[i][j]` is the
/// predecessor of `j` on that path, `None` when `i` cannot reach `j`.
#[derive(Debug, Clone)]
pub struct AllPairsPaths {
    pub dist: Vec<Vec<Weight>>,
    pub parent: Vec<Vec<Option<NodeId>>>,
}

/// Floyd–Warshall over every ordered node pair. `O(n^3)` time and
/// `O(n^2)` space; the caller is responsible for keeping `n` small.
///
/// Negative arc weights are handled. Parallel arcs between the same
/// ordered pair are not min-reduced: the last one inserted wins the
/// matrix cell.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] naming a node that lies on a cycle
/// with negative total weight. The diagonal scan runs strictly after
/// the full relaxation pass; a mid-pass scan could still see stale
/// non-negative diagonal values. Partial matrices are discarded on
/// failure.
pub fn floyd_warshall(graph: &WeightedGraph) -> Result<AllPairsPaths, Error> {
    let n = graph.node_count();
    let mut dist = vec![vec![Weight::INFINITY; n]; n];
    let mut parent = vec![vec![None; n]; n];

    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for (u, v, w) in graph.arcs() {
        dist[u][v] = w;
        parent[u][v] = Some(u);
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                    parent[i][j] = parent[k][j];
                }
            }
        }
    }

    for (node, row) in dist.iter().enumerate() {
        if row[node] < 0.0 {
            return Err(Error::NegativeCycle { node });
        }
    }

    Ok(AllPairsPaths { dist, parent })
}

/// Reconstructs the `source -> dest` node sequence from the parent
/// matrix.
///
/// Returns an empty vec when `dest` is unreachable and `[source]` when
/// `source == dest`. A `None` predecessor met mid-walk means the
/// matrices are internally inconsistent; that case logs a warning and
/// yields an empty path.
pub fn reconstruct_path_matrix(
    paths: &AllPairsPaths,
    source: NodeId,
    dest: NodeId,
) -> Vec<NodeId> {
    if paths.parent[source][dest].is_none() {
        return if source == dest {
            vec![source]
        } else {
            Vec::new()
        };
    }

    let mut path = Vec::new();
    let mut current = dest;
    while current != source {
        path.push(current);
        match paths.parent[source][current] {
            Some(prev) => current = prev,
            None => {
                warn!("broken predecessor chain while reconstructing {source} -> {dest}");
                return Vec::new();
            }
        }
    }
    path.push(source);
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::dijkstra;

    fn city_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(6);
        graph.add_edge(0, 1, 10.0, true);
        graph.add_edge(0, 2, 5.0, true);
        graph.add_edge(1, 3, 3.0, true);
        graph.add_edge(2, 3, 2.0, true);
        graph.add_edge(2, 4, 8.0, true);
        graph.add_edge(3, 4, 4.0, true);
        graph.add_edge(1, 5, 15.0, true);
        graph.add_edge(4, 5, 7.0, true);
        graph
    }

    #[test]
    fn multi_hop_distances_and_paths() {
        let paths = floyd_warshall(&city_graph()).unwrap();

        assert_eq!(paths.dist[0][3], 7.0);
        assert_eq!(paths.dist[0][5], 18.0);
        assert_eq!(reconstruct_path_matrix(&paths, 0, 5), vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn matches_dijkstra_on_every_pair() {
        let graph = city_graph();
        let paths = floyd_warshall(&graph).unwrap();

        for src in 0..graph.node_count() {
            let tree = dijkstra(&graph, src);
            for dest in 0..graph.node_count() {
                assert_eq!(paths.dist[src][dest], tree.dist[dest], "{src} -> {dest}");
            }
        }
    }

    #[test]
    fn handles_negative_arc_without_cycle() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, 4.0, true);
        graph.add_edge(0, 2, 5.0, true);
        graph.add_edge(1, 2, -3.0, true);

        let paths = floyd_warshall(&graph).unwrap();
        assert_eq!(paths.dist[0][2], 1.0);
        assert_eq!(reconstruct_path_matrix(&paths, 0, 2), vec![0, 1, 2]);
    }

    #[test]
    fn negative_cycle_is_reported_with_a_node() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, -2.0, true);
        graph.add_edge(1, 0, -1.0, true);

        match floyd_warshall(&graph) {
            Err(Error::NegativeCycle { node }) => assert!(node < 2),
            other => panic!("expected negative cycle, got {other:?}"),
        }
    }

    #[test]
    fn positive_cycle_with_same_shape_succeeds() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, 2.0, true);
        graph.add_edge(1, 0, 1.0, true);

        let paths = floyd_warshall(&graph).unwrap();
        assert_eq!(paths.dist[0][1], 2.0);
        assert_eq!(paths.dist[1][0], 1.0);
        assert_eq!(paths.dist[0][0], 0.0);
    }

    #[test]
    fn unreachable_pair_is_infinite_with_empty_path() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, 1.0, true);

        let paths = floyd_warshall(&graph).unwrap();
        assert_eq!(paths.dist[1][0], Weight::INFINITY);
        assert!(reconstruct_path_matrix(&paths, 1, 0).is_empty());
        assert_eq!(reconstruct_path_matrix(&paths, 2, 2), vec![2]);
    }
}
