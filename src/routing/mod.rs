//! Shortest-path algorithms over [`WeightedGraph`](crate::model::WeightedGraph).

pub mod dijkstra;
pub mod floyd_warshall;

pub use dijkstra::{ShortestPathTree, dijkstra, reconstruct_path};
pub use floyd_warshall::{AllPairsPaths, floyd_warshall, reconstruct_path_matrix};
