// Re-export key components
pub use crate::error::Error;
pub use crate::model::WeightedGraph;
pub use crate::optimizer::{NetworkAnalysis, Route, RouteOptimizer, TrafficImpact};
pub use crate::routing::{
    AllPairsPaths, ShortestPathTree, dijkstra, floyd_warshall, reconstruct_path,
    reconstruct_path_matrix,
};

// Core scalar types
pub use crate::NodeId;
pub use crate::Weight;
