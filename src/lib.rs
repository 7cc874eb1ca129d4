//! Weighted-graph shortest-path engine with a traffic-aware
//! route-optimization layer on top.
//!
//! Two layers, in dependency order:
//!
//! - [`model::WeightedGraph`] owns the adjacency lists for a fixed set of
//!   integer-identified nodes; [`routing`] implements Dijkstra and
//!   Floyd–Warshall over it, plus path reconstruction for both.
//! - [`optimizer::RouteOptimizer`] maps human-readable intersection names
//!   to node ids, keeps per-arc traffic multipliers and answers route and
//!   network-analysis queries in terms of names.
//!
//! Everything is computed eagerly on a single thread. The all-pairs
//! analysis is `O(n^3)`, so the engine is meant for networks with a small
//! node count.

pub mod error;
pub mod model;
pub mod optimizer;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::WeightedGraph;
pub use optimizer::RouteOptimizer;

/// Dense node identifier in `[0, n)`.
pub type NodeId = usize;

/// Arc weight. Finite for every stored arc; `f64::INFINITY` marks an
/// unreachable node in distance results.
pub type Weight = f64;
