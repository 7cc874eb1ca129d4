//! Name-addressed route optimization over the numeric graph core.
//!
//! The optimizer is the only layer that knows about intersection names;
//! the id table is built once at load time and the algorithms below it
//! only ever see dense ids.

pub mod analysis;

pub use analysis::{NetworkAnalysis, TrafficImpact};

use hashbrown::HashMap;
use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::model::WeightedGraph;
use crate::routing::{dijkstra, reconstruct_path};
use crate::{NodeId, Weight};

/// Result of a single route query. `path` is empty and `distance` is
/// infinite when the destination is unreachable; callers must check for
/// that rather than assume a path exists.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: Weight,
}

/// Traffic-aware routing façade over a city street network.
///
/// Streets are loaded once as undirected edges. Traffic multipliers are
/// held per ordered arc and applied by rebuilding a scaled directed
/// graph on every query that asks for traffic; the rebuild is `O(V+E)`
/// and nothing is cached. Single-writer, single-reader: concurrent use
/// must be serialized by the caller.
pub struct RouteOptimizer {
    graph: WeightedGraph,
    node_names: Vec<String>,
    name_to_id: HashMap<String, NodeId>,
    traffic: HashMap<(NodeId, NodeId), f64>,
}

impl RouteOptimizer {
    /// Loads a city network: one node per name, ids assigned in list
    /// order, and one undirected edge per `(from, to, weight)` triple.
    ///
    /// Every call builds a fresh optimizer; there is no incremental
    /// edge addition afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] on a duplicate node name and
    /// [`Error::UnknownNode`] when an edge endpoint is not listed in
    /// `nodes`.
    pub fn load_city_network(
        nodes: &[&str],
        edges: &[(&str, &str, Weight)],
    ) -> Result<Self, Error> {
        let node_names: Vec<String> = nodes.iter().map(ToString::to_string).collect();
        let mut name_to_id = HashMap::with_capacity(node_names.len());
        for (id, name) in node_names.iter().enumerate() {
            if name_to_id.insert(name.clone(), id).is_some() {
                return Err(Error::InvalidData(format!("duplicate node name: {name}")));
            }
        }

        let mut graph = WeightedGraph::new(node_names.len());
        for &(from, to, weight) in edges {
            let u = lookup(&name_to_id, from)?;
            let v = lookup(&name_to_id, to)?;
            graph.add_edge(u, v, weight, false);
        }

        info!(
            "Loaded city network: {} intersections, {} streets",
            node_names.len(),
            edges.len()
        );

        Ok(Self {
            graph,
            node_names,
            name_to_id,
            traffic: HashMap::new(),
        })
    }

    /// Sets the traffic multiplier for the street between two named
    /// intersections, in both directions, overwriting any prior value.
    /// `1.0` is neutral; values are expected to be positive but are not
    /// validated.
    pub fn set_traffic(&mut self, from: &str, to: &str, multiplier: f64) -> Result<(), Error> {
        let u = self.resolve(from)?;
        let v = self.resolve(to)?;
        self.traffic.insert((u, v), multiplier);
        self.traffic.insert((v, u), multiplier);
        Ok(())
    }

    /// Drops every stored traffic multiplier.
    pub fn clear_traffic(&mut self) {
        self.traffic.clear();
    }

    /// Shortest route between two named intersections.
    ///
    /// With `use_traffic` set and at least one multiplier stored, the
    /// query runs on a freshly scaled copy of the graph; otherwise on
    /// the base graph. An unreachable destination yields an empty path
    /// and infinite distance, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] when either name is not in the network,
    /// raised before any graph computation.
    pub fn optimize_route(
        &self,
        start: &str,
        end: &str,
        use_traffic: bool,
    ) -> Result<Route, Error> {
        let start_id = self.resolve(start)?;
        let end_id = self.resolve(end)?;

        let tree = if use_traffic && !self.traffic.is_empty() {
            dijkstra(&self.scaled_graph(), start_id)
        } else {
            dijkstra(&self.graph, start_id)
        };

        let path = reconstruct_path(&tree, start_id, end_id)
            .into_iter()
            .map(|id| self.node_names[id].clone())
            .collect();

        Ok(Route {
            path,
            distance: tree.dist[end_id],
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Intersection names in id order.
    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    /// Copy of the base graph with every arc weight scaled by its
    /// traffic multiplier, defaulting to `1.0`. Always directed, so the
    /// two arcs of an undirected street scale independently.
    fn scaled_graph(&self) -> WeightedGraph {
        debug!(
            "building traffic-scaled graph ({} multipliers set)",
            self.traffic.len()
        );
        let mut scaled = WeightedGraph::new(self.graph.node_count());
        for (u, v, w) in self.graph.arcs() {
            let multiplier = self.traffic.get(&(u, v)).copied().unwrap_or(1.0);
            scaled.add_edge(u, v, w * multiplier, true);
        }
        scaled
    }

    fn resolve(&self, name: &str) -> Result<NodeId, Error> {
        lookup(&self.name_to_id, name)
    }
}

fn lookup(map: &HashMap<String, NodeId>, name: &str) -> Result<NodeId, Error> {
    map.get(name)
        .copied()
        .ok_or_else(|| Error::UnknownNode(name.to_string()))
}
