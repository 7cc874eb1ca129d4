//! Adjacency-list model for a fixed-size weighted graph.

use crate::{NodeId, Weight};

/// Weighted graph over a fixed set of `n` nodes identified by dense ids
/// in `[0, n)`.
///
/// Storage is always directed: an undirected edge is kept as two mirror
/// arcs. Adjacency lists only grow; there is no edge or node removal.
/// Node ids are not validated — passing an id outside `[0, n)` is a
/// caller error and panics on index.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adj: Vec<Vec<(NodeId, Weight)>>,
}

impl WeightedGraph {
    /// Creates a graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of stored arcs; an undirected edge counts twice.
    pub fn arc_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Appends the arc `(u, v, w)`, plus the mirror arc `(v, u, w)` when
    /// `directed` is false.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: Weight, directed: bool) {
        self.adj[u].push((v, w));
        if !directed {
            self.adj[v].push((u, w));
        }
    }

    /// Outgoing arcs of `u` as `(neighbor, weight)` pairs, in insertion
    /// order.
    pub fn neighbors(&self, u: NodeId) -> &[(NodeId, Weight)] {
        &self.adj[u]
    }

    /// Iterates over every stored arc as `(u, v, w)`.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&(v, w)| (u, v, w)))
    }
}
