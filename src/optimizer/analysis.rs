//! Network-wide statistics and congestion simulation, built on the
//! all-pairs engine.

use itertools::Itertools;
use log::info;
use serde::Serialize;

use super::RouteOptimizer;
use crate::Weight;
use crate::error::Error;
use crate::routing::floyd_warshall;

/// Aggregate statistics of the whole network, traffic ignored.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkAnalysis {
    /// Up to three nodes with the smallest mean distance to the rest of
    /// the network, most central first. Ties keep id order.
    pub central_nodes: Vec<(String, Weight)>,
    /// Largest finite shortest distance over all ordered pairs.
    pub diameter: Weight,
    /// Mean of all finite pairwise distances for `i != j`, `0.0` when
    /// no pair is reachable.
    pub avg_distance: Weight,
}

/// Outcome of a congestion simulation: network-wide average distance
/// before and after scaling the congested arcs.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficImpact {
    pub baseline_avg: Weight,
    pub traffic_avg: Weight,
    pub increase_pct: Weight,
}

impl RouteOptimizer {
    /// Runs Floyd–Warshall on the base graph and derives centrality,
    /// diameter and average distance.
    ///
    /// Centrality of a node is the mean of its finite distances to the
    /// other nodes; a node that reaches nothing averages to infinity
    /// and sorts last. Unreachable pairs are excluded from the diameter
    /// and the average, never counted as infinite.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NegativeCycle`] from the all-pairs pass.
    pub fn analyze_network(&self) -> Result<NetworkAnalysis, Error> {
        let paths = floyd_warshall(&self.graph)?;
        let n = self.graph.node_count();

        let central_nodes = (0..n)
            .map(|i| {
                let mut total = 0.0;
                let mut reachable = 0usize;
                for (j, &d) in paths.dist[i].iter().enumerate() {
                    if i != j && d.is_finite() {
                        total += d;
                        reachable += 1;
                    }
                }
                let mean = if reachable > 0 {
                    total / reachable as Weight
                } else {
                    Weight::INFINITY
                };
                (self.node_names[i].clone(), mean)
            })
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .take(3)
            .collect();

        let diameter = paths
            .dist
            .iter()
            .flatten()
            .copied()
            .filter(|d| d.is_finite())
            .fold(0.0, Weight::max);

        Ok(NetworkAnalysis {
            central_nodes,
            diameter,
            avg_distance: average_distance(&paths.dist),
        })
    }

    /// Measures how congestion on the given arcs shifts the network's
    /// average distance.
    ///
    /// Applies `multiplier` to every listed arc via [`set_traffic`],
    /// reruns the all-pairs analysis on the scaled graph and compares
    /// against the untouched baseline. Before returning, the whole
    /// multiplier table is cleared — entries set before this call are
    /// discarded along with the simulated ones.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] for a congested arc endpoint that is not
    /// in the network, or [`Error::NegativeCycle`] from either
    /// all-pairs pass.
    ///
    /// [`set_traffic`]: RouteOptimizer::set_traffic
    pub fn simulate_traffic_impact(
        &mut self,
        congested_arcs: &[(&str, &str)],
        multiplier: f64,
    ) -> Result<TrafficImpact, Error> {
        let baseline = self.analyze_network()?;

        for &(from, to) in congested_arcs {
            self.set_traffic(from, to, multiplier)?;
        }

        let paths = floyd_warshall(&self.scaled_graph())?;
        let traffic_avg = average_distance(&paths.dist);

        self.clear_traffic();

        let increase_pct = (traffic_avg - baseline.avg_distance) / baseline.avg_distance * 100.0;
        info!(
            "traffic impact: avg distance {:.3} -> {traffic_avg:.3} ({increase_pct:+.1}%)",
            baseline.avg_distance
        );

        Ok(TrafficImpact {
            baseline_avg: baseline.avg_distance,
            traffic_avg,
            increase_pct,
        })
    }
}

/// Mean of the finite off-diagonal cells, `0.0` when there are none.
fn average_distance(dist: &[Vec<Weight>]) -> Weight {
    let mut total = 0.0;
    let mut count = 0usize;
    for (i, row) in dist.iter().enumerate() {
        for (j, &d) in row.iter().enumerate() {
            if i != j && d.is_finite() {
                total += d;
                count += 1;
            }
        }
    }
    if count > 0 { total / count as Weight } else { 0.0 }
}
