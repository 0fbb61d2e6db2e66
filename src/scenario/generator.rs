//! Random scenario synthesis.
//!
//! Builds connected scenarios for benchmarks and property tests: a random
//! spanning tree guarantees every node is reachable from the depot, then
//! extra distinct edges are added up to the requested count. Fleet capacity
//! is derived from total demand so that generated instances are near-full
//! but feasible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{EdgeData, GraphData, NodeData, ScenarioFile, VehicleData};

/// Bounds for a generated scenario.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Number of nodes, including the depot.
    pub num_nodes: usize,
    /// Target edge count. At least a spanning tree is always produced, and
    /// the target is capped at the number of distinct pairs.
    pub num_edges: usize,
}

/// Generates a random scenario, deterministic for a given seed.
///
/// Demands, priorities, and costs are drawn from 1..=10 and reliabilities
/// from [0.5, 1.0]. The fleet has one vehicle per 50 nodes (at least one),
/// each with capacity `ceil(1.2 * total_demand / num_vehicles)`.
///
/// # Examples
///
/// ```
/// use relief_routing::scenario::{generate, GeneratorConfig};
///
/// let config = GeneratorConfig { num_nodes: 20, num_edges: 40 };
/// let scenario = generate(config, 42);
/// assert_eq!(scenario.graph.num_nodes, 20);
/// assert!(scenario.graph.edges.len() >= 19);
/// ```
pub fn generate(config: GeneratorConfig, seed: u64) -> ScenarioFile {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = config.num_nodes.max(1);

    let mut nodes = vec![NodeData {
        id: 0,
        demand: 0,
        priority: 0,
    }];
    for id in 1..n {
        nodes.push(NodeData {
            id,
            demand: rng.random_range(1..=10),
            priority: rng.random_range(1..=10),
        });
    }

    // Spanning tree first, so every node is reachable from the depot.
    let mut edges: Vec<EdgeData> = Vec::new();
    let mut connected = vec![0usize];
    let mut remaining: Vec<usize> = (1..n).collect();
    while !remaining.is_empty() {
        let u = connected[rng.random_range(0..connected.len())];
        let v = remaining.swap_remove(rng.random_range(0..remaining.len()));
        edges.push(random_edge(&mut rng, u, v));
        connected.push(v);
    }

    // Top up with distinct extra edges.
    let target = config.num_edges.min(n * (n - 1) / 2);
    while edges.len() < target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v || edges.iter().any(|e| connects(e, u, v)) {
            continue;
        }
        edges.push(random_edge(&mut rng, u, v));
    }

    let num_vehicles = (n / 50).max(1);
    let total_demand: i32 = nodes.iter().map(|node| node.demand).sum();
    let capacity = (1.2 * f64::from(total_demand) / num_vehicles as f64).ceil() as i32;
    let vehicles = (0..num_vehicles)
        .map(|i| VehicleData {
            id: i + 1,
            capacity,
        })
        .collect();

    ScenarioFile {
        graph: GraphData {
            num_nodes: n,
            nodes,
            edges,
        },
        vehicles,
    }
}

fn random_edge(rng: &mut StdRng, u: usize, v: usize) -> EdgeData {
    EdgeData {
        u: Some(u),
        v: Some(v),
        cost: f64::from(rng.random_range(1..=10)),
        reliability: rng.random_range(0.5..=1.0),
    }
}

fn connects(edge: &EdgeData, u: usize, v: usize) -> bool {
    (edge.u == Some(u) && edge.v == Some(v)) || (edge.u == Some(v) && edge.v == Some(u))
}
