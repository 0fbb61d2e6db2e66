//! Scenario loading and construction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use super::model::ScenarioFile;
use crate::models::{Node, Vehicle, DEPOT};
use crate::network::Network;

/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be opened or read.
    #[error("cannot open scenario file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid scenario JSON.
    #[error("malformed scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fully constructed scenario: network plus fleet.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Road network with demands and priorities attached.
    pub network: Network,
    /// The vehicle fleet.
    pub vehicles: Vec<Vehicle>,
}

/// Reads and builds a scenario from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use relief_routing::scenario::load_scenario;
///
/// let scenario = load_scenario("input.json").expect("readable scenario");
/// println!("{} nodes", scenario.network.num_nodes());
/// ```
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let file = File::open(path)?;
    let data: ScenarioFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(build_scenario(data))
}

/// Builds the network and fleet from parsed scenario data.
///
/// Entries that cannot be placed are skipped with a warning rather than
/// failing the file: node entries with out-of-range ids, edge entries
/// missing an endpoint, referencing an out-of-range node, or carrying a
/// negative cost. Node 0 is the depot regardless of input and is normalized
/// to zero demand and priority; reliabilities are clamped into [0, 1].
pub fn build_scenario(data: ScenarioFile) -> Scenario {
    let num_nodes = data.graph.num_nodes;

    let mut nodes: Vec<Node> = (0..num_nodes).map(|id| Node::new(id, 0, 0)).collect();
    for entry in &data.graph.nodes {
        if entry.id >= num_nodes {
            tracing::warn!(id = entry.id, "node id out of range, entry skipped");
            continue;
        }
        if entry.id == DEPOT {
            // The depot carries no demand or priority of its own.
            continue;
        }
        nodes[entry.id] = Node::new(entry.id, entry.demand, entry.priority);
    }

    let mut network = Network::new(nodes);
    for entry in &data.graph.edges {
        let (u, v) = match (entry.u, entry.v) {
            (Some(u), Some(v)) => (u, v),
            _ => {
                tracing::warn!("edge entry missing an endpoint, skipped");
                continue;
            }
        };
        if u >= num_nodes || v >= num_nodes {
            tracing::warn!(u, v, "edge endpoint out of range, entry skipped");
            continue;
        }
        if entry.cost < 0.0 {
            tracing::warn!(u, v, cost = entry.cost, "negative edge cost, entry skipped");
            continue;
        }
        network.add_edge(u, v, entry.cost, entry.reliability.clamp(0.0, 1.0));
    }

    let vehicles = data
        .vehicles
        .iter()
        .map(|entry| Vehicle::new(entry.id, entry.capacity))
        .collect();

    Scenario { network, vehicles }
}
