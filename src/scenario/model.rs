//! JSON scenario schema.

use serde::{Deserialize, Serialize};

/// A complete scenario file: road network plus vehicle fleet.
///
/// ```json
/// {
///   "graph": {
///     "num_nodes": 3,
///     "nodes": [ {"id": 1, "demand": 3, "priority": 5} ],
///     "edges": [ {"u": 0, "v": 1, "cost": 4, "reliability": 0.9} ]
///   },
///   "vehicles": [ {"id": 1, "capacity": 5} ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScenarioFile {
    /// The road network.
    pub graph: GraphData,
    /// The vehicle fleet.
    pub vehicles: Vec<VehicleData>,
}

/// The network section of a scenario file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GraphData {
    /// Total node count; ids are dense over `[0, num_nodes)`.
    pub num_nodes: usize,
    /// Node entries. Node 0 is the depot regardless of how it is listed.
    pub nodes: Vec<NodeData>,
    /// Edge entries.
    pub edges: Vec<EdgeData>,
}

/// A node entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NodeData {
    /// Node id.
    pub id: usize,
    /// Quantity to deliver.
    pub demand: i32,
    /// Importance weight.
    pub priority: i32,
}

/// An edge entry.
///
/// The endpoints are optional so that malformed entries deserialize and can
/// be skipped by the loader instead of failing the whole file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EdgeData {
    /// First endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<usize>,
    /// Second endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<usize>,
    /// Traversal cost.
    pub cost: f64,
    /// Probability the edge remains passable, in [0, 1].
    pub reliability: f64,
}

/// A vehicle entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct VehicleData {
    /// Vehicle id.
    pub id: usize,
    /// Carrying capacity.
    pub capacity: i32,
}
