//! Scenario I/O: the JSON schema, file loading, and random generation.

mod generator;
mod model;
mod reader;

pub use generator::{generate, GeneratorConfig};
pub use model::{EdgeData, GraphData, NodeData, ScenarioFile, VehicleData};
pub use reader::{build_scenario, load_scenario, Scenario, ScenarioError};
