//! Metrics recomputation over committed plans.

mod metrics;

pub use metrics::{compute_metrics, FleetReport, VehicleReport};
