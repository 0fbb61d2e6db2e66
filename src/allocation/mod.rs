//! The allocation engine: demand assignment and route construction.
//!
//! - [`best_fit_decreasing`] — Phase A, best-fit bin packing of nodes onto
//!   vehicles under capacity constraints, O(n·m)
//! - [`build_routes`] — Phase B, per-vehicle route stitching with
//!   multi-objective shortest paths
//! - [`allocate_and_route`] — both phases as a single pipeline
//! - [`validate_allocation`] — independent post-condition capacity audit

mod best_fit;
mod route_builder;
mod validate;

pub use best_fit::best_fit_decreasing;
pub use route_builder::build_routes;
pub use validate::validate_allocation;

use crate::models::{AssignmentPlan, RoutePlan, Vehicle};
use crate::network::Network;

/// Runs the full allocation pipeline: assignment, then route construction.
///
/// # Examples
///
/// ```
/// use relief_routing::allocation::allocate_and_route;
/// use relief_routing::models::{Node, Vehicle};
/// use relief_routing::network::Network;
///
/// let mut network = Network::new(vec![Node::depot(), Node::new(1, 2, 1)]);
/// network.add_edge(0, 1, 3.0, 0.9);
/// let vehicles = vec![Vehicle::new(1, 5)];
///
/// let (plan, routes) = allocate_and_route(&network, &vehicles);
/// assert_eq!(plan.assignments()[0].node_ids(), &[1]);
/// assert_eq!(routes.routes()[0].stops(), &[0, 1, 0]);
/// ```
pub fn allocate_and_route(network: &Network, vehicles: &[Vehicle]) -> (AssignmentPlan, RoutePlan) {
    let plan = best_fit_decreasing(network.nodes(), vehicles);
    let routes = build_routes(network, &plan);
    (plan, routes)
}
