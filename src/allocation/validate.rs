//! Post-allocation capacity audit.

use crate::models::{AssignmentPlan, CapacityViolation, Node, Vehicle};

/// Independently re-sums each vehicle's assigned demand and reports any
/// vehicle whose sum exceeds its capacity.
///
/// [`best_fit_decreasing`](crate::allocation::best_fit_decreasing) can never
/// produce a violation; this audit is a regression guard, not an error path,
/// and never halts a run.
pub fn validate_allocation(
    nodes: &[Node],
    vehicles: &[Vehicle],
    plan: &AssignmentPlan,
) -> Vec<CapacityViolation> {
    let mut violations = Vec::new();

    for (vehicle, assignment) in vehicles.iter().zip(plan.assignments()) {
        let load: i32 = assignment
            .node_ids()
            .iter()
            .map(|&id| nodes[id].demand())
            .sum();

        if load > vehicle.capacity() {
            tracing::error!(
                vehicle = vehicle.id(),
                load,
                capacity = vehicle.capacity(),
                "capacity violation"
            );
            violations.push(CapacityViolation {
                vehicle_id: vehicle.id(),
                load,
                capacity: vehicle.capacity(),
            });
        }
    }

    violations
}
