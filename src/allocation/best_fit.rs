//! Best-fit-decreasing assignment of demand nodes to vehicles.
//!
//! # Algorithm
//!
//! Nodes are taken in priority order (descending, demand descending on
//! ties) and each goes to the feasible vehicle with the least remaining
//! capacity: the tightest fit, which minimizes wasted slack. Nodes no
//! vehicle can take are left unassigned; there is no retry or splitting.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n nodes and m vehicles.

use crate::models::{AssignmentPlan, Node, Vehicle};

/// Assigns non-depot nodes to vehicles under capacity constraints.
///
/// A single greedy pass, deterministic for a given node table and fleet:
/// ordering ties beyond demand keep the node-id order, and equally tight
/// vehicles resolve to the earliest in fleet order.
///
/// # Arguments
///
/// * `nodes` — The full node table (index 0 = depot, never assigned)
/// * `vehicles` — The fleet, with independent capacities
///
/// # Examples
///
/// ```
/// use relief_routing::allocation::best_fit_decreasing;
/// use relief_routing::models::{Node, Vehicle};
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 3, 5),
///     Node::new(2, 2, 3),
/// ];
/// let vehicles = vec![Vehicle::new(1, 5)];
///
/// let plan = best_fit_decreasing(&nodes, &vehicles);
/// assert_eq!(plan.assignments()[0].node_ids(), &[1, 2]);
/// assert!(plan.unassigned().is_empty());
/// ```
pub fn best_fit_decreasing(nodes: &[Node], vehicles: &[Vehicle]) -> AssignmentPlan {
    let mut order: Vec<&Node> = nodes.iter().filter(|n| !n.is_depot()).collect();
    // Critical areas first; large demands first on ties so big deliveries
    // land while slack is still plentiful.
    order.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| b.demand().cmp(&a.demand()))
    });

    let mut plan = AssignmentPlan::new(vehicles.len());
    let mut remaining: Vec<i32> = vehicles.iter().map(Vehicle::capacity).collect();

    for node in order {
        let tightest = remaining
            .iter()
            .enumerate()
            .filter(|&(_, &slack)| slack >= node.demand())
            .min_by_key(|&(_, &slack)| slack)
            .map(|(index, _)| index);

        match tightest {
            Some(index) => {
                remaining[index] -= node.demand();
                plan.assign(index, node.id(), node.demand());
                tracing::debug!(
                    node = node.id(),
                    vehicle = vehicles[index].id(),
                    slack = remaining[index],
                    "node assigned"
                );
            }
            None => {
                tracing::warn!(
                    node = node.id(),
                    demand = node.demand(),
                    "no vehicle can take node, leaving unassigned"
                );
                plan.add_unassigned(node.id());
            }
        }
    }

    plan
}
