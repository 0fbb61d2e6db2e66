//! Route construction over a committed assignment plan.
//!
//! Each vehicle's delivery targets are visited in assignment order, with a
//! multi-objective shortest path stitched between consecutive stops and a
//! closing leg back to the depot. Targets with no available path contribute
//! no edges; they are recorded on the route as unrouted and stay part of
//! the vehicle's assignment.

use crate::models::{AssignmentPlan, RoutePlan, VehicleRoute, DEPOT};
use crate::network::{Network, SearchWeights};

/// Builds one route per vehicle from the assignment plan.
///
/// Idle vehicles keep an empty stop sequence. Non-empty sequences start and
/// end at the depot: in an undirected network, any target reached over
/// available edges also has a return path over the same edges.
///
/// # Examples
///
/// ```
/// use relief_routing::allocation::{best_fit_decreasing, build_routes};
/// use relief_routing::models::{Node, Vehicle};
/// use relief_routing::network::Network;
///
/// let mut network = Network::new(vec![Node::depot(), Node::new(1, 2, 1)]);
/// network.add_edge(0, 1, 3.0, 0.9);
/// let vehicles = vec![Vehicle::new(1, 5)];
///
/// let plan = best_fit_decreasing(network.nodes(), &vehicles);
/// let routes = build_routes(&network, &plan);
/// assert_eq!(routes.routes()[0].stops(), &[0, 1, 0]);
/// ```
pub fn build_routes(network: &Network, plan: &AssignmentPlan) -> RoutePlan {
    let routes = plan
        .assignments()
        .iter()
        .map(|assignment| {
            if assignment.is_empty() {
                return VehicleRoute::idle(assignment.vehicle_id());
            }

            let mut stops = vec![DEPOT];
            let mut unrouted = Vec::new();

            for &target in assignment.node_ids() {
                let current = *stops.last().expect("route starts at the depot");
                match network.multi_objective_path(current, target, SearchWeights::default()) {
                    Some(path) => stops.extend(path.into_iter().skip(1)),
                    None => {
                        tracing::warn!(
                            vehicle = assignment.vehicle_id(),
                            target,
                            "no available path to target, leg skipped"
                        );
                        unrouted.push(target);
                    }
                }
            }

            let current = *stops.last().expect("route starts at the depot");
            if let Some(path) = network.multi_objective_path(current, DEPOT, SearchWeights::default())
            {
                stops.extend(path.into_iter().skip(1));
            }

            VehicleRoute::new(assignment.vehicle_id(), stops, unrouted)
        })
        .collect();

    RoutePlan::new(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    fn diamond_network() -> Network {
        // 0 - 1 - 3
        //  \     /
        //   - 2 -
        let nodes = (0..4).map(|i| Node::new(i, i as i32, 1)).collect();
        let mut network = Network::new(nodes);
        network.add_edge(0, 1, 1.0, 0.9);
        network.add_edge(1, 3, 1.0, 0.9);
        network.add_edge(0, 2, 1.0, 0.9);
        network.add_edge(2, 3, 1.0, 0.9);
        network
    }

    #[test]
    fn test_idle_vehicle_keeps_empty_route() {
        let network = diamond_network();
        let plan = AssignmentPlan::new(1);
        let routes = build_routes(&network, &plan);
        assert!(routes.routes()[0].is_idle());
        assert_eq!(routes.num_idle(), 1);
    }

    #[test]
    fn test_route_starts_and_ends_at_depot() {
        let network = diamond_network();
        let mut plan = AssignmentPlan::new(1);
        plan.assign(0, 3, 3);
        plan.assign(0, 2, 2);

        let routes = build_routes(&network, &plan);
        let stops = routes.routes()[0].stops();
        assert_eq!(*stops.first().expect("non-empty"), DEPOT);
        assert_eq!(*stops.last().expect("non-empty"), DEPOT);
        assert!(routes.routes()[0].fully_routed());
    }

    #[test]
    fn test_pass_through_stops_included() {
        let network = diamond_network();
        let mut plan = AssignmentPlan::new(1);
        plan.assign(0, 3, 3);

        let routes = build_routes(&network, &plan);
        // Reaching node 3 passes through 1 or 2; the route keeps the
        // intermediate stop in both directions.
        assert_eq!(routes.routes()[0].stops().len(), 5);
    }

    #[test]
    fn test_unreachable_target_recorded() {
        let mut network = diamond_network();
        network.set_edge_availability(1, 3, false);
        network.set_edge_availability(2, 3, false);

        let mut plan = AssignmentPlan::new(1);
        plan.assign(0, 2, 2);
        plan.assign(0, 3, 3);

        let routes = build_routes(&network, &plan);
        let route = &routes.routes()[0];
        assert_eq!(route.stops(), &[0, 2, 0]);
        assert_eq!(route.unrouted(), &[3]);
        assert!(!route.fully_routed());
    }

    #[test]
    fn test_all_targets_unreachable_leaves_depot_only_route() {
        let mut network = diamond_network();
        network.set_edge_availability(1, 3, false);
        network.set_edge_availability(2, 3, false);

        let mut plan = AssignmentPlan::new(1);
        plan.assign(0, 3, 3);

        let routes = build_routes(&network, &plan);
        let route = &routes.routes()[0];
        assert_eq!(route.stops(), &[0]);
        assert_eq!(route.unrouted(), &[3]);
        assert!(!route.is_idle());
    }

    #[test]
    fn test_legs_follow_assignment_order() {
        let network = diamond_network();
        let mut plan = AssignmentPlan::new(1);
        plan.assign(0, 2, 2);
        plan.assign(0, 1, 1);

        let routes = build_routes(&network, &plan);
        let stops = routes.routes()[0].stops();
        // Visits 2 first, then 1, regardless of which is nearer.
        let pos2 = stops.iter().position(|&s| s == 2).expect("visits 2");
        let pos1 = stops.iter().position(|&s| s == 1).expect("visits 1");
        assert!(pos2 < pos1);
    }
}
