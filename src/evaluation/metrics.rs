//! Delivery metrics recomputed from committed plans.

use crate::models::{AssignmentPlan, RoutePlan, Vehicle};
use crate::network::Network;

/// Per-vehicle delivery metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleReport {
    /// Vehicle these metrics belong to.
    pub vehicle_id: usize,
    /// Demand delivered, summed over assigned nodes only.
    pub delivered_demand: i32,
    /// Priority delivered, summed over assigned nodes only.
    pub delivered_priority: i32,
    /// Traversal cost accumulated over the route's available edges.
    pub route_cost: f64,
    /// Arithmetic mean reliability of traversed edges, 0 with no edges.
    pub average_reliability: f64,
    /// Delivered demand as a percentage of capacity, 0 for zero capacity.
    pub utilization: f64,
}

/// Fleet-wide delivery metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetReport {
    /// Per-vehicle breakdown, in fleet order.
    pub vehicles: Vec<VehicleReport>,
    /// Total traversal cost across all routes.
    pub total_cost: f64,
    /// Arithmetic mean reliability over every traversed edge, 0 with none.
    pub average_reliability: f64,
    /// Delivered priority over total non-depot priority, 0 when none exists.
    pub priority_satisfaction: f64,
    /// Delivered demand over total non-depot demand, 0 when none exists.
    pub demand_satisfaction: f64,
    /// Vehicles with no assignment and an empty route.
    pub idle_vehicles: usize,
    /// Fleet delivered demand as a percentage of fleet capacity.
    pub overall_utilization: f64,
}

/// Recomputes delivery metrics from the committed assignment and route
/// plans.
///
/// Route cost and reliability are re-derived by walking consecutive stop
/// pairs and accounting the cheapest available edge record of each pair;
/// pairs with no available record contribute nothing. Delivered demand and
/// priority come strictly from the assignment plan, never from raw stop
/// membership: pass-through stops are not deliveries.
///
/// A pure function of its inputs: recomputing on the same plans yields
/// identical reports. Every ratio is 0 when its denominator is 0.
pub fn compute_metrics(
    network: &Network,
    vehicles: &[Vehicle],
    plan: &AssignmentPlan,
    routes: &RoutePlan,
) -> FleetReport {
    let mut reports = Vec::with_capacity(vehicles.len());
    let mut total_cost = 0.0;
    let mut total_reliability = 0.0;
    let mut total_edges = 0usize;
    let mut total_delivered = 0i32;
    let mut delivered_priority = 0i32;

    for (index, vehicle) in vehicles.iter().enumerate() {
        let assignment = &plan.assignments()[index];
        let route = &routes.routes()[index];

        let mut cost = 0.0;
        let mut reliability_sum = 0.0;
        let mut edges = 0usize;
        for pair in route.stops().windows(2) {
            if let Some(edge) = network.available_edge(pair[0], pair[1]) {
                cost += edge.cost;
                reliability_sum += edge.reliability;
                edges += 1;
            }
        }

        let mut delivered = 0i32;
        let mut priority = 0i32;
        for &node_id in assignment.node_ids() {
            delivered += network.node(node_id).demand();
            priority += network.node(node_id).priority();
        }

        total_cost += cost;
        total_reliability += reliability_sum;
        total_edges += edges;
        total_delivered += delivered;
        delivered_priority += priority;

        reports.push(VehicleReport {
            vehicle_id: vehicle.id(),
            delivered_demand: delivered,
            delivered_priority: priority,
            route_cost: cost,
            average_reliability: if edges > 0 {
                reliability_sum / edges as f64
            } else {
                0.0
            },
            utilization: if vehicle.capacity() > 0 {
                100.0 * f64::from(delivered) / f64::from(vehicle.capacity())
            } else {
                0.0
            },
        });
    }

    let mut max_priority = 0i32;
    let mut max_demand = 0i32;
    for node in network.nodes().iter().filter(|n| !n.is_depot()) {
        max_priority += node.priority();
        max_demand += node.demand();
    }
    let total_capacity: i32 = vehicles.iter().map(Vehicle::capacity).sum();

    FleetReport {
        vehicles: reports,
        total_cost,
        average_reliability: if total_edges > 0 {
            total_reliability / total_edges as f64
        } else {
            0.0
        },
        priority_satisfaction: if max_priority > 0 {
            f64::from(delivered_priority) / f64::from(max_priority)
        } else {
            0.0
        },
        demand_satisfaction: if max_demand > 0 {
            f64::from(total_delivered) / f64::from(max_demand)
        } else {
            0.0
        },
        idle_vehicles: routes.num_idle(),
        overall_utilization: if total_capacity > 0 {
            100.0 * f64::from(total_delivered) / f64::from(total_capacity)
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate_and_route, validate_allocation};
    use crate::models::Node;

    const TOLERANCE: f64 = 1e-9;

    /// The five-node reference scenario: depot plus four demand nodes,
    /// six weighted edges, two vehicles.
    fn reference_scenario() -> (Network, Vec<Vehicle>) {
        let nodes = vec![
            Node::depot(),
            Node::new(1, 3, 5),
            Node::new(2, 2, 3),
            Node::new(3, 4, 4),
            Node::new(4, 1, 2),
        ];
        let mut network = Network::new(nodes);
        network.add_edge(0, 1, 4.0, 0.9);
        network.add_edge(0, 2, 6.0, 0.8);
        network.add_edge(1, 2, 2.0, 0.7);
        network.add_edge(1, 3, 5.0, 0.95);
        network.add_edge(2, 3, 3.0, 0.85);
        network.add_edge(3, 4, 4.0, 0.9);
        let vehicles = vec![Vehicle::new(1, 5), Vehicle::new(2, 6)];
        (network, vehicles)
    }

    #[test]
    fn test_end_to_end_reference_scenario() {
        let (network, vehicles) = reference_scenario();
        let (plan, routes) = allocate_and_route(&network, &vehicles);

        assert!(validate_allocation(network.nodes(), &vehicles, &plan).is_empty());
        assert_eq!(plan.total_load(), 10);
        assert!(plan.unassigned().is_empty());

        let report = compute_metrics(&network, &vehicles, &plan, &routes);
        assert_eq!(report.idle_vehicles, 0);
        assert!((report.demand_satisfaction - 1.0).abs() < TOLERANCE);
        assert!((report.priority_satisfaction - 1.0).abs() < TOLERANCE);
        assert!((report.overall_utilization - 100.0 * 10.0 / 11.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_reference_scenario_routes_and_costs() {
        let (network, vehicles) = reference_scenario();
        let (plan, routes) = allocate_and_route(&network, &vehicles);

        assert_eq!(routes.routes()[0].stops(), &[0, 1, 2, 0]);
        assert_eq!(routes.routes()[1].stops(), &[0, 1, 3, 4, 3, 1, 0]);

        let report = compute_metrics(&network, &vehicles, &plan, &routes);
        assert!((report.vehicles[0].route_cost - 12.0).abs() < TOLERANCE);
        assert!((report.vehicles[1].route_cost - 26.0).abs() < TOLERANCE);
        assert!((report.total_cost - 38.0).abs() < TOLERANCE);
        assert!((report.average_reliability - 7.9 / 9.0).abs() < TOLERANCE);
        assert!((report.vehicles[0].utilization - 100.0).abs() < TOLERANCE);
        assert!((report.vehicles[1].utilization - 100.0 * 5.0 / 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_damaged_edge_never_accounted() {
        let (mut network, vehicles) = reference_scenario();
        network.set_edge_availability(3, 4, false);

        let (plan, routes) = allocate_and_route(&network, &vehicles);
        // Node 4 is only reachable over the damaged edge: the leg is
        // skipped and the route detours straight back.
        assert_eq!(routes.routes()[1].stops(), &[0, 1, 3, 1, 0]);
        assert_eq!(routes.routes()[1].unrouted(), &[4]);

        let report = compute_metrics(&network, &vehicles, &plan, &routes);
        assert!((report.vehicles[1].route_cost - 18.0).abs() < TOLERANCE);
        assert!((report.total_cost - 30.0).abs() < TOLERANCE);
        // The node stays assigned, so delivered demand is unchanged.
        assert!((report.demand_satisfaction - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_metrics_idempotent() {
        let (network, vehicles) = reference_scenario();
        let (plan, routes) = allocate_and_route(&network, &vehicles);

        let first = compute_metrics(&network, &vehicles, &plan, &routes);
        let second = compute_metrics(&network, &vehicles, &plan, &routes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_denominator_guards() {
        let network = Network::new(vec![Node::depot()]);
        let vehicles = vec![Vehicle::new(1, 0)];
        let (plan, routes) = allocate_and_route(&network, &vehicles);

        let report = compute_metrics(&network, &vehicles, &plan, &routes);
        assert_eq!(report.total_cost, 0.0);
        assert_eq!(report.average_reliability, 0.0);
        assert_eq!(report.priority_satisfaction, 0.0);
        assert_eq!(report.demand_satisfaction, 0.0);
        assert_eq!(report.overall_utilization, 0.0);
        assert_eq!(report.vehicles[0].utilization, 0.0);
        assert_eq!(report.idle_vehicles, 1);
    }

    #[test]
    fn test_delivery_counted_from_assignment_not_stops() {
        // Node 1 does not fit the vehicle and stays unassigned, yet it is
        // passed through twice on the way to node 2: it must not count as
        // delivered.
        let nodes = vec![Node::depot(), Node::new(1, 5, 5), Node::new(2, 2, 1)];
        let mut network = Network::new(nodes);
        network.add_edge(0, 1, 1.0, 0.9);
        network.add_edge(1, 2, 1.0, 0.9);
        let vehicles = vec![Vehicle::new(1, 2)];

        let (plan, routes) = allocate_and_route(&network, &vehicles);
        assert_eq!(plan.assignments()[0].node_ids(), &[2]);
        assert_eq!(plan.unassigned(), &[1]);
        assert_eq!(routes.routes()[0].stops(), &[0, 1, 2, 1, 0]);

        let report = compute_metrics(&network, &vehicles, &plan, &routes);
        assert_eq!(report.vehicles[0].delivered_demand, 2);
        assert_eq!(report.vehicles[0].delivered_priority, 1);
    }
}
