//! Route plan types produced by the routing phase.

use super::node::DEPOT;

/// The computed route for a single vehicle.
///
/// `stops` is the full path including pass-through nodes, not just delivery
/// targets. An idle vehicle keeps an empty stop sequence; a non-empty one
/// always starts and ends at the depot.
///
/// Assigned targets that could not be reached under the current edge
/// availability are listed in `unrouted`: they contribute no edges to the
/// route but remain part of the vehicle's assignment.
///
/// # Examples
///
/// ```
/// use relief_routing::models::VehicleRoute;
///
/// let route = VehicleRoute::new(0, vec![0, 1, 2, 0], vec![]);
/// assert!(!route.is_idle());
/// assert!(route.fully_routed());
/// assert_eq!(route.stops(), &[0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct VehicleRoute {
    vehicle_id: usize,
    stops: Vec<usize>,
    unrouted: Vec<usize>,
}

impl VehicleRoute {
    /// Creates a route from its stop sequence and unreachable targets.
    pub fn new(vehicle_id: usize, stops: Vec<usize>, unrouted: Vec<usize>) -> Self {
        debug_assert!(
            stops.is_empty() || (stops[0] == DEPOT && *stops.last().expect("non-empty") == DEPOT)
        );
        Self {
            vehicle_id,
            stops,
            unrouted,
        }
    }

    /// Creates the empty route of a vehicle with no assignment.
    pub fn idle(vehicle_id: usize) -> Self {
        Self::new(vehicle_id, Vec::new(), Vec::new())
    }

    /// Vehicle this route belongs to.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Ordered node sequence, depot to depot. Empty for idle vehicles.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Assigned targets that had no available path when this route was built.
    pub fn unrouted(&self) -> &[usize] {
        &self.unrouted
    }

    /// Returns `true` if this vehicle received no assignment.
    pub fn is_idle(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if every requested leg was successfully routed.
    pub fn fully_routed(&self) -> bool {
        self.unrouted.is_empty()
    }
}

/// The computed routes for the whole fleet, one per vehicle in fleet order.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    routes: Vec<VehicleRoute>,
}

impl RoutePlan {
    /// Creates a plan from per-vehicle routes.
    pub fn new(routes: Vec<VehicleRoute>) -> Self {
        Self { routes }
    }

    /// Per-vehicle routes, in fleet order.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    /// Number of vehicles with no assignment.
    pub fn num_idle(&self) -> usize {
        self.routes.iter().filter(|r| r.is_idle()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_idle() {
        let r = VehicleRoute::idle(2);
        assert!(r.is_idle());
        assert!(r.fully_routed());
        assert_eq!(r.vehicle_id(), 2);
        assert!(r.stops().is_empty());
    }

    #[test]
    fn test_route_unrouted() {
        let r = VehicleRoute::new(0, vec![0, 3, 0], vec![4]);
        assert!(!r.is_idle());
        assert!(!r.fully_routed());
        assert_eq!(r.unrouted(), &[4]);
    }

    #[test]
    fn test_plan_idle_count() {
        let plan = RoutePlan::new(vec![
            VehicleRoute::new(0, vec![0, 1, 0], vec![]),
            VehicleRoute::idle(1),
            VehicleRoute::idle(2),
        ]);
        assert_eq!(plan.num_idle(), 2);
        assert_eq!(plan.routes().len(), 3);
    }
}
