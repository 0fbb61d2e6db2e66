//! Road network with per-edge cost, reliability, and availability.

use crate::models::Node;

/// A symmetric undirected edge.
///
/// One record serves both directions, so cost, reliability, and availability
/// can never disagree between `(u, v)` and `(v, u)`.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    a: usize,
    b: usize,
    pub(crate) cost: f64,
    pub(crate) reliability: f64,
    pub(crate) available: bool,
}

impl Edge {
    /// The endpoint opposite `from`.
    pub(crate) fn other(&self, from: usize) -> usize {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }

    fn connects(&self, u: usize, v: usize) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

/// The road network: a node table plus undirected edges carrying traversal
/// cost, reliability (probability of remaining passable), and a mutable
/// availability flag used to mark disaster damage at run time.
///
/// An unavailable edge is excluded from path search and metrics accounting,
/// but keeps its static cost and reliability so it can be re-enabled later.
///
/// Registering the same endpoint pair twice creates a parallel edge; routing
/// considers every available record and pair-keyed reads resolve to the
/// cheapest one.
///
/// # Examples
///
/// ```
/// use relief_routing::models::Node;
/// use relief_routing::network::Network;
///
/// let mut network = Network::new(vec![Node::depot(), Node::new(1, 3, 5)]);
/// network.add_edge(0, 1, 4.0, 0.9);
/// assert!(network.is_edge_available(0, 1));
///
/// network.set_edge_availability(0, 1, false);
/// assert!(!network.is_edge_available(0, 1));
/// assert_eq!(network.reliability(0, 1), None);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Network {
    /// Creates a network over the given node table.
    ///
    /// Node ids must be dense over `[0, nodes.len())`, in order, with node 0
    /// as the depot.
    pub fn new(nodes: Vec<Node>) -> Self {
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id() == i));
        let n = nodes.len();
        Self {
            nodes,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Number of nodes, fixed at construction.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The node table, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Registers a symmetric undirected edge, initially available.
    ///
    /// `cost` must be non-negative and `reliability` in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of bounds.
    pub fn add_edge(&mut self, u: usize, v: usize, cost: f64, reliability: f64) {
        assert!(u < self.num_nodes() && v < self.num_nodes());
        debug_assert!(cost >= 0.0);
        debug_assert!((0.0..=1.0).contains(&reliability));

        let index = self.edges.len();
        self.edges.push(Edge {
            a: u,
            b: v,
            cost,
            reliability,
            available: true,
        });
        self.adjacency[u].push(index);
        if v != u {
            self.adjacency[v].push(index);
        }
    }

    /// Flips the availability flag on every record of the pair, both
    /// directions at once. Static cost and reliability are retained.
    pub fn set_edge_availability(&mut self, u: usize, v: usize, available: bool) {
        let indices: Vec<usize> = match self.adjacency.get(u) {
            Some(incident) => incident.clone(),
            None => return,
        };
        for index in indices {
            if self.edges[index].connects(u, v) {
                self.edges[index].available = available;
                tracing::debug!(u, v, available, "edge availability changed");
            }
        }
    }

    /// Returns `true` when at least one record of the pair is available.
    pub fn is_edge_available(&self, u: usize, v: usize) -> bool {
        self.available_edge(u, v).is_some()
    }

    /// Reliability of the cheapest available record of the pair, or `None`
    /// when no available record exists.
    pub fn reliability(&self, u: usize, v: usize) -> Option<f64> {
        self.available_edge(u, v).map(|e| e.reliability)
    }

    /// The cheapest available record between `u` and `v`: lowest cost,
    /// highest reliability on cost ties. This is the record the routing
    /// search and metrics accounting traverse.
    pub(crate) fn available_edge(&self, u: usize, v: usize) -> Option<&Edge> {
        let incident = self.adjacency.get(u)?;
        incident
            .iter()
            .map(|&index| &self.edges[index])
            .filter(|e| e.connects(u, v) && e.available)
            .min_by(|x, y| {
                x.cost
                    .partial_cmp(&y.cost)
                    .expect("edge cost should not be NaN")
                    .then_with(|| {
                        y.reliability
                            .partial_cmp(&x.reliability)
                            .expect("edge reliability should not be NaN")
                    })
            })
    }

    /// Iterates the edges incident to `u` as `(neighbor, edge)` pairs,
    /// including unavailable ones.
    pub(crate) fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.adjacency[u]
            .iter()
            .map(move |&index| (self.edges[index].other(u), &self.edges[index]))
    }
}
