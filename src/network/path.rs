//! Multi-objective shortest path search.
//!
//! # Algorithm
//!
//! Label-correcting Dijkstra over the currently available edges, minimizing
//! the path sum of
//!
//! ```text
//! eff_cost(e) = alpha * cost(e) + beta * (1 - reliability(e))
//! ```
//!
//! Among paths whose total effective cost differs by less than
//! [`COST_EPSILON`], the one with the larger product of per-edge
//! reliabilities wins: of two equally cheap paths, the one statistically
//! more likely to remain passable end-to-end. The priority queue orders by
//! effective cost ascending, then reliability product descending; entries
//! superseded by a later, better label are discarded on pop.
//!
//! # Complexity
//!
//! O((V + E) log V) per query.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::Network;

/// Two effective path costs closer than this count as equal, and the
/// reliability product decides between them.
pub const COST_EPSILON: f64 = 1e-6;

/// Objective weights for the path search.
///
/// `cost` scales the traversal-cost term and `unreliability` the
/// `1 - reliability` term. The default weighs both at 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    /// Weight on the traversal-cost term.
    pub cost: f64,
    /// Weight on the `1 - reliability` term.
    pub unreliability: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            cost: 1.0,
            unreliability: 1.0,
        }
    }
}

/// A queue entry: the best known label for `node` at push time.
#[derive(Debug, Clone, Copy)]
struct State {
    eff_cost: f64,
    reliability: f64,
    node: usize,
}

impl Ord for State {
    // Max-heap: the "greatest" state is the one with the lowest effective
    // cost, then the highest reliability product, then the lowest node id.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .eff_cost
            .total_cmp(&self.eff_cost)
            .then_with(|| self.reliability.total_cmp(&other.reliability))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Network {
    /// Returns the node sequence from `start` to `end` inclusive that
    /// minimizes the weighted effective cost over available edges, or `None`
    /// when `end` is unreachable from `start`, including the case where the
    /// destination itself is isolated by damage.
    ///
    /// `start == end` yields `Some(vec![start])`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use relief_routing::models::Node;
    /// use relief_routing::network::{Network, SearchWeights};
    ///
    /// let nodes = (0..3).map(|i| Node::new(i, 0, 0)).collect();
    /// let mut network = Network::new(nodes);
    /// network.add_edge(0, 1, 2.0, 0.9);
    /// network.add_edge(1, 2, 2.0, 0.9);
    ///
    /// let path = network.multi_objective_path(0, 2, SearchWeights::default());
    /// assert_eq!(path, Some(vec![0, 1, 2]));
    /// ```
    pub fn multi_objective_path(
        &self,
        start: usize,
        end: usize,
        weights: SearchWeights,
    ) -> Option<Vec<usize>> {
        let n = self.num_nodes();
        assert!(start < n && end < n);

        let mut dist = vec![f64::INFINITY; n];
        let mut rel = vec![0.0; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        dist[start] = 0.0;
        rel[start] = 1.0;

        let mut queue = BinaryHeap::new();
        queue.push(State {
            eff_cost: 0.0,
            reliability: 1.0,
            node: start,
        });

        while let Some(state) = queue.pop() {
            let node = state.node;
            // Lazy deletion: skip entries superseded by a better label.
            if state.eff_cost > dist[node] + COST_EPSILON {
                continue;
            }
            if (state.eff_cost - dist[node]).abs() <= COST_EPSILON && state.reliability < rel[node]
            {
                continue;
            }

            for (next, edge) in self.neighbors(node) {
                if !edge.available {
                    continue;
                }
                let step = weights.cost * edge.cost + weights.unreliability * (1.0 - edge.reliability);
                let cand_cost = dist[node] + step;
                let cand_rel = rel[node] * edge.reliability;

                if cand_cost + COST_EPSILON < dist[next] {
                    dist[next] = cand_cost;
                    rel[next] = cand_rel;
                    prev[next] = Some(node);
                    queue.push(State {
                        eff_cost: cand_cost,
                        reliability: cand_rel,
                        node: next,
                    });
                } else if (cand_cost - dist[next]).abs() <= COST_EPSILON && cand_rel > rel[next] {
                    // Equal cost, more reliable: adopt the safer path.
                    rel[next] = cand_rel;
                    prev[next] = Some(node);
                    queue.push(State {
                        eff_cost: cand_cost,
                        reliability: cand_rel,
                        node: next,
                    });
                }
            }
        }

        if dist[end].is_infinite() {
            return None;
        }

        let mut path = vec![end];
        let mut current = end;
        while let Some(parent) = prev[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}
