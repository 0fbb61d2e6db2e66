//! # relief-routing
//!
//! Disaster-relief logistics: assignment of demand nodes to
//! capacity-constrained vehicles and reliability-aware routing over a road
//! network whose edges can be damaged and repaired at run time.
//!
//! The pipeline is a deterministic greedy pass: best-fit-decreasing bin
//! packing assigns nodes to vehicles, a multi-objective shortest path
//! stitches each vehicle's route, and metrics are re-derived from the
//! committed plans.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Vehicle, assignment and route plans)
//! - [`network`] — Road network topology and the multi-objective routing engine
//! - [`allocation`] — Best-fit assignment, route construction, capacity audit
//! - [`evaluation`] — Delivery metrics recomputed from committed plans
//! - [`scenario`] — JSON scenario schema, loading, and random generation

pub mod allocation;
pub mod evaluation;
pub mod models;
pub mod network;
pub mod scenario;
