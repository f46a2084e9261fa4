//! Sampling-based path planning in n-dimensional Euclidean spaces
//!
//! Two planners share the building blocks in this module:
//! - RRT: feasible-path search that stops at the first solution
//! - Informed RRT*: asymptotically optimal search that keeps refining
//!   inside the informed sampling domain

pub mod informed_domain;
pub mod informed_rrt_star;
pub mod obstacles;
pub mod rrt;
pub mod sampling;
pub mod steer;
pub mod tree;

// Re-exports for convenience
pub use informed_rrt_star::InformedRRTStar;
pub use obstacles::{BallObstacle, ObstacleField};
pub use rrt::RRT;
pub use tree::Node;
