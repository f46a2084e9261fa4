pub mod common;
pub mod path_planning;

pub use common::{
    Bound, Constraint, ConstraintType, PlanningError, PlanningResult, SamplingPlanner, Space,
    State,
};
pub use path_planning::{BallObstacle, InformedRRTStar, ObstacleField, RRT};
