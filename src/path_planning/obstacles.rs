//! A ball-obstacle constraint usable in any dimension.

use crate::common::traits::{Constraint, ConstraintType};
use crate::common::types::{Space, State};

/// A solid n-dimensional ball no state may enter.
#[derive(Debug, Clone)]
pub struct BallObstacle {
    pub center: State,
    pub radius: f64,
}

impl BallObstacle {
    pub fn new(center: State, radius: f64) -> Self {
        BallObstacle { center, radius }
    }

    pub fn contains(&self, state: &State) -> bool {
        self.center.distance(state) <= self.radius
    }
}

/// Bounded space populated with ball obstacles.
///
/// Segment admissibility is tested by probing interpolated states at
/// `check_resolution` spacing, endpoints included.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    space: Space,
    obstacles: Vec<BallObstacle>,
    check_resolution: f64,
}

impl ObstacleField {
    pub fn new(space: Space, obstacles: Vec<BallObstacle>, check_resolution: f64) -> Self {
        ObstacleField { space, obstacles, check_resolution }
    }

    /// A field with no obstacles.
    pub fn free(space: Space) -> Self {
        ObstacleField { space, obstacles: Vec::new(), check_resolution: 0.1 }
    }
}

impl Constraint for ObstacleField {
    fn space(&self) -> &Space {
        &self.space
    }

    fn check_constraint_type(&self, state: &State) -> ConstraintType {
        if self.obstacles.iter().any(|obstacle| obstacle.contains(state)) {
            ConstraintType::NoEntry
        } else {
            ConstraintType::Free
        }
    }

    fn check_collision(&self, src: &State, dst: &State) -> bool {
        let steps = (src.distance(dst) / self.check_resolution).ceil() as usize;
        for i in 0..=steps {
            let ratio = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            let probe = src.clone() + (dst.clone() - src.clone()) * ratio;
            if self.check_constraint_type(&probe) == ConstraintType::NoEntry {
                return false;
            }
        }
        true
    }
}
