//! The shrinking sampling domain of Informed RRT*.
//!
//! Once any path to the goal region is known with cost `c_best`, every state
//! that could still improve it lies inside the prolate hyper-spheroid with
//! foci at start and goal and transverse diameter `c_best`. Samples are
//! drawn on the unit n-ball and mapped into that spheroid by a scaling along
//! its axes followed by a rotation into the world frame.

use nalgebra::{DMatrix, DVector};

use crate::common::error::{PlanningError, PlanningResult};
use crate::common::types::State;
use crate::path_planning::sampling::Sampler;

/// Rotation aligning the first axis with the start-to-goal direction.
///
/// Built from the SVD of `M = a1 * e1^T` in dimension `dim + 1`, with the
/// last two diagonal entries replaced by `det(U)` and `det(V)` so the result
/// is a proper rotation.
pub fn rotation_to_world_frame(start: &State, goal: &State) -> PlanningResult<DMatrix<f64>> {
    if start.dim() != goal.dim() || start.dim() < 2 {
        return Err(PlanningError::InvalidParameter(
            "informed domain requires matching state dimensions of at least 2".to_string(),
        ));
    }

    let c_min = goal.distance(start);
    let mut a1 = ((goal.clone() - start.clone()) / c_min).coords;
    a1.push(0.0);

    let size = a1.len();
    let mut m = DMatrix::<f64>::zeros(size, size);
    for (row, v) in a1.iter().enumerate() {
        m[(row, 0)] = *v;
    }

    let svd = m.svd(true, true);
    let u = svd
        .u
        .ok_or_else(|| PlanningError::NumericalError("SVD did not produce U".to_string()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| PlanningError::NumericalError("SVD did not produce V^T".to_string()))?;

    let mut diag = DVector::from_element(size, 1.0);
    diag[size - 2] = u.determinant();
    diag[size - 1] = v_t.determinant();

    Ok(u * DMatrix::from_diagonal(&diag) * v_t)
}

/// Precomputed transform from the unit n-ball into the informed spheroid.
pub struct InformedDomain {
    rotation: DMatrix<f64>,
    center: DVector<f64>,
    c_min: f64,
    dim: usize,
}

impl InformedDomain {
    pub fn new(start: &State, goal: &State) -> PlanningResult<Self> {
        let rotation = rotation_to_world_frame(start, goal)?;

        let mut center = ((start.clone() + goal.clone()) / 2.0).coords;
        center.push(0.0);

        Ok(InformedDomain {
            rotation,
            center: DVector::from_vec(center),
            c_min: goal.distance(start),
            dim: start.dim(),
        })
    }

    /// Draw a state from the spheroid with transverse diameter `c_best`.
    pub fn sample(&self, sampler: &mut Sampler, c_best: f64) -> PlanningResult<State> {
        // clamp guards against c_best rounding a hair below c_min on
        // near-straight solutions
        let minor = (c_best.powi(2) - self.c_min.powi(2)).max(0.0).sqrt() / 2.0;
        let mut diag = vec![minor; self.dim + 1];
        diag[0] = c_best / 2.0;

        let mut ball = sampler.unit_ball(self.dim)?.coords;
        ball.push(0.0);

        let sample = &self.rotation
            * DMatrix::from_diagonal(&DVector::from_vec(diag))
            * DVector::from_vec(ball)
            + &self.center;

        Ok(State::new(sample.as_slice()[..self.dim].to_vec()))
    }
}
