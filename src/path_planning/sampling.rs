//! Random sampling primitives for the planner drivers.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::common::error::{PlanningError, PlanningResult};
use crate::common::types::{Space, State};

/// Owns the random number generator for a single solve call.
///
/// The per-axis uniform distributions are built once from the space bounds;
/// the goal-bias draw preserves the `rate < U(0, 1)` comparison of the
/// drivers, so the goal is kept as the target with probability `rate`.
pub struct Sampler {
    rng: ThreadRng,
    axis_ranges: Vec<Uniform<f64>>,
    unit: Uniform<f64>,
    goal_sampling_rate: f64,
}

impl Sampler {
    pub fn new(space: &Space, goal_sampling_rate: f64) -> Self {
        let axis_ranges = (0..space.dim())
            .map(|axis| {
                let bound = space.bound(axis);
                Uniform::new_inclusive(bound.low, bound.high)
            })
            .collect();

        Sampler {
            rng: rand::thread_rng(),
            axis_ranges,
            unit: Uniform::new(0.0, 1.0),
            goal_sampling_rate,
        }
    }

    /// True when the goal should be kept as this iteration's target.
    pub fn sample_goal(&mut self) -> bool {
        self.unit.sample(&mut self.rng) <= self.goal_sampling_rate
    }

    /// A state drawn uniformly within the space bounds.
    pub fn uniform_state(&mut self) -> State {
        let mut coords = Vec::with_capacity(self.axis_ranges.len());
        for range in &self.axis_ranges {
            coords.push(range.sample(&mut self.rng));
        }
        State::new(coords)
    }

    /// A state drawn uniformly from the unit `dim`-ball.
    ///
    /// Direction comes from normalized i.i.d. standard normals (re-drawn on
    /// the measure-zero chance of a zero vector), radius from
    /// `U(0, 1)^(1/dim)`.
    pub fn unit_ball(&mut self, dim: usize) -> PlanningResult<State> {
        if dim == 0 {
            return Err(PlanningError::InvalidParameter(
                "cannot sample a zero-dimension ball".to_string(),
            ));
        }

        let mut direction = State::zeros(dim);
        loop {
            for v in direction.coords.iter_mut() {
                *v = self.rng.sample(StandardNormal);
            }

            let norm = direction.norm();
            if norm != 0.0 {
                direction = direction / norm;
                break;
            }
        }

        let radius = self.unit.sample(&mut self.rng).powf(1.0 / dim as f64);
        Ok(direction * radius)
    }
}
