//! Traits defining interfaces between the planners and their collaborators

use crate::common::error::PlanningResult;
use crate::common::types::{Space, State};

/// Classification of a single state by a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// The state is admissible.
    Free,
    /// The state must not be entered.
    NoEntry,
}

/// Admissibility oracle over a bounded configuration space.
///
/// Planners consume this interface only; they never inspect the geometry
/// behind it.
pub trait Constraint {
    /// The bounded space the planner samples from.
    fn space(&self) -> &Space;

    /// Classify a single state.
    fn check_constraint_type(&self, state: &State) -> ConstraintType;

    /// Whether the straight segment from `src` to `dst` is admissible.
    fn check_collision(&self, src: &State, dst: &State) -> bool;
}

/// Trait for sampling-based path planners (RRT family).
pub trait SamplingPlanner {
    /// Search for a path from `start` to `goal`.
    ///
    /// `Ok(false)` means no solution was found within the sampling budget;
    /// the planner stays reusable.
    fn solve(&mut self, start: &State, goal: &State) -> PlanningResult<bool>;

    /// The path produced by the last successful solve, start to goal.
    fn result(&self) -> &[State];

    /// Set the sampling budget for subsequent solves.
    fn set_max_iterations(&mut self, max_sampling_num: usize);
}
