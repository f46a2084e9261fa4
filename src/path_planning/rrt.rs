use crate::common::error::{PlanningError, PlanningResult};
use crate::common::traits::{Constraint, ConstraintType, SamplingPlanner};
use crate::common::types::State;
use crate::path_planning::sampling::Sampler;
use crate::path_planning::steer::steer;
use crate::path_planning::tree::{self, Node};

/// Baseline Rapidly-Exploring Random Tree planner.
///
/// Expands a tree from the start with fixed-length steps toward random
/// targets and terminates on the first node that reaches the goal.
pub struct RRT<C> {
    dim: usize,
    max_sampling_num: usize,
    goal_sampling_rate: f64,
    expand_dist: f64,
    constraint: Option<C>,
    node_list: Vec<Node>,
    result: Vec<State>,
}

impl<C: Constraint> RRT<C> {
    pub fn new(
        dim: usize,
        max_sampling_num: usize,
        goal_sampling_rate: f64,
        expand_dist: f64,
    ) -> PlanningResult<Self> {
        let mut planner = RRT {
            dim,
            max_sampling_num,
            goal_sampling_rate: 0.0,
            expand_dist,
            constraint: None,
            node_list: Vec::new(),
            result: Vec::new(),
        };
        planner.set_goal_sampling_rate(goal_sampling_rate)?;
        Ok(planner)
    }

    pub fn set_constraint(&mut self, constraint: C) {
        self.constraint = Some(constraint);
    }

    pub fn set_max_sampling_num(&mut self, max_sampling_num: usize) {
        self.max_sampling_num = max_sampling_num;
    }

    pub fn set_goal_sampling_rate(&mut self, goal_sampling_rate: f64) -> PlanningResult<()> {
        if !(0.0..=1.0).contains(&goal_sampling_rate) {
            return Err(PlanningError::InvalidParameter(
                "goal sampling rate must lie in [0, 1]".to_string(),
            ));
        }
        self.goal_sampling_rate = goal_sampling_rate;
        Ok(())
    }

    pub fn set_expand_dist(&mut self, expand_dist: f64) {
        self.expand_dist = expand_dist;
    }

    /// The tree grown by the last solve.
    pub fn tree(&self) -> &[Node] {
        &self.node_list
    }

    /// The path found by the last successful solve, start to goal.
    pub fn result(&self) -> &[State] {
        &self.result
    }

    /// Search for a path from `start` to `goal`.
    pub fn solve(&mut self, start: &State, goal: &State) -> PlanningResult<bool> {
        self.result.clear();
        self.node_list.clear();

        if start.dim() != self.dim || goal.dim() != self.dim {
            return Err(PlanningError::InvalidParameter(
                "start and goal dimensions must match the planner dimension".to_string(),
            ));
        }
        let constraint = self.constraint.as_ref().ok_or(PlanningError::ConstraintNotSet)?;

        let mut nodes = vec![Node::new(start.clone(), None, 0.0)];

        if start == goal {
            self.node_list = nodes;
            self.result = vec![start.clone()];
            return Ok(true);
        }

        let mut sampler = Sampler::new(constraint.space(), self.goal_sampling_rate);
        let mut goal_index = None;

        for _ in 0..self.max_sampling_num {
            // goal with probability `goal_sampling_rate`, uniform otherwise
            let target = if sampler.sample_goal() {
                goal.clone()
            } else {
                let state = sampler.uniform_state();
                if constraint.check_constraint_type(&state) == ConstraintType::NoEntry {
                    continue;
                }
                state
            };

            let nearest = tree::nearest_index(&nodes, &target);
            let new_node = steer(&nodes[nearest], nearest, &target, self.expand_dist);

            if constraint.check_collision(&nodes[nearest].state, &new_node.state) {
                nodes.push(new_node);

                let last = nodes.len() - 1;
                let dist_to_goal = nodes[last].state.distance(goal);
                if dist_to_goal <= self.expand_dist {
                    let cost = nodes[last].cost + dist_to_goal;
                    nodes.push(Node::new(goal.clone(), Some(last), cost));
                    goal_index = Some(nodes.len() - 1);
                    break;
                }
            }
        }

        self.node_list = nodes;
        match goal_index {
            Some(index) => {
                self.result = tree::path_to_root(&self.node_list, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<C: Constraint> SamplingPlanner for RRT<C> {
    fn solve(&mut self, start: &State, goal: &State) -> PlanningResult<bool> {
        RRT::solve(self, start, goal)
    }

    fn result(&self) -> &[State] {
        &self.result
    }

    fn set_max_iterations(&mut self, max_sampling_num: usize) {
        self.set_max_sampling_num(max_sampling_num);
    }
}
