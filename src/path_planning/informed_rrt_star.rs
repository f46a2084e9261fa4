use crate::common::error::{PlanningError, PlanningResult};
use crate::common::traits::{Constraint, ConstraintType, SamplingPlanner};
use crate::common::types::State;
use crate::path_planning::informed_domain::InformedDomain;
use crate::path_planning::sampling::Sampler;
use crate::path_planning::steer::steer;
use crate::path_planning::tree::{self, Node};

/// Informed RRT* planner.
///
/// Runs the full sampling budget, choosing parents and rewiring within the
/// shrinking connection radius. Once any node reaches the goal region,
/// further samples are drawn from the prolate hyper-spheroid of states that
/// could still improve the best known solution.
pub struct InformedRRTStar<C> {
    dim: usize,
    max_sampling_num: usize,
    goal_sampling_rate: f64,
    expand_dist: f64,
    connect_circle_dist: f64,
    goal_region_radius: f64,
    constraint: Option<C>,
    node_list: Vec<Node>,
    result: Vec<State>,
    result_cost: f64,
}

impl<C: Constraint> InformedRRTStar<C> {
    pub fn new(
        dim: usize,
        max_sampling_num: usize,
        goal_sampling_rate: f64,
        expand_dist: f64,
        connect_circle_dist: f64,
        goal_region_radius: f64,
    ) -> PlanningResult<Self> {
        let mut planner = InformedRRTStar {
            dim,
            max_sampling_num,
            goal_sampling_rate: 0.0,
            expand_dist,
            connect_circle_dist,
            goal_region_radius,
            constraint: None,
            node_list: Vec::new(),
            result: Vec::new(),
            result_cost: 0.0,
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

    pub fn set_connect_circle_dist(&mut self, connect_circle_dist: f64) {
        self.connect_circle_dist = connect_circle_dist;
    }

    pub fn set_goal_region_radius(&mut self, goal_region_radius: f64) {
        self.goal_region_radius = goal_region_radius;
    }

    /// The tree grown by the last solve.
    pub fn tree(&self) -> &[Node] {
        &self.node_list
    }

    /// The path found by the last successful solve, start to goal.
    pub fn result(&self) -> &[State] {
        &self.result
    }

    /// Length of the last successful result path.
    pub fn result_cost(&self) -> f64 {
        self.result_cost
    }

    /// Search for a path from `start` to `goal`, refining it until the
    /// sampling budget is spent.
    pub fn solve(&mut self, start: &State, goal: &State) -> PlanningResult<bool> {
        self.result.clear();
        self.result_cost = 0.0;
        self.node_list.clear();

        if start.dim() != self.dim || goal.dim() != self.dim {
            return Err(PlanningError::InvalidParameter(
                "start and goal dimensions must match the planner dimension".to_string(),
            ));
        }
        let constraint = self.constraint.as_ref().ok_or(PlanningError::ConstraintNotSet)?;

        let mut nodes = vec![Node::new(start.clone(), None, 0.0)];

        // the informed spheroid degenerates when start and goal coincide
        if start == goal {
            self.node_list = nodes;
            self.result = vec![start.clone()];
            return Ok(true);
        }

        let domain = InformedDomain::new(start, goal)?;
        let mut sampler = Sampler::new(constraint.space(), self.goal_sampling_rate);
        let mut goal_node_indexes: Vec<usize> = Vec::new();

        for _ in 0..self.max_sampling_num {
            // best cost among nodes that reached the goal region
            let mut best_cost = f64::INFINITY;
            for &goal_index in &goal_node_indexes {
                best_cost = best_cost.min(nodes[goal_index].cost);
            }

            let target = if sampler.sample_goal() {
                goal.clone()
            } else {
                let state = if best_cost.is_finite() {
                    domain.sample(&mut sampler, best_cost)?
                } else {
                    sampler.uniform_state()
                };
                if constraint.check_constraint_type(&state) == ConstraintType::NoEntry {
                    continue;
                }
                state
            };

            let nearest = tree::nearest_index(&nodes, &target);
            let new_node = steer(&nodes[nearest], nearest, &target, self.expand_dist);

            if constraint.check_collision(&nodes[nearest].state, &new_node.state) {
                let near = tree::near_indices(
                    &nodes,
                    &new_node.state,
                    self.connect_circle_dist,
                    self.dim,
                );
                let new_node = tree::choose_parent(constraint, &nodes, new_node, &near);

                nodes.push(new_node);
                let new_index = nodes.len() - 1;
                tree::rewire(constraint, &mut nodes, new_index, &near);

                if nodes[new_index].state.distance(goal) < self.goal_region_radius {
                    goal_node_indexes.push(new_index);
                }
            }
        }

        // cheapest node within one expansion of the goal ends the path
        let mut best_index = None;
        let mut min_cost = f64::INFINITY;
        for (i, node) in nodes.iter().enumerate() {
            if node.state.distance(goal) < self.expand_dist && node.cost < min_cost {
                min_cost = node.cost;
                best_index = Some(i);
            }
        }

        self.node_list = nodes;
        match best_index {
            Some(index) => {
                self.result_cost =
                    self.node_list[index].cost + self.node_list[index].state.distance(goal);
                self.result = tree::path_to_root(&self.node_list, index);
                if self.node_list[index].state != *goal {
                    self.result.push(goal.clone());
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<C: Constraint> SamplingPlanner for InformedRRTStar<C> {
    fn solve(&mut self, start: &State, goal: &State) -> PlanningResult<bool> {
        InformedRRTStar::solve(self, start, goal)
    }

    fn result(&self) -> &[State] {
        &self.result
    }

    fn set_max_iterations(&mut self, max_sampling_num: usize) {
        self.set_max_sampling_num(max_sampling_num);
    }
}
