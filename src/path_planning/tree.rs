//! Index-based search tree shared by the RRT-family planners.
//!
//! Nodes live in a flat vector owned by the planner; parent links are
//! indices into that vector, so rewiring never invalidates references.

use crate::common::traits::Constraint;
use crate::common::types::State;

/// A vertex of the search tree.
///
/// `cost` is the cumulative path length from the root along parent links.
/// Only the root has `parent == None`.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: State,
    pub parent: Option<usize>,
    pub cost: f64,
}

impl Node {
    pub fn new(state: State, parent: Option<usize>, cost: f64) -> Self {
        Node { state, parent, cost }
    }
}

/// Index of the node closest to `target`. Ties keep the lowest index.
pub fn nearest_index(nodes: &[Node], target: &State) -> usize {
    let mut min_dist = f64::INFINITY;
    let mut min_index = 0;
    for (i, node) in nodes.iter().enumerate() {
        let dist = node.state.distance(target);
        if dist < min_dist {
            min_dist = dist;
            min_index = i;
        }
    }
    min_index
}

/// Indices of nodes within the shrinking connection radius
/// `R * (ln N / N)^(1/dim)` of `target`.
pub fn near_indices(
    nodes: &[Node],
    target: &State,
    connect_circle_dist: f64,
    dim: usize,
) -> Vec<usize> {
    let num_node = nodes.len();
    if num_node == 0 {
        return Vec::new();
    }

    let radius =
        connect_circle_dist * ((num_node as f64).ln() / num_node as f64).powf(1.0 / dim as f64);
    nodes
        .iter()
        .enumerate()
        .filter_map(|(i, node)| if node.state.distance(target) < radius { Some(i) } else { None })
        .collect()
}

/// Reparent `candidate` onto the cheapest near node it can reach without
/// collision. When no near node qualifies, the candidate keeps the parent
/// assigned by steering.
pub fn choose_parent<C: Constraint>(
    constraint: &C,
    nodes: &[Node],
    mut candidate: Node,
    near: &[usize],
) -> Node {
    let mut min_cost_parent = None;
    let mut min_cost = f64::INFINITY;
    for &i in near {
        let cost = nodes[i].cost + nodes[i].state.distance(&candidate.state);
        if cost < min_cost && constraint.check_collision(&candidate.state, &nodes[i].state) {
            min_cost_parent = Some(i);
            min_cost = cost;
        }
    }

    if let Some(parent) = min_cost_parent {
        candidate.parent = Some(parent);
        candidate.cost = min_cost;
    }

    candidate
}

/// Reparent near nodes through `nodes[new_index]` when that strictly lowers
/// their cost and the connecting segment is admissible.
///
/// Costs of descendants of a rewired node are left untouched.
pub fn rewire<C: Constraint>(
    constraint: &C,
    nodes: &mut [Node],
    new_index: usize,
    near: &[usize],
) {
    let new_state = nodes[new_index].state.clone();
    let new_cost = nodes[new_index].cost;
    for &i in near {
        let rewired_cost = new_cost + nodes[i].state.distance(&new_state);
        if rewired_cost < nodes[i].cost && constraint.check_collision(&new_state, &nodes[i].state) {
            nodes[i].parent = Some(new_index);
            nodes[i].cost = rewired_cost;
        }
    }
}

/// States from the root to `nodes[index]`, in root-first order.
pub fn path_to_root(nodes: &[Node], index: usize) -> Vec<State> {
    let mut path = Vec::new();
    let mut current = Some(index);
    while let Some(i) = current {
        path.push(nodes[i].state.clone());
        current = nodes[i].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::traits::ConstraintType;
    use crate::common::types::Space;

    struct OpenSpace {
        space: Space,
    }

    impl OpenSpace {
        fn new() -> Self {
            OpenSpace { space: Space::cube(2, -10.0, 10.0) }
        }
    }

    impl Constraint for OpenSpace {
        fn space(&self) -> &Space {
            &self.space
        }

        fn check_constraint_type(&self, _state: &State) -> ConstraintType {
            ConstraintType::Free
        }

        fn check_collision(&self, _src: &State, _dst: &State) -> bool {
            true
        }
    }

    /// Rejects every segment that crosses the vertical line x = 1.5.
    struct SplitSpace {
        space: Space,
    }

    impl Constraint for SplitSpace {
        fn space(&self) -> &Space {
            &self.space
        }

        fn check_constraint_type(&self, _state: &State) -> ConstraintType {
            ConstraintType::Free
        }

        fn check_collision(&self, src: &State, dst: &State) -> bool {
            (src[0] - 1.5).signum() == (dst[0] - 1.5).signum()
        }
    }

    fn state(x: f64, y: f64) -> State {
        State::new(vec![x, y])
    }

    #[test]
    fn test_nearest_index_first_match_wins() {
        let nodes = vec![
            Node::new(state(1.0, 0.0), None, 0.0),
            Node::new(state(-1.0, 0.0), Some(0), 2.0),
            Node::new(state(0.0, 3.0), Some(0), 3.0),
        ];
        // (1, 0) and (-1, 0) are equidistant from the origin
        assert_eq!(nearest_index(&nodes, &state(0.0, 0.0)), 0);
        assert_eq!(nearest_index(&nodes, &state(0.0, 2.5)), 2);
    }

    #[test]
    fn test_near_indices_radius_formula() {
        // N = 2, dim = 2: radius = R * sqrt(ln 2 / 2) ~ 0.5887 * R
        let nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(5.0, 0.0), Some(0), 5.0),
        ];
        let radius = (2.0_f64.ln() / 2.0).sqrt();
        let inside = state(radius * 0.9, 0.0);
        let near = near_indices(&nodes, &inside, 1.0, 2);
        assert_eq!(near, vec![0]);

        let outside = state(radius * 1.1, 0.0);
        assert!(near_indices(&nodes, &outside, 1.0, 2).is_empty());
    }

    #[test]
    fn test_near_indices_empty_tree() {
        assert!(near_indices(&[], &state(0.0, 0.0), 10.0, 2).is_empty());
    }

    #[test]
    fn test_near_indices_single_node_radius_is_zero() {
        // ln(1) = 0 makes the radius collapse
        let nodes = vec![Node::new(state(0.0, 0.0), None, 0.0)];
        assert!(near_indices(&nodes, &state(0.0, 0.0), 100.0, 2).is_empty());
    }

    #[test]
    fn test_choose_parent_picks_cheapest() {
        let world = OpenSpace::new();
        let nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(2.0, 0.0), Some(0), 2.0),
        ];
        // From the root: 0 + sqrt(2); through node 1: 2 + sqrt(2)
        let candidate = Node::new(state(1.0, 1.0), Some(1), 2.0 + 2.0_f64.sqrt());
        let chosen = choose_parent(&world, &nodes, candidate, &[0, 1]);
        assert_eq!(chosen.parent, Some(0));
        assert!((chosen.cost - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_choose_parent_respects_collision() {
        let world = SplitSpace { space: Space::cube(2, -10.0, 10.0) };
        let nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(2.0, 0.0), Some(0), 5.0),
        ];
        // The root is cheaper but sits on the far side of the split
        let candidate = Node::new(state(2.0, 1.0), Some(0), 7.0);
        let chosen = choose_parent(&world, &nodes, candidate, &[0, 1]);
        assert_eq!(chosen.parent, Some(1));
        assert!((chosen.cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_choose_parent_keeps_steer_parent_when_no_candidate() {
        let world = OpenSpace::new();
        let nodes = vec![Node::new(state(0.0, 0.0), None, 0.0)];
        let candidate = Node::new(state(1.0, 0.0), Some(0), 1.0);
        let chosen = choose_parent(&world, &nodes, candidate, &[]);
        assert_eq!(chosen.parent, Some(0));
        assert!((chosen.cost - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rewire_lowers_cost_and_keeps_invariants() {
        let world = OpenSpace::new();
        // Node 1 reached the long way around; node 2 offers a shortcut
        let mut nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(1.2, 1.2), Some(0), 4.0),
            Node::new(state(1.0, 0.0), Some(0), 1.0),
        ];
        let before = nodes[1].cost;
        rewire(&world, &mut nodes, 2, &[1]);

        assert_eq!(nodes[1].parent, Some(2));
        // cost only ever decreases
        assert!(nodes[1].cost < before);
        // cost consistency of the rewired node against its new parent
        let expected = nodes[2].cost + nodes[2].state.distance(&nodes[1].state);
        assert!((nodes[1].cost - expected).abs() < 1e-10);
    }

    #[test]
    fn test_rewire_skips_when_not_cheaper() {
        let world = OpenSpace::new();
        let mut nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(1.2, 1.2), Some(0), 1.7),
            Node::new(state(1.0, 0.0), Some(0), 1.0),
        ];
        rewire(&world, &mut nodes, 2, &[1]);
        assert_eq!(nodes[1].parent, Some(0));
        assert!((nodes[1].cost - 1.7).abs() < 1e-10);
    }

    #[test]
    fn test_rewire_respects_collision() {
        let world = SplitSpace { space: Space::cube(2, -10.0, 10.0) };
        let mut nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(2.0, 0.5), Some(0), 9.0),
            Node::new(state(1.0, 0.5), Some(0), 1.2),
        ];
        rewire(&world, &mut nodes, 2, &[1]);
        // Shortcut crosses x = 1.5, so nothing changes
        assert_eq!(nodes[1].parent, Some(0));
        assert!((nodes[1].cost - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_path_to_root_order() {
        let nodes = vec![
            Node::new(state(0.0, 0.0), None, 0.0),
            Node::new(state(1.0, 0.0), Some(0), 1.0),
            Node::new(state(2.0, 0.0), Some(1), 2.0),
        ];
        let path = path_to_root(&nodes, 2);
        assert_eq!(path, vec![state(0.0, 0.0), state(1.0, 0.0), state(2.0, 0.0)]);
    }
}
