//! Fixed-step steering toward a target state.

use crate::common::types::State;
use crate::path_planning::tree::Node;

fn prefix_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

/// Advance from `src` toward `target` by at most `expand_dist`.
///
/// A target closer than `expand_dist` is adopted verbatim and the cost grows
/// by the actual distance. Otherwise the new state lies exactly
/// `expand_dist` along the straight line from `src` to `target`: walking the
/// axes from highest to lowest, each step splits the remaining advance into
/// a component along the current axis and a remainder for the axes below it,
/// using the angle between the per-axis delta and the distance spanned by
/// the lower axes.
pub fn steer(src: &Node, src_index: usize, target: &State, expand_dist: f64) -> Node {
    let dist = src.state.distance(target);
    if dist < expand_dist {
        return Node::new(target.clone(), Some(src_index), src.cost + dist);
    }

    let mut steered = src.state.clone();
    let mut remainder = expand_dist;
    for i in (1..steered.dim()).rev() {
        let delta = target[i] - src.state[i];
        let lower = if i > 1 {
            prefix_distance(&src.state.coords[..i], &target.coords[..i])
        } else {
            // signed at the bottom of the recursion
            target[0] - src.state[0]
        };

        let angle = delta.atan2(lower);
        steered[i] += remainder * angle.sin();
        remainder *= angle.cos();
    }
    steered[0] += remainder;

    Node::new(steered, Some(src_index), src.cost + expand_dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(coords: Vec<f64>, cost: f64) -> Node {
        Node::new(State::new(coords), None, cost)
    }

    #[test]
    fn test_steer_adopts_close_target() {
        let src = node(vec![0.0, 0.0], 2.0);
        let target = State::new(vec![0.3, 0.4]);
        let steered = steer(&src, 7, &target, 1.0);
        assert_eq!(steered.state, target);
        assert_eq!(steered.parent, Some(7));
        assert!((steered.cost - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_steer_exact_step_2d() {
        let src = node(vec![0.0, 0.0], 0.0);
        let target = State::new(vec![3.0, 4.0]);
        let steered = steer(&src, 0, &target, 1.0);
        assert!((src.state.distance(&steered.state) - 1.0).abs() < 1e-12);
        assert!((steered.state[0] - 0.6).abs() < 1e-12);
        assert!((steered.state[1] - 0.8).abs() < 1e-12);
        assert!((steered.cost - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_steer_exact_step_3d_on_segment() {
        let src = node(vec![0.0, 0.0, 0.0], 0.0);
        let target = State::new(vec![1.0, 2.0, 2.0]);
        let steered = steer(&src, 0, &target, 1.0);
        assert!((steered.state[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((steered.state[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((steered.state[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_steer_exact_step_4d_collinearity() {
        let src = node(vec![0.5, -1.0, 2.0, 0.0], 1.5);
        let target = State::new(vec![-2.0, 3.0, 1.0, -4.0]);
        let expand = 0.7;
        let steered = steer(&src, 3, &target, expand);

        let advanced = src.state.distance(&steered.state);
        assert!((advanced - expand).abs() < 1e-9);

        // on the segment: distances add up
        let total = src.state.distance(&target);
        let rest = steered.state.distance(&target);
        assert!((advanced + rest - total).abs() < 1e-9);

        assert!((steered.cost - (1.5 + expand)).abs() < 1e-12);
    }

    #[test]
    fn test_steer_negative_direction() {
        let src = node(vec![0.0, 0.0], 0.0);
        let target = State::new(vec![-5.0, 0.0]);
        let steered = steer(&src, 0, &target, 1.0);
        assert!((steered.state[0] + 1.0).abs() < 1e-12);
        assert!(steered.state[1].abs() < 1e-12);
    }
}
