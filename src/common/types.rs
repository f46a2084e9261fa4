//! Common value types used throughout rrt_planners

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use nalgebra::DVector;

/// A point in an n-dimensional Euclidean configuration space.
///
/// Plain value semantics: arithmetic produces new states, equality is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub coords: Vec<f64>,
}

impl State {
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    pub fn zeros(dim: usize) -> Self {
        Self { coords: vec![0.0; dim] }
    }

    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.coords.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Euclidean distance to another state.
    pub fn distance(&self, other: &State) -> f64 {
        assert_eq!(self.dim(), other.dim());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.coords)
    }
}

impl From<Vec<f64>> for State {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl Index<usize> for State {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl IndexMut<usize> for State {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.coords[axis]
    }
}

impl Add for State {
    type Output = State;

    fn add(mut self, rhs: State) -> State {
        assert_eq!(self.dim(), rhs.dim());
        for (a, b) in self.coords.iter_mut().zip(rhs.coords) {
            *a += b;
        }
        self
    }
}

impl Sub for State {
    type Output = State;

    fn sub(mut self, rhs: State) -> State {
        assert_eq!(self.dim(), rhs.dim());
        for (a, b) in self.coords.iter_mut().zip(rhs.coords) {
            *a -= b;
        }
        self
    }
}

impl Mul<f64> for State {
    type Output = State;

    fn mul(mut self, scalar: f64) -> State {
        for a in self.coords.iter_mut() {
            *a *= scalar;
        }
        self
    }
}

impl Div<f64> for State {
    type Output = State;

    fn div(mut self, scalar: f64) -> State {
        for a in self.coords.iter_mut() {
            *a /= scalar;
        }
        self
    }
}

/// Admissible interval along one axis of the configuration space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub low: f64,
    pub high: f64,
}

impl Bound {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Axis-aligned bounded region of the configuration space.
#[derive(Debug, Clone)]
pub struct Space {
    bounds: Vec<Bound>,
}

impl Space {
    pub fn new(bounds: Vec<Bound>) -> Self {
        Self { bounds }
    }

    /// A space with the same bound on every axis.
    pub fn cube(dim: usize, low: f64, high: f64) -> Self {
        Self { bounds: vec![Bound::new(low, high); dim] }
    }

    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    /// Bound of the given axis, zero-based.
    pub fn bound(&self, axis: usize) -> &Bound {
        &self.bounds[axis]
    }
}
