//! Error types for rrt_planners

use std::fmt;

/// Main error type for planning operations
#[derive(Debug)]
pub enum PlanningError {
    /// Configuration value out of range
    InvalidParameter(String),
    /// Numerical computation failed (SVD, etc.)
    NumericalError(String),
    /// A planner was asked to solve without a constraint attached
    ConstraintNotSet,
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlanningError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            PlanningError::ConstraintNotSet => write!(f, "Constraint is not set"),
        }
    }
}

impl std::error::Error for PlanningError {}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::InvalidParameter("rate out of range".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: rate out of range");
    }

    #[test]
    fn test_error_display_constraint_not_set() {
        assert_eq!(format!("{}", PlanningError::ConstraintNotSet), "Constraint is not set");
    }
}
