//! Solver status types.

use serde::{Deserialize, Serialize};

/// Common status values that solvers may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    /// Model built but not solved yet.
    Loaded,
    /// Optimal solution found.
    Optimal,
    /// Solution found but optimality could not be proven within tolerances.
    Suboptimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is infeasible or unbounded; the solver did not decide which.
    InfeasibleOrUnbounded,
    /// Problem is unbounded.
    Unbounded,
    /// Objective cannot beat the configured cutoff.
    Cutoff,
    /// Solver reached iteration limit (may have feasible solution).
    ReachedIterationLimit,
    /// Solver reached node limit (may have feasible solution).
    ReachedNodeLimit,
    /// Solver reached time limit (may have feasible solution).
    ReachedTimeLimit,
    /// Solver reached the solution-count limit.
    ReachedSolutionLimit,
    /// Solve was interrupted by the caller.
    Interrupted,
    /// Solve stopped on numerical difficulties.
    Numeric,
    /// Status is unknown or solver did not complete.
    Unknown,
}

impl SolverStatus {
    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    /// Check if a solution is available to query.
    pub fn has_solution(self) -> bool {
        matches!(
            self,
            SolverStatus::Optimal
                | SolverStatus::Suboptimal
                | SolverStatus::ReachedTimeLimit
                | SolverStatus::ReachedNodeLimit
                | SolverStatus::ReachedSolutionLimit
        )
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Loaded => "loaded",
            SolverStatus::Optimal => "optimal",
            SolverStatus::Suboptimal => "suboptimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::InfeasibleOrUnbounded => "infeasible_or_unbounded",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::Cutoff => "cutoff",
            SolverStatus::ReachedIterationLimit => "iteration_limit",
            SolverStatus::ReachedNodeLimit => "node_limit",
            SolverStatus::ReachedTimeLimit => "time_limit",
            SolverStatus::ReachedSolutionLimit => "solution_limit",
            SolverStatus::Interrupted => "interrupted",
            SolverStatus::Numeric => "numeric",
            SolverStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_optimal() {
        assert!(SolverStatus::Optimal.is_optimal());
        assert!(!SolverStatus::Infeasible.is_optimal());
        assert!(!SolverStatus::Suboptimal.is_optimal());
        assert!(!SolverStatus::ReachedTimeLimit.is_optimal());
        assert!(!SolverStatus::Unknown.is_optimal());
    }

    #[test]
    fn test_status_has_solution() {
        assert!(SolverStatus::Optimal.has_solution());
        assert!(SolverStatus::Suboptimal.has_solution());
        assert!(SolverStatus::ReachedTimeLimit.has_solution());
        assert!(SolverStatus::ReachedNodeLimit.has_solution());
        assert!(SolverStatus::ReachedSolutionLimit.has_solution());
        assert!(!SolverStatus::Loaded.has_solution());
        assert!(!SolverStatus::ReachedIterationLimit.has_solution());
        assert!(!SolverStatus::Infeasible.has_solution());
        assert!(!SolverStatus::InfeasibleOrUnbounded.has_solution());
        assert!(!SolverStatus::Unbounded.has_solution());
        assert!(!SolverStatus::Interrupted.has_solution());
        assert!(!SolverStatus::Unknown.has_solution());
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(SolverStatus::Optimal.as_str(), "optimal");
        assert_eq!(SolverStatus::Infeasible.as_str(), "infeasible");
        assert_eq!(SolverStatus::ReachedTimeLimit.as_str(), "time_limit");
        assert_eq!(SolverStatus::ReachedNodeLimit.as_str(), "node_limit");
        assert_eq!(
            SolverStatus::InfeasibleOrUnbounded.as_str(),
            "infeasible_or_unbounded"
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", SolverStatus::Optimal), "optimal");
        assert_eq!(format!("{}", SolverStatus::Infeasible), "infeasible");
    }
}
