//! Solver error types.
//!
//! Everything a backend reports is surfaced through [`SolverError`]
//! unchanged; the modeling layer never retries or reinterprets it.

use crate::SolverStatus;
use vargrid_expr::{ConstraintId, VariableId};

/// Error type for solver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// No objective function set.
    NoObjective,
    /// Variable handle was not issued by this solver (includes placeholders).
    InvalidVariableId(VariableId),
    /// Constraint handle was not issued by this solver.
    InvalidConstraintId(ConstraintId),
    /// Lower bound above upper bound, or a NaN bound.
    InvalidVariableBounds { lower: f64, upper: f64 },
    /// Non-finite coefficient or right-hand side.
    InvalidCoefficient { coefficient: f64 },
    /// Indicator constraint keyed on a variable that is not binary.
    NotBinary(VariableId),
    /// Solution attribute requested while no solution is available.
    NoSolution { attribute: &'static str },
    /// Solver is not available (e.g., library not installed or not linked).
    SolverNotAvailable(String),
    /// Solver failed to find a solution.
    SolveFailure {
        /// The solver status that caused the failure.
        status: SolverStatus,
    },
    /// Solver-specific error not covered by other variants.
    SolverSpecific(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "MODEL_EMPTY",
            SolverError::NoObjective => "OBJECTIVE_MISSING",
            SolverError::InvalidVariableId(_) => "VARIABLE_INVALID_ID",
            SolverError::InvalidConstraintId(_) => "CONSTRAINT_INVALID_ID",
            SolverError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            SolverError::InvalidCoefficient { .. } => "EXPR_INVALID_COEFFICIENT",
            SolverError::NotBinary(_) => "VARIABLE_NOT_BINARY",
            SolverError::NoSolution { .. } => "SOLUTION_MISSING",
            SolverError::SolverNotAvailable(_) => "SOLVER_NOT_AVAILABLE",
            SolverError::SolveFailure { status } => match status {
                SolverStatus::Infeasible => "SOLVER_INFEASIBLE",
                SolverStatus::Unbounded => "SOLVER_UNBOUNDED",
                SolverStatus::InfeasibleOrUnbounded => "SOLVER_INF_OR_UNBD",
                SolverStatus::Numeric => "SOLVER_NUMERIC",
                _ => "SOLVER_INTERNAL",
            },
            SolverError::SolverSpecific(_) => "SOLVER_SPECIFIC",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::NoObjective => write!(f, "[{}] Model has no objective", self.code()),
            SolverError::InvalidVariableId(id) if id.is_placeholder() => write!(
                f,
                "[{}] Placeholder variable was never registered with a solver",
                self.code()
            ),
            SolverError::InvalidVariableId(id) => write!(
                f,
                "[{}] Variable ID {} does not exist",
                self.code(),
                id.inner()
            ),
            SolverError::InvalidConstraintId(id) => write!(
                f,
                "[{}] Constraint ID {} does not exist",
                self.code(),
                id.inner()
            ),
            SolverError::InvalidVariableBounds { lower, upper } => write!(
                f,
                "[{}] Variable bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            SolverError::InvalidCoefficient { coefficient } => write!(
                f,
                "[{}] Coefficient must be finite (got {})",
                self.code(),
                coefficient
            ),
            SolverError::NotBinary(id) => write!(
                f,
                "[{}] Indicator variable {} is not binary",
                self.code(),
                id.inner()
            ),
            SolverError::NoSolution { attribute } => write!(
                f,
                "[{}] Attribute '{}' requires a solution",
                self.code(),
                attribute
            ),
            SolverError::SolverNotAvailable(msg) => {
                write!(f, "[{}] Solver not available: {}", self.code(), msg)
            }
            SolverError::SolveFailure { status } => {
                write!(f, "[{}] Solve failed with status: {}", self.code(), status)
            }
            SolverError::SolverSpecific(msg) => {
                write!(f, "[{}] Solver error: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SolverError {}
