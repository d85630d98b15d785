//! Errors raised while assembling expressions from raw parts.

#[derive(Debug, Clone, PartialEq)]
pub enum LinearExprError {
    /// Variable and coefficient slices of different lengths.
    LengthMismatch { variables: usize, coefficients: usize },
    /// NaN or infinite coefficient at `position`.
    NonFiniteCoefficient { position: usize, value: f64 },
}

impl LinearExprError {
    pub fn code(&self) -> &'static str {
        match self {
            LinearExprError::LengthMismatch { .. } => "EXPR_LENGTH_MISMATCH",
            LinearExprError::NonFiniteCoefficient { .. } => "EXPR_NON_FINITE_COEFFICIENT",
        }
    }
}

impl std::fmt::Display for LinearExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinearExprError::LengthMismatch {
                variables,
                coefficients,
            } => write!(
                f,
                "[{}] {} variables paired with {} coefficients",
                self.code(),
                variables,
                coefficients
            ),
            LinearExprError::NonFiniteCoefficient { position, value } => write!(
                f,
                "[{}] Coefficient {} at position {} is not finite",
                self.code(),
                value,
                position
            ),
        }
    }
}

impl std::error::Error for LinearExprError {}
