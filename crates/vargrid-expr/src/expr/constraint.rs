//! Constraint expressions: linear expression with comparison sense and RHS.

use crate::expr::core::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }

    /// Operator symbol used in rendered constraints.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "<=",
            ComparisonSense::GreaterEqual => ">=",
            ComparisonSense::Equal => "==",
        }
    }

    /// Check `lhs <sense> rhs` within an absolute tolerance.
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            ComparisonSense::LessEqual => lhs <= rhs + tolerance,
            ComparisonSense::GreaterEqual => lhs >= rhs - tolerance,
            ComparisonSense::Equal => (lhs - rhs).abs() <= tolerance,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintExpr {
    expr: Expr,
    sense: ComparisonSense,
    rhs: f64,
}

impl ConstraintExpr {
    pub fn new(expr: Expr, sense: ComparisonSense, rhs: f64) -> Self {
        Self { expr, sense, rhs }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn sense(&self) -> ComparisonSense {
        self.sense
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    pub fn into_parts(self) -> (Expr, ComparisonSense, f64) {
        (self.expr, self.sense, self.rhs)
    }
}

impl std::fmt::Display for ConstraintExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.expr, self.sense.symbol(), self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::ComparisonSense;

    #[test]
    fn holds_respects_tolerance() {
        assert!(ComparisonSense::LessEqual.holds(1.0 + 1e-9, 1.0, 1e-6));
        assert!(!ComparisonSense::LessEqual.holds(1.1, 1.0, 1e-6));
        assert!(ComparisonSense::GreaterEqual.holds(1.0 - 1e-9, 1.0, 1e-6));
        assert!(ComparisonSense::Equal.holds(2.0, 2.0, 0.0));
        assert!(!ComparisonSense::Equal.holds(2.0, 2.5, 0.1));
    }
}
