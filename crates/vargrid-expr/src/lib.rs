pub mod expr;
pub mod ids;

pub use expr::{
    ComparisonSense, ConstraintExpr, Expr, IntoExpr, LinearExprError, linear_sum, weighted_sum,
};
pub use ids::{ConstraintId, VariableId};
