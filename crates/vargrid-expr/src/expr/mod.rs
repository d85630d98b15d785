//! Linear expression types for optimization modeling.
//!
//! - `core`: Expr: weighted variable terms + constant
//! - `constraint`: ConstraintExpr: expression with comparison sense and RHS
//! - `convert`: IntoExpr: numbers, handles and expressions into Expr
//! - `builders`: helpers for assembling expressions from raw parts
//! - `error`: Expression construction errors

pub mod builders;
pub mod constraint;
pub mod convert;
pub mod core;
pub mod error;

pub use builders::{linear_sum, weighted_sum};
pub use constraint::{ComparisonSense, ConstraintExpr};
pub use convert::IntoExpr;
pub use core::Expr;
pub use error::LinearExprError;
