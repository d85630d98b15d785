//! Conversion of summands into linear expressions.
//!
//! Numbers become constant expressions, a variable handle becomes a
//! unit-coefficient term, and expressions pass through unchanged.

use crate::expr::core::Expr;
use crate::ids::VariableId;

/// A value that can be accumulated into an [`Expr`].
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for &Expr {
    fn into_expr(self) -> Expr {
        self.clone()
    }
}

impl IntoExpr for VariableId {
    fn into_expr(self) -> Expr {
        Expr::var(self)
    }
}

impl IntoExpr for &VariableId {
    fn into_expr(self) -> Expr {
        Expr::var(*self)
    }
}

/// `(coefficient, variable)` pair.
impl IntoExpr for (f64, VariableId) {
    fn into_expr(self) -> Expr {
        Expr::term(self.1, self.0)
    }
}

impl IntoExpr for f64 {
    fn into_expr(self) -> Expr {
        Expr::from_constant(self)
    }
}

macro_rules! impl_into_expr_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoExpr for $ty {
                fn into_expr(self) -> Expr {
                    Expr::from_constant(self as f64)
                }
            }
        )*
    };
}

impl_into_expr_for_int!(i32, i64, u32, usize);

impl From<VariableId> for Expr {
    fn from(value: VariableId) -> Self {
        Expr::var(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::from_constant(value)
    }
}

impl std::ops::Mul<VariableId> for f64 {
    type Output = Expr;

    fn mul(self, rhs: VariableId) -> Self::Output {
        Expr::term(rhs, self)
    }
}

impl std::ops::Add<VariableId> for Expr {
    type Output = Expr;

    fn add(self, rhs: VariableId) -> Self::Output {
        self + Expr::var(rhs)
    }
}

impl std::ops::Sub<VariableId> for Expr {
    type Output = Expr;

    fn sub(self, rhs: VariableId) -> Self::Output {
        self + Expr::term(rhs, -1.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::IntoExpr;
    use crate::{Expr, VariableId};

    #[test]
    fn numbers_become_constants() {
        assert_eq!(3_i32.into_expr(), Expr::from_constant(3.0));
        assert_eq!(4_usize.into_expr().constant(), 4.0);
        assert_eq!(2.5_f64.into_expr().constant(), 2.5);
        assert!(0_i64.into_expr().terms().is_empty());
    }

    #[test]
    fn variable_becomes_unit_term() {
        let v = VariableId::new(4);
        let e = v.into_expr();
        assert_eq!(e.terms(), &[(v, 1.0)]);
        assert_eq!(e.constant(), 0.0);
    }

    #[test]
    fn weighted_pair_and_operators() {
        let v = VariableId::new(2);
        assert_eq!((3.0, v).into_expr(), Expr::term(v, 3.0));
        assert_eq!(3.0 * v, Expr::term(v, 3.0));
        let e = Expr::from_constant(1.0) - v;
        assert_eq!(e.terms(), &[(v, -1.0)]);
    }
}
