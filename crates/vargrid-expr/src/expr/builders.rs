//! Assembling expressions from parallel slices and summand streams.

use crate::expr::convert::IntoExpr;
use crate::expr::core::Expr;
use crate::expr::error::LinearExprError;
use crate::ids::VariableId;

/// `sum(coefficients[i] * variables[i])`, pairing the slices by position.
///
/// Zero coefficients are skipped. Fails when the slices differ in length or
/// a coefficient is NaN or infinite.
pub fn weighted_sum(
    variables: &[VariableId],
    coefficients: &[f64],
) -> Result<Expr, LinearExprError> {
    if variables.len() != coefficients.len() {
        return Err(LinearExprError::LengthMismatch {
            variables: variables.len(),
            coefficients: coefficients.len(),
        });
    }
    let mut terms = Vec::with_capacity(variables.len());
    for (position, (&var, &coeff)) in variables.iter().zip(coefficients).enumerate() {
        if !coeff.is_finite() {
            return Err(LinearExprError::NonFiniteCoefficient {
                position,
                value: coeff,
            });
        }
        if coeff != 0.0 {
            terms.push((var, coeff));
        }
    }
    Ok(Expr::new(terms, 0.0))
}

/// Accumulate summands left to right, starting from zero. Terms are not merged.
pub fn linear_sum<I, T>(items: I) -> Expr
where
    I: IntoIterator<Item = T>,
    T: IntoExpr,
{
    let mut total = Expr::zero();
    for item in items {
        total.add_assign_expr(&item.into_expr());
    }
    total
}
