//! The linear expression: a constant plus weighted variable terms.
//!
//! Terms keep insertion order and accumulation never merges them, so the
//! same summands added in the same order always produce the same term list
//! and the same floating-point constant. [`Expr::normalized_terms`] merges
//! duplicates when a canonical form is needed.

use crate::expr::constraint::{ComparisonSense, ConstraintExpr};
use crate::ids::VariableId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    constant: f64,
    terms: Vec<(VariableId, f64)>,
}

impl Expr {
    /// The additive identity.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(terms: Vec<(VariableId, f64)>, constant: f64) -> Self {
        Self { constant, terms }
    }

    pub fn from_constant(constant: f64) -> Self {
        Self::new(Vec::new(), constant)
    }

    /// `coeff * var`; a zero coefficient gives the zero expression.
    pub fn term(var: VariableId, coeff: f64) -> Self {
        if coeff == 0.0 {
            Self::zero()
        } else {
            Self::new(vec![(var, coeff)], 0.0)
        }
    }

    /// `1.0 * var`.
    pub fn var(var: VariableId) -> Self {
        Self::new(vec![(var, 1.0)], 0.0)
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Terms in insertion order, duplicates included.
    pub fn terms(&self) -> &[(VariableId, f64)] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant == 0.0
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.terms.iter().map(|&(var, _)| var)
    }

    pub fn into_parts(self) -> (Vec<(VariableId, f64)>, f64) {
        (self.terms, self.constant)
    }

    /// Multiply every coefficient and the constant by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        let terms = self
            .terms
            .iter()
            .filter_map(|&(var, coeff)| {
                let scaled = coeff * factor;
                (scaled != 0.0).then_some((var, scaled))
            })
            .collect();
        Self::new(terms, self.constant * factor)
    }

    /// Append `other`'s terms and add its constant.
    pub fn add_assign_expr(&mut self, other: &Expr) {
        self.terms.extend_from_slice(&other.terms);
        self.constant += other.constant;
    }

    pub fn add_constant(&self, value: f64) -> Self {
        Self::new(self.terms.clone(), self.constant + value)
    }

    /// Duplicates merged, zeros dropped, ordered by variable.
    pub fn normalized_terms(&self) -> Vec<(VariableId, f64)> {
        let mut merged: BTreeMap<VariableId, f64> = BTreeMap::new();
        for &(var, coeff) in &self.terms {
            *merged.entry(var).or_default() += coeff;
        }
        merged.retain(|_, coeff| *coeff != 0.0);
        merged.into_iter().collect()
    }

    /// Value of the expression, or `None` if `value_of` misses a variable.
    pub fn evaluate<F>(&self, mut value_of: F) -> Option<f64>
    where
        F: FnMut(VariableId) -> Option<f64>,
    {
        self.terms.iter().try_fold(self.constant, |acc, &(var, coeff)| {
            value_of(var).map(|value| acc + coeff * value)
        })
    }

    /// `self <sense> rhs` with the constant moved to the right-hand side.
    pub fn compare_scalar(&self, rhs: f64, sense: ComparisonSense) -> ConstraintExpr {
        ConstraintExpr::new(
            Self::new(self.terms.clone(), 0.0),
            sense,
            rhs - self.constant,
        )
    }

    /// `self <sense> other`, rewritten as `self - other <sense> c`.
    pub fn compare_expr(&self, other: &Expr, sense: ComparisonSense) -> ConstraintExpr {
        let mut lhs = self.clone();
        lhs.add_assign_expr(&other.scale(-1.0));
        let (terms, constant) = lhs.into_parts();
        ConstraintExpr::new(Self::new(terms, 0.0), sense, -constant)
    }

    pub fn le_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::Equal)
    }

    pub fn le_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::Equal)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (pos, (var, coeff)) in self.terms.iter().enumerate() {
            match (pos, *coeff < 0.0) {
                (0, _) => write!(f, "{coeff} {var}")?,
                (_, true) => write!(f, " - {} {var}", -coeff)?,
                (_, false) => write!(f, " + {coeff} {var}")?,
            }
        }
        match (self.terms.is_empty(), self.constant) {
            (true, constant) => write!(f, "{constant}"),
            (false, constant) if constant < 0.0 => write!(f, " - {}", -constant),
            (false, constant) if constant > 0.0 => write!(f, " + {constant}"),
            _ => Ok(()),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Expr) -> Expr {
        self.add_assign_expr(&rhs);
        self
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        self.add_assign_expr(&rhs);
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(mut self, rhs: Expr) -> Expr {
        self.add_assign_expr(&rhs.scale(-1.0));
        self
    }
}

impl std::ops::Add<f64> for Expr {
    type Output = Expr;

    fn add(mut self, rhs: f64) -> Expr {
        self.constant += rhs;
        self
    }
}

impl std::ops::Sub<f64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: f64) -> Expr {
        self + (-rhs)
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        self.scale(rhs)
    }
}

impl std::ops::Mul<Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        rhs.scale(self)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.scale(-1.0)
    }
}

impl std::iter::Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Self {
        iter.fold(Expr::zero(), |mut acc, expr| {
            acc.add_assign_expr(&expr);
            acc
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::VariableId;
    use crate::expr::{ComparisonSense, ConstraintExpr, Expr};

    const X: VariableId = VariableId::new(1);
    const Y: VariableId = VariableId::new(2);

    #[test]
    fn zero_coefficient_term_is_zero() {
        assert!(Expr::term(X, 0.0).is_zero());
        assert!(!Expr::from_constant(5.0).is_zero());
        assert_eq!(Expr::var(X).terms(), &[(X, 1.0)]);
    }

    #[test]
    fn accumulation_never_merges() {
        let mut total = Expr::zero();
        for _ in 0..3 {
            total.add_assign_expr(&Expr::term(X, 0.1));
        }
        assert_eq!(total.terms().len(), 3);
        assert_eq!(total.normalized_terms().len(), 1);
    }

    #[test]
    fn operators_keep_term_order() {
        let e = Expr::var(X) + Expr::term(Y, 2.0) - Expr::var(X) * 0.5 + 1.0;
        assert_eq!(e.terms(), &[(X, 1.0), (Y, 2.0), (X, -0.5)]);
        assert_eq!(e.constant(), 1.0);
        assert_eq!(e.normalized_terms(), vec![(X, 0.5), (Y, 2.0)]);
    }

    #[test]
    fn cancelling_terms_normalize_away() {
        let e = Expr::var(X) - Expr::var(X) + Expr::term(Y, 3.0);
        assert_eq!(e.normalized_terms(), vec![(Y, 3.0)]);
    }

    #[test]
    fn scale_drops_zeroed_terms() {
        let e = Expr::new(vec![(X, 2.0)], 3.0);
        assert_eq!(e.scale(2.0), Expr::new(vec![(X, 4.0)], 6.0));
        assert!((e * 0.0).terms().is_empty());
        assert_eq!((-Expr::var(Y)).terms(), &[(Y, -1.0)]);
    }

    #[test]
    fn compare_scalar_moves_constant() {
        let c = Expr::new(vec![(X, 1.0)], 3.0).le_scalar(10.0);
        assert_eq!(c.sense(), ComparisonSense::LessEqual);
        assert_eq!(c.rhs(), 7.0);
        assert_eq!(c.expr().constant(), 0.0);
    }

    #[test]
    fn compare_expr_subtracts_rhs() {
        let lhs = Expr::new(vec![(X, 1.0)], 3.0);
        let rhs = Expr::new(vec![(Y, 1.0)], 7.0);
        let c = lhs.ge_expr(&rhs);
        assert_eq!(c.sense(), ComparisonSense::GreaterEqual);
        assert_eq!(c.rhs(), 4.0);
        assert_eq!(c.expr().terms(), &[(X, 1.0), (Y, -1.0)]);
        assert_eq!(Expr::var(X).eq_scalar(5.0).rhs(), 5.0);
    }

    #[test]
    fn evaluate_requires_every_value() {
        let e = Expr::new(vec![(X, 2.0), (Y, -1.0)], 0.5);
        assert_eq!(e.evaluate(|v| Some(if v == X { 3.0 } else { 1.0 })), Some(5.5));
        assert_eq!(e.evaluate(|v| (v == X).then_some(3.0)), None);
    }

    #[test]
    fn display_renders_signed_terms() {
        let e = Expr::new(vec![(X, 2.0), (Y, -1.0)], -4.0);
        assert_eq!(e.to_string(), "2 x1 - 1 x2 - 4");
        assert_eq!(Expr::from_constant(3.0).to_string(), "3");
        assert_eq!(Expr::var(Y).add_constant(1.5).to_string(), "1 x2 + 1.5");
    }

    #[test]
    fn iterator_sum_starts_from_zero() {
        let total: Expr = [Expr::var(X), Expr::var(Y), Expr::from_constant(2.0)]
            .into_iter()
            .sum();
        assert_eq!(total.terms().len(), 2);
        assert_eq!(total.constant(), 2.0);
        assert!(std::iter::empty::<Expr>().sum::<Expr>().is_zero());
    }

    #[test]
    fn constraint_parts_round_out() {
        let expr = Expr::term(X, 1.0);
        let (inner, sense, rhs) =
            ConstraintExpr::new(expr.clone(), ComparisonSense::LessEqual, 10.0).into_parts();
        assert_eq!((inner, sense, rhs), (expr, ComparisonSense::LessEqual, 10.0));
    }
}
