//! Common constraint patterns registered through a [`Solver`].
//!
//! The helpers that iterate take fallible callbacks so table lookups can use
//! `?` inside them. Any error type that absorbs [`SolverError`] works;
//! [`BuildError`](crate::BuildError) is the usual choice.

use std::time::Instant;

use vargrid_expr::{ComparisonSense, ConstraintExpr, ConstraintId, Expr, IntoExpr, VariableId};
use vargrid_solver::{Solver, SolverError};

use crate::index::IndexRange;
use crate::iterate::{try_for_each, try_sum};
use crate::naming::Naming;

fn register<S: Solver + ?Sized>(
    solver: &mut S,
    constraint: ConstraintExpr,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    let (expr, sense, rhs) = constraint.into_parts();
    solver.add_constraint(expr, sense, rhs, name)
}

fn compare<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    sense: ComparisonSense,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    let constraint = lhs.into_expr().compare_expr(&rhs.into_expr(), sense);
    register(solver, constraint, name)
}

/// Register `lhs == rhs`.
pub fn add_eq<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    compare(solver, lhs, rhs, ComparisonSense::Equal, name)
}

/// Register `lhs <= rhs`.
pub fn add_le<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    compare(solver, lhs, rhs, ComparisonSense::LessEqual, name)
}

/// Register `lhs >= rhs`.
pub fn add_ge<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    compare(solver, lhs, rhs, ComparisonSense::GreaterEqual, name)
}

/// Register an already-compared expression.
pub fn add<S: Solver + ?Sized>(
    solver: &mut S,
    constraint: ConstraintExpr,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    register(solver, constraint, name)
}

/// Register `f(index)` for every tuple of the product of `ranges`, unnamed.
pub fn add_each<S, E, F>(
    solver: &mut S,
    ranges: &[IndexRange],
    f: F,
) -> Result<Vec<ConstraintId>, E>
where
    S: Solver + ?Sized,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<ConstraintExpr, E>,
{
    add_each_named(solver, Naming::disabled(), "", ranges, f)
}

/// Register `f(index)` for every tuple, named `base[i0,i1,...]` through `naming`.
pub fn add_each_named<S, E, F>(
    solver: &mut S,
    naming: Naming,
    base: &str,
    ranges: &[IndexRange],
    mut f: F,
) -> Result<Vec<ConstraintId>, E>
where
    S: Solver + ?Sized,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<ConstraintExpr, E>,
{
    let started = Instant::now();
    let mut ids = Vec::new();
    try_for_each(ranges, |index| {
        let constraint = f(index)?;
        ids.push(register(solver, constraint, &naming.name_nd(base, index))?);
        Ok::<(), E>(())
    })?;
    tracing::debug!(
        component = "constraints",
        operation = "add_each",
        status = "success",
        base,
        dims = ranges.len(),
        constraints = ids.len(),
        duration_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Registered constraint family"
    );
    Ok(ids)
}

fn cardinality<S, T, E, F>(
    solver: &mut S,
    ranges: &[IndexRange],
    f: F,
    sense: ComparisonSense,
    operation: &'static str,
) -> Result<ConstraintId, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    let total = try_sum(ranges, f)?;
    let terms = total.terms().len();
    let id = register(solver, total.compare_scalar(1.0, sense), "")?;
    tracing::debug!(
        component = "constraints",
        operation,
        status = "success",
        terms,
        constraint = %id,
        "Registered cardinality constraint"
    );
    Ok(id)
}

/// One constraint `sum(f) <= 1` over the whole product of `ranges`.
///
/// Wrap the call in [`for_each`](crate::for_each) for one constraint per tuple.
pub fn at_most_one<S, T, E, F>(
    solver: &mut S,
    ranges: &[IndexRange],
    f: F,
) -> Result<ConstraintId, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    cardinality(solver, ranges, f, ComparisonSense::LessEqual, "at_most_one")
}

/// One constraint `sum(f) == 1` over the whole product of `ranges`.
pub fn exactly_one<S, T, E, F>(
    solver: &mut S,
    ranges: &[IndexRange],
    f: F,
) -> Result<ConstraintId, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    cardinality(solver, ranges, f, ComparisonSense::Equal, "exactly_one")
}

/// `binary == value` implies `lhs <= rhs`, via the solver's indicator facility.
pub fn add_indicator<S: Solver + ?Sized>(
    solver: &mut S,
    binary: VariableId,
    value: bool,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    name: &str,
) -> Result<(), SolverError> {
    let (expr, sense, rhs) = lhs
        .into_expr()
        .compare_expr(&rhs.into_expr(), ComparisonSense::LessEqual)
        .into_parts();
    solver.add_indicator_constraint(binary, value, expr, sense, rhs, name)
}

/// `binary == value` implies `lhs <= rhs`. Pass `true` for the usual "if on" form.
pub fn implies<S: Solver + ?Sized>(
    solver: &mut S,
    binary: VariableId,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    value: bool,
    name: &str,
) -> Result<(), SolverError> {
    add_indicator(solver, binary, value, lhs, rhs, name)
}

/// Big-M form of `binary == 1` implies `lhs <= rhs`: `lhs <= rhs + M (1 - binary)`.
///
/// `big_m` is not checked. Too small a value cuts off solutions where the
/// binary is 0.
pub fn big_m_le<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    binary: VariableId,
    big_m: f64,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    let expr = lhs.into_expr() - rhs.into_expr() + Expr::term(binary, big_m);
    register(solver, expr.le_scalar(big_m), name)
}

/// Big-M form of `binary == 1` implies `lhs >= rhs`: `lhs >= rhs - M (1 - binary)`.
pub fn big_m_ge<S: Solver + ?Sized>(
    solver: &mut S,
    lhs: impl IntoExpr,
    rhs: impl IntoExpr,
    binary: VariableId,
    big_m: f64,
    name: &str,
) -> Result<ConstraintId, SolverError> {
    let expr = lhs.into_expr() - rhs.into_expr() - Expr::term(binary, big_m);
    register(solver, expr.ge_scalar(-big_m), name)
}

fn bound_each<S, T, E, F>(
    solver: &mut S,
    z: VariableId,
    ranges: &[IndexRange],
    mut f: F,
    sense: ComparisonSense,
) -> Result<Vec<ConstraintId>, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    let mut ids = Vec::new();
    try_for_each(ranges, |index| {
        let constraint = Expr::var(z).compare_expr(&f(index)?.into_expr(), sense);
        ids.push(register(solver, constraint, "")?);
        Ok::<(), E>(())
    })?;
    Ok(ids)
}

/// `z >= f(index)` for every tuple, so `z` bounds the maximum from above.
pub fn max_of<S, T, E, F>(
    solver: &mut S,
    z: VariableId,
    ranges: &[IndexRange],
    f: F,
) -> Result<Vec<ConstraintId>, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    bound_each(solver, z, ranges, f, ComparisonSense::GreaterEqual)
}

/// `z <= f(index)` for every tuple, so `z` bounds the minimum from below.
pub fn min_of<S, T, E, F>(
    solver: &mut S,
    z: VariableId,
    ranges: &[IndexRange],
    f: F,
) -> Result<Vec<ConstraintId>, E>
where
    S: Solver + ?Sized,
    T: IntoExpr,
    E: From<SolverError>,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    bound_each(solver, z, ranges, f, ComparisonSense::LessEqual)
}
