//! Cartesian traversal and summation over index ranges.
//!
//! Every function here visits the product of its ranges in nested order: the
//! first range varies slowest and the last fastest. The current tuple lives
//! in a small inline buffer, so no traversal allocates unless it has more
//! than eight dimensions. With no ranges at all, the callback runs once with
//! an empty tuple; with any empty range, it never runs.

use smallvec::SmallVec;
use vargrid_expr::{Expr, IntoExpr};

use crate::index::IndexRange;

type Tuple = SmallVec<[usize; 8]>;

fn walk<E, F>(ranges: &[IndexRange], f: &mut F) -> Result<(), E>
where
    F: FnMut(&[usize]) -> Result<(), E>,
{
    if ranges.iter().any(IndexRange::is_empty) {
        return Ok(());
    }
    let mut current: Tuple = ranges.iter().map(IndexRange::start).collect();
    loop {
        f(&current)?;
        let mut level = ranges.len();
        loop {
            if level == 0 {
                return Ok(());
            }
            level -= 1;
            current[level] += 1;
            if current[level] < ranges[level].end() {
                break;
            }
            current[level] = ranges[level].start();
        }
    }
}

/// Call `f` once per index tuple of the product of `ranges`.
pub fn for_each<F>(ranges: &[IndexRange], mut f: F)
where
    F: FnMut(&[usize]),
{
    let result: Result<(), std::convert::Infallible> = walk(ranges, &mut |index: &[usize]| {
        f(index);
        Ok(())
    });
    if let Err(never) = result {
        match never {}
    }
}

/// Like [`for_each`], stopping at the first error.
pub fn try_for_each<E, F>(ranges: &[IndexRange], mut f: F) -> Result<(), E>
where
    F: FnMut(&[usize]) -> Result<(), E>,
{
    walk(ranges, &mut f)
}

/// Sum `f` over the product of `ranges`, starting from the zero expression.
///
/// Terms are appended in traversal order and never merged, so repeated runs
/// over the same ranges accumulate floating-point values identically.
pub fn sum<T, F>(ranges: &[IndexRange], mut f: F) -> Expr
where
    T: IntoExpr,
    F: FnMut(&[usize]) -> T,
{
    let mut total = Expr::zero();
    for_each(ranges, |index| total.add_assign_expr(&f(index).into_expr()));
    total
}

/// Like [`sum`] for summands that may fail, such as table lookups.
pub fn try_sum<T, E, F>(ranges: &[IndexRange], mut f: F) -> Result<Expr, E>
where
    T: IntoExpr,
    F: FnMut(&[usize]) -> Result<T, E>,
{
    let mut total = Expr::zero();
    walk(ranges, &mut |index: &[usize]| {
        total.add_assign_expr(&f(index)?.into_expr());
        Ok(())
    })?;
    Ok(total)
}
