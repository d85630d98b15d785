//! Eager list building over index ranges.

use crate::index::IndexRange;
use crate::iterate::for_each;

/// Index tuple handed to [`comp_nd`] callbacks.
///
/// Tuples of up to three indices arrive as positional variants; longer ones
/// arrive as a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NdIndex<'a> {
    One(usize),
    Two(usize, usize),
    Three(usize, usize, usize),
    Many(&'a [usize]),
}

impl<'a> NdIndex<'a> {
    fn from_slice(index: &'a [usize]) -> Self {
        match *index {
            [i] => NdIndex::One(i),
            [i, j] => NdIndex::Two(i, j),
            [i, j, k] => NdIndex::Three(i, j, k),
            _ => NdIndex::Many(index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NdIndex::One(_) => 1,
            NdIndex::Two(..) => 2,
            NdIndex::Three(..) => 3,
            NdIndex::Many(index) => index.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at `position`, whatever the variant.
    pub fn get(&self, position: usize) -> Option<usize> {
        match (self, position) {
            (NdIndex::One(i), 0) => Some(*i),
            (NdIndex::Two(i, _), 0) | (NdIndex::Three(i, _, _), 0) => Some(*i),
            (NdIndex::Two(_, j), 1) | (NdIndex::Three(_, j, _), 1) => Some(*j),
            (NdIndex::Three(_, _, k), 2) => Some(*k),
            (NdIndex::Many(index), p) => index.get(p).copied(),
            _ => None,
        }
    }
}

/// `[f(i) for i in range]`.
pub fn comp<T, F>(range: IndexRange, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    range.iter().map(f).collect()
}

/// Nested lists: outer indexed by `outer`, inner by `inner`.
pub fn comp2<T, F>(outer: IndexRange, inner: IndexRange, mut f: F) -> Vec<Vec<T>>
where
    F: FnMut(usize, usize) -> T,
{
    outer
        .iter()
        .map(|i| inner.iter().map(|j| f(i, j)).collect())
        .collect()
}

/// Every index tuple of the product of `ranges`, first range slowest.
///
/// Unlike [`for_each`], an empty `ranges` list yields no tuples.
pub fn cartesian_product(ranges: &[IndexRange]) -> Vec<Vec<usize>> {
    if ranges.is_empty() {
        return Vec::new();
    }
    let total = ranges.iter().map(IndexRange::size).product();
    let mut tuples = Vec::with_capacity(total);
    for_each(ranges, |index| tuples.push(index.to_vec()));
    tuples
}

/// Map `f` over the materialized [`cartesian_product`] of `ranges`.
pub fn comp_nd<T, F>(ranges: &[IndexRange], mut f: F) -> Vec<T>
where
    F: FnMut(NdIndex<'_>) -> T,
{
    cartesian_product(ranges)
        .iter()
        .map(|tuple| f(NdIndex::from_slice(tuple)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{indices, range};

    #[test]
    fn comp_squares() {
        assert_eq!(comp(indices(5), |i| i * i), vec![0, 1, 4, 9, 16]);
        assert!(comp(indices(0), |i| i).is_empty());
    }

    #[test]
    fn comp2_nests_outer_first() {
        assert_eq!(
            comp2(indices(2), indices(3), |i, j| i + j),
            vec![vec![0, 1, 2], vec![1, 2, 3]]
        );
        let empty_inner = comp2(indices(2), indices(0), |i, j| i + j);
        assert_eq!(empty_inner, vec![Vec::<usize>::new(), Vec::new()]);
    }

    #[test]
    fn cartesian_product_order() {
        assert_eq!(
            cartesian_product(&[indices(2), range(3, 5)]),
            vec![vec![0, 3], vec![0, 4], vec![1, 3], vec![1, 4]]
        );
        assert!(cartesian_product(&[]).is_empty());
        assert!(cartesian_product(&[indices(2), indices(0)]).is_empty());
    }

    #[test]
    fn comp_nd_dispatches_by_arity() {
        let one = comp_nd(&[indices(3)], |idx| match idx {
            NdIndex::One(i) => i,
            _ => usize::MAX,
        });
        assert_eq!(one, vec![0, 1, 2]);

        let three = comp_nd(&[indices(1), indices(2), indices(2)], |idx| match idx {
            NdIndex::Three(i, j, k) => i * 100 + j * 10 + k,
            _ => usize::MAX,
        });
        assert_eq!(three, vec![0, 1, 10, 11]);

        let four = comp_nd(&[indices(2), indices(1), indices(1), indices(2)], |idx| match idx {
            NdIndex::Many(tuple) => tuple.iter().sum::<usize>(),
            _ => usize::MAX,
        });
        assert_eq!(four, vec![0, 1, 1, 2]);
    }

    #[test]
    fn nd_index_accessors() {
        let idx = NdIndex::Two(4, 7);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(1), Some(7));
        assert_eq!(idx.get(2), None);
        assert_eq!(NdIndex::Many(&[1, 2, 3, 4]).get(3), Some(4));
    }
}
