use std::collections::HashSet;

use proptest::prelude::*;
use vargrid_core::{
    IndexError, IndexRange, VariableFactory, cartesian_product, for_each, indices, range, sum,
};
use vargrid_expr::VariableId;

fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=4, 1..=3)
}

fn ranges_strategy() -> impl Strategy<Value = Vec<IndexRange>> {
    prop::collection::vec((0usize..4, 0usize..5), 1..=3)
        .prop_map(|bounds| bounds.into_iter().map(|(s, e)| range(s, e)).collect())
}

fn counted_group(shape: &[usize]) -> vargrid_core::VariableGroup {
    let mut next = 0u32;
    let mut group = VariableFactory::create_independent(shape);
    for_each(
        &shape.iter().map(|&n| indices(n)).collect::<Vec<_>>(),
        |index: &[usize]| {
            if let Ok(slot) = group.at_mut(index) {
                *slot = VariableId::new(next);
                next += 1;
            }
        },
    );
    group
}

proptest! {
    #[test]
    fn indices_enumerates_zero_to_n(n in 0usize..64) {
        let seen: Vec<usize> = indices(n).iter().collect();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(indices(n).size(), n);
    }

    #[test]
    fn at_succeeds_inside_shape(shape in shape_strategy(), seed in any::<u64>()) {
        let group = counted_group(&shape);
        let index: Vec<usize> = shape
            .iter()
            .enumerate()
            .map(|(level, &n)| (seed as usize).wrapping_add(level * 7) % n)
            .collect();
        prop_assert!(group.at(&index).is_ok());
    }

    #[test]
    fn at_reports_first_out_of_range_level(
        shape in shape_strategy(),
        bad_level in 0usize..3,
        overshoot in 0usize..5,
    ) {
        let bad_level = bad_level % shape.len();
        let group = counted_group(&shape);
        let mut index = vec![0; shape.len()];
        index[bad_level] = shape[bad_level] + overshoot;

        let err = group.at(&index).unwrap_err();
        prop_assert_eq!(
            err,
            IndexError::IndexOutOfRange {
                level: bad_level,
                index: shape[bad_level] + overshoot,
                size: shape[bad_level],
            }
        );
    }

    #[test]
    fn at_rejects_wrong_arity(shape in shape_strategy()) {
        let group = counted_group(&shape);
        let mut index = vec![0; shape.len()];
        index.push(0);
        let is_mismatch = matches!(
            group.at(&index),
            Err(IndexError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn sum_calls_once_per_tuple(ranges in ranges_strategy()) {
        let expected: usize = ranges.iter().map(IndexRange::size).product();
        let mut calls = 0usize;
        let total = sum(&ranges, |_: &[usize]| {
            calls += 1;
            1.0
        });
        prop_assert_eq!(calls, expected);
        prop_assert_eq!(total.constant(), expected as f64);
        if ranges.iter().any(IndexRange::is_empty) {
            prop_assert!(total.is_zero());
        }
    }

    #[test]
    fn traversal_order_is_stable(ranges in ranges_strategy()) {
        let mut first = Vec::new();
        for_each(&ranges, |index: &[usize]| first.push(index.to_vec()));
        let mut second = Vec::new();
        for_each(&ranges, |index: &[usize]| second.push(index.to_vec()));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, cartesian_product(&ranges));
    }

    #[test]
    fn traversal_is_lexicographic(ranges in ranges_strategy()) {
        let mut visited = Vec::new();
        for_each(&ranges, |index: &[usize]| visited.push(index.to_vec()));
        prop_assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn full_traversal_touches_every_leaf_once() {
    let group = counted_group(&[3, 4]);
    let mut seen = HashSet::new();
    for_each(&[indices(3), indices(4)], |index: &[usize]| {
        seen.insert(group.at(index).unwrap());
    });
    assert_eq!(seen.len(), 12);
    assert_eq!(seen, group.handles().into_iter().collect());
}
