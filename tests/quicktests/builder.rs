use balanced_bst::{build_balanced, BalancedBuilder, Strategy};

use crate::common::init_test_logging;
use crate::preorder;

/// Sorts and dedups `xs` so it satisfies the builder's precondition.
fn sorted_unique<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort();
    xs.dedup();
    xs
}

/// `⌈lg(n + 1)⌉`, the smallest height a tree of `n` nodes can have.
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[test]
fn minimal_heights() {
    assert_eq!(minimal_height(0), 0);
    assert_eq!(minimal_height(1), 1);
    assert_eq!(minimal_height(6), 3);
    assert_eq!(minimal_height(7), 3);
    assert_eq!(minimal_height(8), 4);
    assert_eq!(minimal_height(100), 7);
}

#[quickcheck]
fn round_trip(xs: Vec<i32>) -> bool {
    init_test_logging();
    let xs = sorted_unique(xs);
    let tree = build_balanced(&xs);

    tree.iter().eq(xs.iter())
}

#[quickcheck]
fn height_is_minimal(xs: Vec<u16>) -> bool {
    let xs = sorted_unique(xs);
    let tree = build_balanced(&xs);

    tree.height() == minimal_height(xs.len())
}

#[quickcheck]
fn strategies_agree(xs: Vec<i64>) -> bool {
    let xs = sorted_unique(xs);
    let recursive = BalancedBuilder::new()
        .with_strategy(Strategy::Recursive)
        .build(&xs);
    let iterative = BalancedBuilder::new()
        .with_strategy(Strategy::Iterative)
        .build(&xs);

    preorder(&recursive) == preorder(&iterative)
}

#[quickcheck]
fn sorted_duplicates_are_dropped(xs: Vec<i8>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort();
    let tree = build_balanced(&sorted);

    tree.iter().eq(sorted_unique(xs).iter())
}

#[quickcheck]
fn unsorted_input_is_still_ordered(xs: Vec<i32>) -> bool {
    let tree = build_balanced(&xs);

    tree.iter().eq(sorted_unique(xs).iter())
}
