use balanced_bst::Tree;

use std::collections::BTreeSet;

use crate::common::init_test_logging;
use crate::preorder;
use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// the tree iterates the same values as the set, at every step.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::InsertIterative(x) => {
                tree.insert_iterative(x.clone());
                set.insert(x.clone());
            }
            Op::Iter => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    tree.len() == set.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_test_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.into_iter().collect();
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn iterative_insert_builds_the_same_tree(xs: Vec<i32>) -> bool {
    let mut recursive = Tree::new();
    let mut iterative = Tree::new();
    for x in &xs {
        recursive.insert(*x);
        iterative.insert_iterative(*x);
    }

    preorder(&recursive) == preorder(&iterative) && recursive.height() == iterative.height()
}

#[quickcheck]
fn clone_keeps_shape(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.into_iter().collect();

    preorder(&tree.clone()) == preorder(&tree)
}
