use recursive_bst::Tree;

use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

/// Renders values the way a tree does.
fn render<'a>(values: impl IntoIterator<Item = &'a i8>) -> String {
    values
        .into_iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len()
        && set.iter().all(|x| tree.contains(x))
        && tree.render() == render(&set)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn render_is_sorted_and_unique(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.size() == set.len() && tree.render() == render(&set)
}

#[quickcheck]
fn duplicate_insert_is_rejected(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let size = tree.size();

    xs.iter().all(|x| !tree.insert(*x)) && tree.size() == size
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // We may have inserted the same value multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn remove_absent_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != absent).collect();
    let before = tree.clone();

    !tree.remove(&absent) && tree == before
}

#[quickcheck]
fn remove_twice_is_a_no_op(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.remove(&x);
    let once = tree.clone();

    !tree.remove(&x) && tree == once
}
