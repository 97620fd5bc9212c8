use rebuild_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
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
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.iter().eq(set.iter()) && tree.len() == set.len()
    }

    fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree, &mut BTreeSet::new());

        let values: Vec<_> = tree.iter().collect();
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = Tree::construct(xs.clone());

        xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.height(x).is_none() && tree.depth(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.extend(xs.iter().copied());
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }

    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree = Tree::construct(xs.clone());
        let before: Vec<_> = tree.iter().copied().collect();

        xs.iter().all(|x| !tree.insert(*x)) && tree.iter().copied().eq(before)
    }

    fn missing_delete_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = Tree::construct(xs.iter().copied().filter(|v| *v != x));
        let before: Vec<_> = tree.iter().copied().collect();

        !tree.delete(&x) && tree.iter().copied().eq(before)
    }

    fn rebalance_preserves_values(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree, &mut BTreeSet::new());
        let before: Vec<_> = tree.iter().copied().collect();

        tree.rebalance();
        tree.is_balanced() && tree.iter().copied().eq(before)
    }

    fn root_depth_is_zero(xs: Vec<i8>) -> bool {
        let tree = Tree::construct(xs);

        tree.root().map_or(true, |root| tree.depth(root.value()) == Some(0))
    }

    fn leaves_have_height_zero(xs: Vec<i8>) -> bool {
        let tree = Tree::construct(xs);

        tree.pre_order()
            .filter(|node| node.is_leaf())
            .all(|leaf| tree.height(leaf.value()) == Some(0))
    }
}
