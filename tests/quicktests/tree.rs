use avl::{NaturalOrder, Reverse, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a counted `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Delete(x) => {
                let expected = match counts.get_mut(x) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(x);
                        }
                        Some(x.clone())
                    }
                    None => None,
                };
                assert_eq!(tree.delete(x), expected);
            }
            Op::PopMax => {
                let expected = counts.keys().next_back().cloned();
                if let Some(max) = &expected {
                    let count = counts.get_mut(max).map(|c| {
                        *c -= 1;
                        *c
                    });
                    if count == Some(0) {
                        counts.remove(max);
                    }
                }
                assert_eq!(tree.pop_max(), expected);
            }
        }
    }
}

fn flatten<T: Clone>(counts: &BTreeMap<T, usize>) -> Vec<T> {
    counts
        .iter()
        .flat_map(|(value, count)| std::iter::repeat(value.clone()).take(*count))
        .collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        tree.check_invariants().is_ok()
            && tree.iter().cloned().collect::<Vec<_>>() == flatten(&counts)
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable();

        tree.iter().copied().eq(sorted.iter().copied())
            && tree.in_order_recursive(None).copied().eq(sorted.into_iter())
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.delete(delete).is_some() {}
        }

        let deleted: HashSet<_> = deletes.iter().collect();
        let still_present: Vec<_> = xs.iter().filter(|x| !deleted.contains(x)).collect();

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.len() == still_present.len()
            && tree.check_invariants().is_ok()
    }
}

quickcheck::quickcheck! {
    fn reversed_pops_largest_first(xs: Vec<i16>) -> bool {
        let queue: Tree<_, _> = {
            let mut queue = Tree::with_comparator(Reverse(NaturalOrder));
            queue.extend(xs.iter().copied());
            queue
        };
        let mut expected = xs;
        expected.sort_unstable_by(|a, b| b.cmp(a));

        queue.into_sorted_vec() == expected
    }
}
