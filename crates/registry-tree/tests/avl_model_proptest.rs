//! Model test: arbitrary operation sequences applied to the AVL engine and
//! to `BTreeMap` must observe the same state, and the AVL invariants must
//! hold after every mutation.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use registry_tree::{AvlTree, TraverseOrder};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64, i32),
    Remove(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..64, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0i64..64).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn behaves_like_btree_map(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let inserted = tree.insert(k, v).is_ok();
                    prop_assert_eq!(inserted, !model.contains_key(&k));
                    if inserted {
                        model.insert(k, v);
                    }
                }
                Op::Remove(k) => {
                    prop_assert_eq!(tree.remove(k), model.remove(&k).is_some());
                }
            }
            tree.assert_valid().map_err(|e| TestCaseError::fail(e))?;
        }

        prop_assert_eq!(tree.size(), model.len());
        prop_assert_eq!(tree.keys(), model.keys().copied().collect::<Vec<_>>());
        let values: Vec<i32> = tree.traverse(TraverseOrder::In).into_iter().copied().collect();
        prop_assert_eq!(values, model.values().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.min().copied(), model.values().next().copied());
        prop_assert_eq!(tree.max().copied(), model.values().next_back().copied());
    }
}
