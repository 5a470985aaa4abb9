use bst::{DuplicatePolicy, Order, Tree};

use std::collections::HashSet;

use crate::SmallKey;

fn build(xs: &[SmallKey]) -> Tree<SmallKey> {
    let mut tree = Tree::new();
    tree.bulk_load(xs.iter().copied());
    tree
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = Tree::new();
        tree.bulk_load(xs);

        tree.keys(Order::Inorder).windows(2).all(|w| w[0] < w[1])
    }

    fn inorder_is_non_decreasing_with_duplicates(xs: Vec<SmallKey>) -> bool {
        let mut tree: Tree<SmallKey> = Tree::with_policy(DuplicatePolicy::Right);
        tree.bulk_load(xs.iter().copied());

        let mut sorted = xs;
        sorted.sort();
        tree.keys(Order::Inorder) == sorted
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = Tree::new();
        tree.bulk_load(xs.iter().copied());

        xs.iter().all(|x| tree.search(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = Tree::new();
        tree.bulk_load(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x))
    }

    fn duplicates_change_nothing(xs: Vec<SmallKey>, again: Vec<SmallKey>) -> bool {
        let tree = build(&xs);
        let mut repeated = build(&xs);
        let len = repeated.len();
        // Re-insert only keys that are already present.
        repeated.bulk_load(again.into_iter().filter(|k| xs.contains(k)));

        repeated.len() == len
            && Order::ALL
                .iter()
                .all(|&order| tree.keys(order) == repeated.keys(order))
    }

    fn preorder_replay_rebuilds_the_same_shape(xs: Vec<SmallKey>) -> bool {
        let tree = build(&xs);
        let replayed = build(&tree.keys(Order::Preorder));

        Order::ALL
            .iter()
            .all(|&order| tree.keys(order) == replayed.keys(order))
            && tree.height() == replayed.height()
    }

    fn every_order_visits_every_node_once(xs: Vec<SmallKey>) -> bool {
        let tree = build(&xs);
        let mut expected = tree.keys(Order::Inorder);
        expected.sort();

        Order::ALL.iter().all(|&order| {
            let mut keys = tree.keys(order);
            keys.sort();
            keys == expected && keys.len() == tree.len()
        })
    }

    fn inorder_is_independent_of_insertion_order(xs: Vec<SmallKey>) -> bool {
        let mut reversed = xs.clone();
        reversed.reverse();

        build(&xs).keys(Order::Inorder) == build(&reversed).keys(Order::Inorder)
    }
}
