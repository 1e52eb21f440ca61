use std::collections::HashSet;

use bstree::Tree;

/// Builds a tree by inserting every value, ignoring duplicate refusals.
fn tree_of(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        let _ = tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn build_reproduces_sorted_input(xs: Vec<i16>) -> bool {
        let mut xs = xs;
        xs.sort_unstable();
        xs.dedup();

        let tree = Tree::from_sorted(xs.clone());
        tree.is_balanced() && tree.iter().copied().collect::<Vec<i16>>() == xs
    }
}

quickcheck::quickcheck! {
    fn build_height_is_floor_log2(xs: Vec<i16>) -> bool {
        let mut xs = xs;
        xs.sort_unstable();
        xs.dedup();
        let n = xs.len();

        let expected = match n {
            0 => -1,
            n => 63 - (n as u64).leading_zeros() as isize,
        };
        Tree::from_sorted(xs).height() == expected
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);
        xs.iter().all(|x| tree.find(x).map(|n| &n.value) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
        let tree = tree_of(&xs);

        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i16>, removes: Vec<i16>) -> bool {
        let mut tree = tree_of(&xs);
        for remove in &removes {
            tree.remove(remove);
        }

        let mut still_present: HashSet<_> = xs.into_iter().collect();
        for remove in &removes {
            still_present.remove(remove);
        }

        removes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

fn visited_sorted(
    tree: &Tree<i16>,
    traverse: impl Fn(&Tree<i16>, &mut dyn FnMut(&bstree::Node<i16>)),
) -> Vec<i16> {
    let mut visited = Vec::new();
    traverse(tree, &mut |node| visited.push(node.value));
    visited.sort_unstable();
    visited
}

quickcheck::quickcheck! {
    fn traversals_visit_every_node_exactly_once(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);
        let unique: HashSet<_> = xs.into_iter().collect();
        let mut expected: Vec<i16> = unique.into_iter().collect();
        expected.sort_unstable();

        visited_sorted(&tree, |t, f| t.level_order(f)) == expected
            && visited_sorted(&tree, |t, f| t.pre_order(f)) == expected
            && visited_sorted(&tree, |t, f| t.in_order(f)) == expected
            && visited_sorted(&tree, |t, f| t.post_order(f)) == expected
    }
}

quickcheck::quickcheck! {
    fn in_order_is_always_sorted(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);

        let mut visited = Vec::new();
        tree.in_order(|node| visited.push(node.value));
        visited.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn smallest_and_largest_bracket_the_values(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);

        match (tree.smallest(), tree.largest()) {
            (None, None) => xs.is_empty(),
            (Some(min), Some(max)) => {
                xs.iter().all(|x| min.value <= *x && *x <= max.value)
            }
            _ => false,
        }
    }
}

quickcheck::quickcheck! {
    fn depth_of_found_node_is_bounded_by_height(xs: Vec<i16>, probe: i16) -> bool {
        let tree = tree_of(&xs);

        match tree.find(&probe) {
            Some(node) => {
                let depth = tree.depth(Some(node));
                0 <= depth && depth <= tree.height()
            }
            None => tree.depth(None) == -1,
        }
    }
}
