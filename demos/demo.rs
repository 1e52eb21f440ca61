//! Demo driver: builds a tree from random deduplicated integers, prints the
//! four traversal orders, knocks the tree out of balance, and rebalances it.
//!
//! Run with `cargo run --example demo`.

use std::collections::BTreeSet;

use bstree::Tree;
use rand::Rng;

fn print_orders(tree: &Tree<u32>) {
    let mut order = Vec::new();

    tree.level_order(|node| order.push(node.value));
    println!("  level-order: {:?}", order);
    order.clear();

    tree.pre_order(|node| order.push(node.value));
    println!("  pre-order:   {:?}", order);
    order.clear();

    tree.in_order(|node| order.push(node.value));
    println!("  in-order:    {:?}", order);
    order.clear();

    tree.post_order(|node| order.push(node.value));
    println!("  post-order:  {:?}", order);
}

fn print_summary(tree: &Tree<u32>) {
    println!(
        "  {} values, height {}, balanced: {}",
        tree.len(),
        tree.height(),
        tree.is_balanced()
    );
}

fn main() {
    let mut rng = rand::thread_rng();

    // A `BTreeSet` deduplicates and sorts for us.
    let values: BTreeSet<u32> = (0..15).map(|_| rng.gen_range(0..100)).collect();
    let mut tree = Tree::from_sorted(values.into_iter().collect());

    println!("built from random values < 100:");
    print_summary(&tree);
    print_orders(&tree);

    // Appending ascending values beyond the current maximum grows a chain
    // off the rightmost node.
    let max = tree.largest().map(|node| node.value).unwrap_or(0);
    for value in max + 1..=max + 8 {
        if let Err(err) = tree.insert(value) {
            println!("  insert {} refused: {}", value, err);
        }
    }

    println!("after appending 8 ascending values:");
    print_summary(&tree);

    tree.rebalance();

    println!("after rebalance:");
    print_summary(&tree);
    print_orders(&tree);
}
