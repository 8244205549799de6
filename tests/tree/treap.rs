use crate::util::{
    stress_distinct_ids,
    tree::{check_heap, is_sorted},
};
use ordbench::{
    map::{Inserted, ScoreMap, ScoreTree, NOT_FOUND},
    tree::Treap,
    util::Replay,
};
use rand::{prelude::SliceRandom, rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_given_priorities() {
    let mut treap = Treap::with_seed(0);

    /* make treap like this (score(id)[priority])
     *
     *               80(4)[0.1]
     *              /          \
     *        60(5)[0.2]    100(3)[0.9]
     *        /        \
     *  60(2)[0.5]  70(1)[0.3]
     */
    for (id, score, priority) in [
        (3, 100, 0.9),
        (2, 60, 0.5),
        (1, 70, 0.3),
        (5, 60, 0.2),
        (4, 80, 0.1),
    ] {
        assert_eq!(treap.insert_with_priority(id, score, priority), Inserted::New);
        check_heap(treap.root());
    }

    assert_eq!(treap.root().map(|node| node.id()), Some(4));
    assert_eq!(
        treap.iter().map(|node| node.id()).collect::<Vec<_>>(),
        vec![2, 5, 1, 4, 3]
    );
    assert_eq!(
        treap.iter().map(|node| node.score()).collect::<Vec<_>>(),
        vec![60, 60, 70, 80, 100]
    );
    assert_eq!(treap.height(), 3);
    assert_eq!(treap.rotations(), 8);
}

#[test]
fn test_overwrite_with_priority() {
    let mut treap = Treap::with_seed(0);

    treap.insert_with_priority(1, 50, 0.1);
    treap.insert_with_priority(2, 70, 0.4);

    assert_eq!(
        treap.insert_with_priority(2, 80, 0.3),
        Inserted::Replaced { previous: 70 }
    );

    let node = treap.iter().find(|node| node.id() == 2).unwrap();
    assert_eq!(node.score(), 80);
    assert_eq!(node.priority(), 0.3);
    assert_eq!(treap.len(), 2);
    assert_eq!(treap.search_avg(2), 80.0);
}

#[test]
fn test_raised_priority_sinks() {
    let mut treap = Treap::with_seed(0);

    treap.insert_with_priority(1, 50, 0.1);
    treap.insert_with_priority(2, 70, 0.4);
    assert_eq!(treap.root().map(|node| node.id()), Some(1));
    let rotations = treap.rotations();

    // the root now has a higher priority than its only child
    assert_eq!(
        treap.insert_with_priority(1, 50, 0.9),
        Inserted::Replaced { previous: 50 }
    );

    check_heap(treap.root());
    assert_eq!(treap.root().map(|node| node.id()), Some(2));
    assert_eq!(treap.rotations(), rotations + 1);
    assert_eq!(
        treap.iter().map(|node| node.id()).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(treap.len(), 2);
}

#[test]
fn test_priority_overwrite_keeps_heap() {
    let mut treap = Treap::with_seed(0);

    for (id, score, priority) in [
        (1, 50, 0.1),
        (2, 30, 0.2),
        (3, 70, 0.3),
        (4, 20, 0.4),
        (5, 40, 0.5),
        (6, 60, 0.6),
        (7, 80, 0.7),
    ] {
        treap.insert_with_priority(id, score, priority);
        check_heap(treap.root());
    }

    // sink the root below both subtrees, then lift a leaf back to the top
    treap.insert_with_priority(1, 50, 0.95);
    check_heap(treap.root());
    assert_eq!(treap.root().map(|node| node.id()), Some(2));

    treap.insert_with_priority(7, 80, 0.01);
    check_heap(treap.root());
    assert_eq!(treap.root().map(|node| node.id()), Some(7));

    assert_eq!(
        treap.iter().map(|node| node.score()).collect::<Vec<_>>(),
        vec![20, 30, 40, 50, 60, 70, 80]
    );
    assert_eq!(treap.len(), 7);
}

#[test]
fn test_injected_entropy() {
    let mut treap = Treap::new(Replay::new(vec![0.5, 0.25]));

    treap.insert(1, 10); // draws 0.5
    treap.insert(2, 20); // draws 0.25 and climbs above (1, 10)

    assert_eq!(treap.root().map(|node| node.id()), Some(2));
    assert_eq!(treap.rotations(), 1);

    // an overwrite keeps the priority and draws nothing
    assert_eq!(treap.insert(2, 30), Inserted::Replaced { previous: 20 });
    assert_eq!(treap.root().map(|node| node.priority()), Some(0.25));

    treap.insert(3, 40); // draws 0.5 again
    let node = treap.iter().find(|node| node.id() == 3).unwrap();
    assert_eq!(node.priority(), 0.5);

    check_heap(treap.root());
}

#[test]
fn test_heap_and_order_on_random_workload() {
    let mut rng = StdRng::seed_from_u64(123456);
    let mut treap = Treap::with_seed(42);

    let mut ids: Vec<i32> = (1..=20_000).collect();
    ids.shuffle(&mut rng);

    for id in ids {
        treap.insert(id, rng.gen_range(0..=100));
    }

    check_heap(treap.root());

    let scores: Vec<i32> = treap.iter().map(|node| node.score()).collect();
    assert!(is_sorted(&scores));
    assert_eq!(scores.len(), 20_000);

    for node in treap.iter() {
        assert!((0.0..1.0).contains(&node.priority()));
    }
}

#[test]
fn test_same_seed_same_shape() {
    let mut first = Treap::with_seed(9);
    let mut second = Treap::with_seed(9);

    for i in 0..1000 {
        first.insert(i, (i * 37) % 101);
        second.insert(i, (i * 37) % 101);
    }

    assert_eq!(first.height(), second.height());
    assert_eq!(first.rotations(), second.rotations());
    assert_eq!(
        first.iter().map(|node| node.id()).collect::<Vec<_>>(),
        second.iter().map(|node| node.id()).collect::<Vec<_>>()
    );
}

#[test]
fn test_empty_and_clear() {
    let mut treap = Treap::with_seed(0);

    assert_eq!(treap.height(), 0);
    assert_eq!(treap.search_avg(1), NOT_FOUND);

    treap.insert(1, 10);
    treap.insert(2, 20);
    treap.clear();

    assert!(treap.is_empty());
    assert_eq!(treap.height(), 0);
    assert_eq!(treap.search_avg(1), NOT_FOUND);
}

#[test]
fn test_display() {
    let mut treap = Treap::with_seed(0);
    treap.insert_with_priority(1, 10, 0.5);
    treap.insert_with_priority(2, 20, 0.25);

    assert_eq!(
        format!("{}", treap),
        "id: 1, score: 10, priority: 0.5\nid: 2, score: 20, priority: 0.25\n"
    );
}

#[test]
fn stress_treap() {
    stress_distinct_ids(&mut Treap::with_seed(5), 100_000, 4);
}
