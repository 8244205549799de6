//! Walk through a few inserts on every structure, printing it after each step.

use ordbench::{
    eval::{heights_of, Structure},
    map::{ScoreMap, ScoreTree},
    skiplist::{SkipList, DEFAULT_PROBABILITY},
    tree::{AVLTree, Treap, BST},
    util::random::workload,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut bst = BST::new();
    for (id, score) in [(3, 100), (2, 60), (1, 70), (5, 40), (4, 70)] {
        bst.insert(id, score);
        println!("BST after insert ({},{}):\n{}", id, score, bst);
        println!("BST Height: {}\n", bst.height());
    }

    let mut avl: AVLTree = AVLTree::new();
    for (id, score) in [(1, 100), (2, 60), (3, 70), (4, 40), (5, 70)] {
        avl.insert(id, score);
        println!("AVL after insert ({},{}):\n{}", id, score, avl);
        println!("AVL Height: {}, rotations: {}\n", avl.height(), avl.rotations());
    }

    let mut treap = Treap::with_seed(0);
    for (id, score, priority) in [
        (3, 100, 0.9),
        (2, 60, 0.5),
        (1, 70, 0.3),
        (5, 60, 0.2),
        (4, 80, 0.1),
    ] {
        treap.insert_with_priority(id, score, priority);
        println!("Treap after insert ({},{})[{}]:\n{}", id, score, priority, treap);
        println!("Treap Height: {}\n", treap.height());
    }

    let mut skip_list = SkipList::with_seed(DEFAULT_PROBABILITY, 0);
    for (id, score) in [(1, 100), (2, 60), (3, 70), (4, 80), (5, 60), (6, 80), (7, 90)] {
        skip_list.insert(id, score);
        println!("SkipList after insert ({},{}):\n{}", id, score, skip_list);
        println!("Skip List Height: {}\n", skip_list.height());
    }

    let structures = [
        Structure::Bst,
        Structure::Avl,
        Structure::AvlBf3,
        Structure::Treap,
        Structure::SkipList(DEFAULT_PROBABILITY),
    ];
    let data = workload(&mut StdRng::seed_from_u64(123456), 1 << 12);

    println!("Heights after {} random inserts:", data.len());
    for (structure, height) in structures.iter().zip(heights_of(&structures, &data, 0)) {
        println!("  {}: {}", structure, height);
    }
}
