use crate::map::ScoreTree;
use crate::skiplist::SkipList;
use crate::tree::{AVLTree, AVLTreeBF3, Treap, BST};
use std::fmt;

/// The structures compared by the experiments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Structure {
    Bst,
    Avl,
    AvlBf3,
    Treap,
    /// skip list growing towers with the given probability
    SkipList(f64),
}

impl Structure {
    /// Build an empty instance. `seed` feeds the randomized structures.
    pub fn build(&self, seed: u64) -> Box<dyn ScoreTree> {
        match *self {
            Structure::Bst => Box::new(BST::new()),
            Structure::Avl => Box::new(AVLTree::<1>::new()),
            Structure::AvlBf3 => Box::new(AVLTreeBF3::new()),
            Structure::Treap => Box::new(Treap::with_seed(seed)),
            Structure::SkipList(probability) => {
                Box::new(SkipList::with_seed(probability, seed))
            }
        }
    }
}

/// column prefix used in the CSV headers
impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Bst => write!(f, "BST"),
            Structure::Avl => write!(f, "AVL"),
            Structure::AvlBf3 => write!(f, "AVL_BF3"),
            Structure::Treap => write!(f, "Treap"),
            Structure::SkipList(probability) => write!(f, "SkipList_p{}", probability),
        }
    }
}
