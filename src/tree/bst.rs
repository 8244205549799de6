use super::{height, teardown, Iter, Link, Node};
use crate::cache::AggregateCache;
use crate::map::{Inserted, ScoreMap, ScoreTree};
use std::fmt;

/// Unbalanced binary search tree ordered by score.
///
/// The descent compares scores, while the id is only used to overwrite a node met on the
/// way down. Records with an equal score go to the right.
#[derive(Default)]
pub struct BST {
    root: Link<()>,
    len: usize,
    cache: AggregateCache,
}

impl BST {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node<()>> {
        self.root.as_deref()
    }

    /// in-order (ascending score) iterator over the nodes
    pub fn iter(&self) -> Iter<'_, ()> {
        Iter::new(&self.root)
    }
}

impl ScoreMap for BST {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.cache.invalidate();

        let mut current = &mut self.root;

        loop {
            match current {
                Some(node) => {
                    if node.id == id {
                        let previous = node.score;
                        node.score = score;
                        return Inserted::Replaced { previous };
                    }

                    current = if score < node.score {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
                None => {
                    *current = Some(Box::new(Node::new(id, score, ())));
                    self.len += 1;
                    return Inserted::New;
                }
            }
        }
    }

    fn search_avg(&mut self, id: i32) -> f64 {
        let root = &self.root;
        self.cache
            .average(id, || Iter::new(root).map(|node| (node.id, node.score)))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        teardown(&mut self.root);
        self.len = 0;
        self.cache.invalidate();
    }
}

impl ScoreTree for BST {
    fn height(&self) -> usize {
        height(&self.root)
    }
}

impl Drop for BST {
    fn drop(&mut self) {
        teardown(&mut self.root);
    }
}

impl fmt::Display for BST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            writeln!(f, "id: {}, score: {}", node.id, node.score)?;
        }

        Ok(())
    }
}
