use super::{height, teardown, Iter, Link, Node};
use crate::cache::AggregateCache;
use crate::map::{Inserted, ScoreMap, ScoreTree};
use crate::util::Entropy;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt;

/// Treap ordered by score, and min-heap ordered by priority.
///
/// A child never has a lower priority than its parent. The priority of a node is drawn
/// from the entropy source once when the node is created, unless the caller gives one.
pub struct Treap<E: Entropy = StdRng> {
    root: Link<f64>,
    len: usize,
    rotations: usize,
    entropy: E,
    cache: AggregateCache,
}

impl Node<f64> {
    pub fn priority(&self) -> f64 {
        self.tag
    }
}

impl Treap<StdRng> {
    /// treap whose priorities come from a seeded `StdRng`
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<E: Entropy> Treap<E> {
    pub fn new(entropy: E) -> Self {
        Treap {
            root: None,
            len: 0,
            rotations: 0,
            entropy,
            cache: AggregateCache::new(),
        }
    }

    pub fn root(&self) -> Option<&Node<f64>> {
        self.root.as_deref()
    }

    /// in-order (ascending score) iterator over the nodes
    pub fn iter(&self) -> Iter<'_, f64> {
        Iter::new(&self.root)
    }

    /// the number of single rotations done since the treap was created
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Insert (id, score) with the given priority instead of a drawn one.
    ///
    /// If a node with the id is met on the way down, both its score and its priority
    /// are overwritten in place.
    pub fn insert_with_priority(&mut self, id: i32, score: i32, priority: f64) -> Inserted {
        self.insert_inner(id, score, Some(priority))
    }

    fn insert_inner(&mut self, id: i32, score: i32, priority: Option<f64>) -> Inserted {
        self.cache.invalidate();

        let mut inserted = Inserted::New;
        let mut state = InsertState {
            id,
            score,
            priority,
            entropy: &mut self.entropy,
            inserted: &mut inserted,
            rotations: &mut self.rotations,
        };
        let root = state.insert_node(self.root.take());
        self.root = Some(root);

        if inserted == Inserted::New {
            self.len += 1;
        }

        inserted
    }
}

/// arguments shared along one recursive insert
struct InsertState<'a, E> {
    id: i32,
    score: i32,
    priority: Option<f64>,
    entropy: &'a mut E,
    inserted: &'a mut Inserted,
    rotations: &'a mut usize,
}

impl<'a, E: Entropy> InsertState<'a, E> {
    fn insert_node(&mut self, link: Link<f64>) -> Box<Node<f64>> {
        let mut node = match link {
            Some(node) => node,
            None => {
                let priority = match self.priority {
                    Some(priority) => priority,
                    None => self.entropy.next_unit(),
                };

                return Box::new(Node::new(self.id, self.score, priority));
            }
        };

        if node.id == self.id {
            *self.inserted = Inserted::Replaced {
                previous: node.score,
            };
            node.score = self.score;

            if let Some(priority) = self.priority {
                node.tag = priority;
                // a raised priority sinks here, a lowered one rises through the checks of the ancestors
                return self.sift_down(node);
            }

            return node;
        }

        if self.score < node.score {
            let left = self.insert_node(node.left.take());
            let rotate = left.tag < node.tag;
            node.left = Some(left);

            if rotate {
                *self.rotations += 1;
                node = Node::rotate_right(node);
            }
        } else {
            let right = self.insert_node(node.right.take());
            let rotate = right.tag < node.tag;
            node.right = Some(right);

            if rotate {
                *self.rotations += 1;
                node = Node::rotate_left(node);
            }
        }

        node
    }

    /// Rotate the node below its lower priority child until neither child is lower.
    fn sift_down(&mut self, node: Box<Node<f64>>) -> Box<Node<f64>> {
        let left = node.left.as_ref().map(|left| left.tag);
        let right = node.right.as_ref().map(|right| right.tag);

        let rotate_right = match (left, right) {
            (Some(left), Some(right)) if left.min(right) < node.tag => left <= right,
            (Some(left), None) if left < node.tag => true,
            (None, Some(right)) if right < node.tag => false,
            _ => return node,
        };

        *self.rotations += 1;

        if rotate_right {
            let mut parent = Node::rotate_right(node);
            parent.right = parent.right.take().map(|child| self.sift_down(child));
            parent
        } else {
            let mut parent = Node::rotate_left(node);
            parent.left = parent.left.take().map(|child| self.sift_down(child));
            parent
        }
    }
}

impl<E: Entropy> ScoreMap for Treap<E> {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.insert_inner(id, score, None)
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

impl<E: Entropy> ScoreTree for Treap<E> {
    fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<E: Entropy> Drop for Treap<E> {
    fn drop(&mut self) {
        teardown(&mut self.root);
    }
}

impl<E: Entropy> fmt::Display for Treap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            writeln!(
                f,
                "id: {}, score: {}, priority: {}",
                node.id, node.score, node.tag
            )?;
        }

        Ok(())
    }
}
