use crate::cache::AggregateCache;
use crate::map::{Inserted, ScoreMap, ScoreTree};
use crate::util::Entropy;
use rand::{rngs::StdRng, SeedableRng};
use std::{cmp::max, fmt};

/// probability of growing a tower by one more level
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Towers stop growing here even if the coin keeps landing heads.
pub const MAX_TOWER_HEIGHT: usize = 128;

type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    id: i32,
    score: i32,
    height: usize,
    next: Link,
}

impl Node {
    fn new(id: i32, score: i32, height: usize) -> Node {
        Node {
            id,
            score,
            height,
            next: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// tower height, fixed when the node is created
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Skip list flattened into a single chain sorted by score.
///
/// Every node carries the height its tower would have in a multi-level skip list. The
/// height of the list is the highest tower.
pub struct SkipList<E: Entropy = StdRng> {
    head: Link,
    len: usize,
    probability: f64,
    entropy: E,
    cache: AggregateCache,
}

impl SkipList<StdRng> {
    /// skip list whose coins come from a seeded `StdRng`
    pub fn with_seed(probability: f64, seed: u64) -> Self {
        Self::new(probability, StdRng::seed_from_u64(seed))
    }
}

impl<E: Entropy> SkipList<E> {
    /// Panics if the probability is not in (0, 1).
    pub fn new(probability: f64, entropy: E) -> Self {
        assert!(
            probability > 0.0 && probability < 1.0,
            "probability should be in (0, 1), but {}",
            probability
        );

        SkipList {
            head: None,
            len: 0,
            probability,
            entropy,
            cache: AggregateCache::new(),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

/// flip coins until the first failure, one level per success
fn tower_height<E: Entropy>(entropy: &mut E, probability: f64) -> usize {
    let mut height = 1;

    while height < MAX_TOWER_HEIGHT && entropy.next_unit() < probability {
        height += 1;
    }

    height
}

impl<E: Entropy> ScoreMap for SkipList<E> {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.cache.invalidate();

        if let Some(head) = self.head.as_mut() {
            if head.id == id {
                let previous = head.score;
                head.score = score;
                return Inserted::Replaced { previous };
            }
        }

        let mut current = &mut self.head;

        // scan past every node whose score does not exceed the new one
        while current.as_ref().map_or(false, |node| node.score <= score) {
            match current {
                Some(node) => {
                    if node.id == id {
                        let previous = node.score;
                        node.score = score;
                        return Inserted::Replaced { previous };
                    }

                    current = &mut node.next;
                }
                None => break,
            }
        }

        let height = tower_height(&mut self.entropy, self.probability);
        let mut new = Box::new(Node::new(id, score, height));
        new.next = current.take();
        *current = Some(new);
        self.len += 1;

        Inserted::New
    }

    fn search_avg(&mut self, id: i32) -> f64 {
        let head = &self.head;
        self.cache.average(id, || {
            Iter {
                current: head.as_deref(),
            }
            .map(|node| (node.id, node.score))
        })
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let mut node = self.head.take();

        while let Some(mut inside) = node {
            node = inside.next.take();
        }

        self.len = 0;
        self.cache.invalidate();
    }
}

impl<E: Entropy> ScoreTree for SkipList<E> {
    fn height(&self) -> usize {
        self.iter().fold(0, |result, node| max(result, node.height))
    }
}

impl<E: Entropy> Drop for SkipList<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E: Entropy> fmt::Display for SkipList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            writeln!(
                f,
                "id: {}, score: {}, height: {}",
                node.id, node.score, node.height
            )?;
        }

        Ok(())
    }
}

/// iterator over the chain from the head
pub struct Iter<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();

        Some(node)
    }
}
