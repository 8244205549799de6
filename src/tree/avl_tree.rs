use super::{teardown, Iter, Link, Node};
use crate::cache::AggregateCache;
use crate::map::{Inserted, ScoreMap, ScoreTree};
use std::{cmp::max, fmt};

/// AVL tree ordered by score.
///
/// A node is rotated once the difference of the heights of its childs exceeds `MAX_FACTOR`.
/// `MAX_FACTOR = 1` is the strict AVL tree, larger values trade height for fewer rotations.
pub struct AVLTree<const MAX_FACTOR: isize = 1> {
    root: Link<usize>,
    len: usize,
    rotations: usize,
    cache: AggregateCache,
}

/// AVL tree which tolerates |balance factor| <= 3
pub type AVLTreeBF3 = AVLTree<3>;

fn node_height(link: &Link<usize>) -> usize {
    if let Some(node) = link {
        node.tag
    } else {
        0
    }
}

impl Node<usize> {
    /// height of the subtree rooted at this node, a leaf has height 1
    pub fn height(&self) -> usize {
        self.tag
    }

    /// renew the height of the node from the childs
    fn renew_height(&mut self) {
        self.tag = max(node_height(&self.left), node_height(&self.right)) + 1;
    }

    /// get difference of the heights from the childs
    pub fn get_factor(&self) -> isize {
        node_height(&self.left) as isize - node_height(&self.right) as isize
    }

    fn rotate_left_renew(node: Box<Node<usize>>) -> Box<Node<usize>> {
        let mut new_parent = Node::rotate_left(node);

        if let Some(old_parent) = new_parent.left.as_mut() {
            old_parent.renew_height();
        }
        new_parent.renew_height();

        new_parent
    }

    fn rotate_right_renew(node: Box<Node<usize>>) -> Box<Node<usize>> {
        let mut new_parent = Node::rotate_right(node);

        if let Some(old_parent) = new_parent.right.as_mut() {
            old_parent.renew_height();
        }
        new_parent.renew_height();

        new_parent
    }
}

impl<const MAX_FACTOR: isize> Default for AVLTree<MAX_FACTOR> {
    fn default() -> Self {
        AVLTree {
            root: None,
            len: 0,
            rotations: 0,
            cache: AggregateCache::new(),
        }
    }
}

impl<const MAX_FACTOR: isize> AVLTree<MAX_FACTOR> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node<usize>> {
        self.root.as_deref()
    }

    /// in-order (ascending score) iterator over the nodes
    pub fn iter(&self) -> Iter<'_, usize> {
        Iter::new(&self.root)
    }

    /// the number of single rotations done since the tree was created
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    pub fn get_height(&self) -> usize {
        node_height(&self.root)
    }

    fn insert_node(
        link: Link<usize>,
        id: i32,
        score: i32,
        inserted: &mut Inserted,
        rotations: &mut usize,
    ) -> Box<Node<usize>> {
        let mut node = match link {
            Some(node) => node,
            None => return Box::new(Node::new(id, score, 1)),
        };

        if node.id == id {
            *inserted = Inserted::Replaced {
                previous: node.score,
            };
            node.score = score;
            return node;
        }

        if score < node.score {
            node.left = Some(Self::insert_node(
                node.left.take(),
                id,
                score,
                inserted,
                rotations,
            ));
        } else {
            node.right = Some(Self::insert_node(
                node.right.take(),
                id,
                score,
                inserted,
                rotations,
            ));
        }

        node.renew_height();
        Self::rebalance(node, rotations)
    }

    fn rebalance(mut node: Box<Node<usize>>, rotations: &mut usize) -> Box<Node<usize>> {
        let factor = node.get_factor();

        if factor > MAX_FACTOR {
            let child_factor = node.left.as_ref().map_or(0, |left| left.get_factor());

            if child_factor < 0 {
                node.left = node.left.take().map(Node::rotate_left_renew);
                *rotations += 1;
            }

            *rotations += 1;
            return Node::rotate_right_renew(node);
        }

        if factor < -MAX_FACTOR {
            let child_factor = node.right.as_ref().map_or(0, |right| right.get_factor());

            if child_factor > 0 {
                node.right = node.right.take().map(Node::rotate_right_renew);
                *rotations += 1;
            }

            *rotations += 1;
            return Node::rotate_left_renew(node);
        }

        node
    }
}

impl<const MAX_FACTOR: isize> ScoreMap for AVLTree<MAX_FACTOR> {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.cache.invalidate();

        let mut inserted = Inserted::New;
        let root = Self::insert_node(
            self.root.take(),
            id,
            score,
            &mut inserted,
            &mut self.rotations,
        );
        self.root = Some(root);

        if inserted == Inserted::New {
            self.len += 1;
        }

        inserted
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

impl<const MAX_FACTOR: isize> ScoreTree for AVLTree<MAX_FACTOR> {
    fn height(&self) -> usize {
        self.get_height()
    }
}

impl<const MAX_FACTOR: isize> Drop for AVLTree<MAX_FACTOR> {
    fn drop(&mut self) {
        teardown(&mut self.root);
    }
}

impl<const MAX_FACTOR: isize> fmt::Display for AVLTree<MAX_FACTOR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            writeln!(
                f,
                "id: {}, score: {}, height: {}",
                node.id, node.score, node.tag
            )?;
        }

        Ok(())
    }
}
