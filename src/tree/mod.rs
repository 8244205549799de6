pub mod avl_tree;
pub mod bst;
pub mod treap;

pub use avl_tree::{AVLTree, AVLTreeBF3};
pub use bst::BST;
pub use treap::Treap;

use std::cmp::max;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A record of a binary tree ordered by score.
///
/// `tag` is the per-structure bookkeeping: `()` for BST, the height for
/// AVL trees and the priority for treaps.
#[derive(Debug)]
pub struct Node<T> {
    id: i32,
    score: i32,
    tag: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(id: i32, score: i32, tag: T) -> Node<T> {
        Node {
            id,
            score,
            tag,
            left: None,
            right: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// rotate left the node
    ///
    /// Change Parent-Right Child to Left Child-Parent, then return new parent(old right child).
    /// A node without right child is returned as it is.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = match node.right.take() {
            Some(right) => right,
            None => return node,
        };
        node.right = new_parent.left.take();
        new_parent.left = Some(node);

        new_parent
    }

    /// rotate right the node
    ///
    /// Change Left Child-Parent to Parent-Right Child, then return new parent(old left child).
    /// A node without left child is returned as it is.
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = match node.left.take() {
            Some(left) => left,
            None => return node,
        };
        node.left = new_parent.right.take();
        new_parent.right = Some(node);

        new_parent
    }
}

/// in-order iterator over the nodes of a tree
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(root.as_deref());
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(inside) = node {
            self.stack.push(inside);
            node = inside.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());

        Some(node)
    }
}

/// max depth of the tree, walking with an explicit stack since score ties can
/// chain nodes far deeper than the call stack allows
fn height<T>(root: &Link<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
    let mut result = 0;

    if let Some(node) = root {
        stack.push((node, 1));
    }

    while let Some((node, depth)) = stack.pop() {
        result = max(result, depth);

        if let Some(left) = &node.left {
            stack.push((left, depth + 1));
        }

        if let Some(right) = &node.right {
            stack.push((right, depth + 1));
        }
    }

    result
}

/// free every node of the tree without recursion
///
/// Each node is detached from its children before it is dropped, so the
/// drop of a single node never recurses.
fn teardown<T>(root: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
