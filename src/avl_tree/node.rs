use crate::avl_tree::tree::{self, Tree};
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// The children of a node can only be replaced through `link` and `unlink`, both of which
/// leave the cached height consistent with the children the node owns.
pub struct Node<T> {
    item: T,
    height: usize,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Installs both children of `node` and recomputes its height.
    pub fn link(mut node: Box<Self>, left: Tree<T>, right: Tree<T>) -> Box<Self> {
        node.height = cmp::max(tree::height(&left), tree::height(&right)) + 1;
        node.left = left;
        node.right = right;
        node
    }

    /// Detaches both children of `node`, leaving it as a leaf.
    pub fn unlink(mut node: Box<Self>) -> (Box<Self>, Tree<T>, Tree<T>) {
        let left = node.left.take();
        let right = node.right.take();
        node.height = 1;
        (node, left, right)
    }

    pub fn into_item(self) -> T {
        self.item
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }

    // Builds a node with an arbitrary cached height so that checks can be fed corrupted trees.
    #[cfg(test)]
    pub fn forge(item: T, height: usize, left: Tree<T>, right: Tree<T>) -> Box<Self> {
        Box::new(Node {
            item,
            height,
            left,
            right,
        })
    }
}
