use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height(),
    }
}

fn rotate_left<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating left at height {}", node.height());
    let (node, left, right) = Node::unlink(node);
    let child = match right {
        Some(child) => child,
        None => unreachable!(),
    };
    let (child, inner, outer) = Node::unlink(child);
    let node = Node::link(node, left, inner);
    Node::link(child, Some(node), outer)
}

fn rotate_right<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating right at height {}", node.height());
    let (node, left, right) = Node::unlink(node);
    let child = match left {
        Some(child) => child,
        None => unreachable!(),
    };
    let (child, outer, inner) = Node::unlink(child);
    let node = Node::link(node, inner, right);
    Node::link(child, outer, Some(node))
}

// precondition: both children of the node are valid avl trees and the balance of the node is
// within [-2, 2]
fn balance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    match node.balance() {
        2 => {
            let (node, left, right) = Node::unlink(node);
            let left = left.map(|child| {
                if child.balance() <= 0 {
                    rotate_left(child)
                } else {
                    child
                }
            });
            rotate_right(Node::link(node, left, right))
        },
        -2 => {
            let (node, left, right) = Node::unlink(node);
            let right = right.map(|child| {
                if child.balance() >= 0 {
                    rotate_right(child)
                } else {
                    child
                }
            });
            rotate_left(Node::link(node, left, right))
        },
        _ => node,
    }
}

fn insert_node<T>(tree: Tree<T>, item: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let node = match tree {
        Some(node) => node,
        None => return (Node::new(item), true),
    };

    let (node, left, right) = Node::unlink(node);
    let (left, right, inserted) = match item.cmp(node.item()) {
        Ordering::Less => {
            let (left, inserted) = insert_node(left, item);
            (Some(left), right, inserted)
        },
        Ordering::Greater => {
            let (right, inserted) = insert_node(right, item);
            (left, Some(right), inserted)
        },
        Ordering::Equal => (left, right, false),
    };

    (balance(Node::link(node, left, right)), inserted)
}

/// Inserts `item` into the tree and rebalances every ancestor on the way back up. Returns
/// `false` and keeps the stored item if an equal item is already present.
pub fn insert<T>(tree: &mut Tree<T>, item: T) -> bool
where
    T: Ord,
{
    let (root, inserted) = insert_node(tree.take(), item);
    *tree = Some(root);
    inserted
}

pub fn contains<T>(tree: &Tree<T>, item: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match item.cmp(node.item()) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => curr = node.right(),
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left() {
            curr = left_node;
        }
        curr.item()
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right() {
            curr = right_node;
        }
        curr.item()
    })
}

#[cfg(test)]
mod tests {
    use super::{balance, contains, height, insert, max, min, Tree};
    use crate::avl_tree::node::Node;

    fn items<T: Clone>(tree: &Tree<T>, ret: &mut Vec<T>) {
        if let Some(ref node) = tree {
            items(node.left(), ret);
            ret.push(node.item().clone());
            items(node.right(), ret);
        }
    }

    fn root_item<T: Copy>(tree: &Tree<T>) -> Option<T> {
        tree.as_ref().map(|node| *node.item())
    }

    fn child_items<T: Copy>(tree: &Tree<T>) -> (Option<T>, Option<T>) {
        match tree {
            Some(ref node) => (root_item(node.left()), root_item(node.right())),
            None => (None, None),
        }
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_insert_ascending_rotates_left() {
        let mut tree = None;
        for item in 1..=3 {
            assert!(insert(&mut tree, item));
        }
        assert_eq!(root_item(&tree), Some(2));
        assert_eq!(child_items(&tree), (Some(1), Some(3)));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_insert_descending_rotates_right() {
        let mut tree = None;
        for item in (1..=3).rev() {
            insert(&mut tree, item);
        }
        assert_eq!(root_item(&tree), Some(2));
        assert_eq!(child_items(&tree), (Some(1), Some(3)));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_insert_left_right_case() {
        let mut tree = None;
        for item in &[3, 1, 2] {
            insert(&mut tree, *item);
        }
        assert_eq!(root_item(&tree), Some(2));
        assert_eq!(child_items(&tree), (Some(1), Some(3)));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_insert_right_left_case() {
        let mut tree = None;
        for item in &[1, 3, 2] {
            insert(&mut tree, *item);
        }
        assert_eq!(root_item(&tree), Some(2));
        assert_eq!(child_items(&tree), (Some(1), Some(3)));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = None;
        assert!(insert(&mut tree, 1));
        assert!(insert(&mut tree, 2));
        assert!(!insert(&mut tree, 1));
        assert_eq!(height(&tree), 2);

        let mut ret = Vec::new();
        items(&tree, &mut ret);
        assert_eq!(ret, vec![1, 2]);
    }

    #[test]
    fn test_balance_balanced_inner_child() {
        // 3 with a left child 1 whose children 0 and 2 leave it balanced.
        let left = Node::link(Node::new(1), Some(Node::new(0)), Some(Node::new(2)));
        let node = Node::link(Node::new(3), Some(left), None);
        assert_eq!(node.balance(), 2);

        let tree = Some(balance(node));
        assert_eq!(root_item(&tree), Some(2));
        assert_eq!(child_items(&tree), (Some(1), Some(3)));
        assert_eq!(height(&tree), 3);

        let mut ret = Vec::new();
        items(&tree, &mut ret);
        assert_eq!(ret, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_balance_noop() {
        let node = Node::link(Node::new(1), Some(Node::new(0)), None);
        let tree = Some(balance(node));
        assert_eq!(root_item(&tree), Some(1));
        assert_eq!(child_items(&tree), (Some(0), None));
    }

    #[test]
    fn test_contains() {
        let mut tree = None;
        assert!(!contains(&tree, &1));
        for item in &[5, 3, 8, 1] {
            insert(&mut tree, *item);
        }
        assert!(contains(&tree, &1));
        assert!(contains(&tree, &8));
        assert!(!contains(&tree, &4));
        assert!(!contains(&tree, &9));
    }

    #[test]
    fn test_min_max() {
        let mut tree = None;
        assert_eq!(min(&tree), None);
        assert_eq!(max(&tree), None);
        for item in &[5, 3, 8, 1] {
            insert(&mut tree, *item);
        }
        assert_eq!(min(&tree), Some(&1));
        assert_eq!(max(&tree), Some(&8));
    }
}
