use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Tree};
use crate::avl_tree::{Error, Result};
use std::cmp;
use std::fmt;

/// A borrowed view of a subtree that renders its node layout.
///
/// The rendering nests every node as `Node(item=.., height=.., left=.., right=..)` and omits
/// absent children. It is meant for debugging and is not a stable format.
pub struct Structure<'a, T>
where
    T: 'a,
{
    root: Option<&'a Node<T>>,
}

impl<'a, T> Structure<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Structure {
            root: tree.as_ref().map(|node| &**node),
        }
    }

    fn of(node: &'a Node<T>) -> Self {
        Structure { root: Some(node) }
    }

    /// Returns the item stored at the root of the subtree, or `None` if the subtree is empty.
    pub fn item(&self) -> Option<&'a T> {
        self.root.map(|node| node.item())
    }

    /// Returns the cached height of the root of the subtree, or 0 if the subtree is empty.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |node| node.height())
    }

    /// Returns a view of the left subtree.
    pub fn left(&self) -> Structure<'a, T> {
        match self.root {
            Some(node) => Structure::new(node.left()),
            None => Structure { root: None },
        }
    }

    /// Returns a view of the right subtree.
    pub fn right(&self) -> Structure<'a, T> {
        match self.root {
            Some(node) => Structure::new(node.right()),
            None => Structure { root: None },
        }
    }
}

impl<'a, T> Clone for Structure<'a, T> {
    fn clone(&self) -> Self {
        Structure { root: self.root }
    }
}

impl<'a, T> Copy for Structure<'a, T> {}

fn fmt_node<T>(node: &Node<T>, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Debug,
{
    write!(f, "Node(item={:?}, height={}", node.item(), node.height())?;
    if let Some(ref left) = node.left() {
        write!(f, ", left=")?;
        fmt_node(left, f)?;
    }
    if let Some(ref right) = node.right() {
        write!(f, ", right=")?;
        fmt_node(right, f)?;
    }
    write!(f, ")")
}

impl<'a, T> fmt::Display for Structure<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root {
            Some(node) => fmt_node(node, f),
            None => write!(f, "None"),
        }
    }
}

impl<'a, T> fmt::Debug for Structure<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn is_well_formed<T>(tree: &Tree<T>) -> Result<T> {
    match tree {
        None => Ok(()),
        Some(ref node) => {
            if node.height() == 0 {
                return Err(Error::MalformedNode {
                    subtree: Structure::of(node),
                });
            }
            is_well_formed(node.left())?;
            is_well_formed(node.right())
        },
    }
}

fn is_ordered<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> Result<'a, T>
where
    T: Ord,
{
    let node = match tree {
        None => return Ok(()),
        Some(ref node) => node,
    };

    let above_lower = lower.map_or(true, |lower| node.item() > lower);
    let below_upper = upper.map_or(true, |upper| node.item() < upper);
    if !above_lower || !below_upper {
        return Err(Error::OrderViolation {
            subtree: Structure::of(node),
            lower,
            upper,
        });
    }

    is_ordered(node.left(), lower, Some(node.item()))?;
    is_ordered(node.right(), Some(node.item()), upper)
}

fn has_correct_heights<T>(tree: &Tree<T>) -> Result<T> {
    match tree {
        None => Ok(()),
        Some(ref node) => {
            let expected = cmp::max(tree::height(node.left()), tree::height(node.right())) + 1;
            if node.height() != expected {
                return Err(Error::HeightMismatch {
                    subtree: Structure::of(node),
                    expected,
                    actual: node.height(),
                });
            }
            has_correct_heights(node.left())?;
            has_correct_heights(node.right())
        },
    }
}

fn is_balanced<T>(tree: &Tree<T>) -> Result<T> {
    match tree {
        None => Ok(()),
        Some(ref node) => {
            let balance = node.balance();
            if balance.abs() >= 2 {
                return Err(Error::Imbalance {
                    subtree: Structure::of(node),
                    balance,
                });
            }
            is_balanced(node.left())?;
            is_balanced(node.right())
        },
    }
}

/// Verifies every invariant of an avl tree from scratch, returning the first violation.
///
/// The passes run in a fixed order: well-formedness, binary search tree order, cached
/// heights, then balance.
pub fn check<T>(tree: &Tree<T>) -> Result<T>
where
    T: Ord,
{
    is_well_formed(tree)?;
    is_ordered(tree, None, None)?;
    has_correct_heights(tree)?;
    is_balanced(tree)
}

#[cfg(test)]
mod tests {
    use super::{check, Structure};
    use crate::avl_tree::node::Node;
    use crate::avl_tree::{tree, Error};

    #[test]
    fn test_check_empty() {
        let tree: tree::Tree<u32> = None;
        assert!(check(&tree).is_ok());
    }

    #[test]
    fn test_check_valid() {
        let mut tree = None;
        for item in 0..100 {
            tree::insert(&mut tree, item);
            assert!(check(&tree).is_ok());
        }
    }

    #[test]
    fn test_check_malformed_node() {
        let tree = Some(Node::forge(2, 2, Some(Node::forge(1, 0, None, None)), None));
        match check(&tree) {
            Err(Error::MalformedNode { subtree }) => assert_eq!(subtree.item(), Some(&1)),
            _ => panic!("Expected a malformed node."),
        }
    }

    #[test]
    fn test_check_order_violation() {
        // 4 sits in the left subtree of 3 through 1.
        let left = Node::link(Node::new(1), None, Some(Node::new(4)));
        let tree = Some(Node::link(Node::new(3), Some(left), Some(Node::new(5))));
        match check(&tree) {
            Err(Error::OrderViolation { subtree, lower, upper }) => {
                assert_eq!(subtree.item(), Some(&4));
                assert_eq!(lower, Some(&1));
                assert_eq!(upper, Some(&3));
            },
            _ => panic!("Expected an order violation."),
        }
    }

    #[test]
    fn test_check_duplicate_is_order_violation() {
        let tree = Some(Node::link(Node::new(1), Some(Node::new(1)), None));
        match check(&tree) {
            Err(Error::OrderViolation { subtree, .. }) => assert_eq!(subtree.item(), Some(&1)),
            _ => panic!("Expected an order violation."),
        }
    }

    #[test]
    fn test_check_height_mismatch() {
        let tree = Some(Node::forge(2, 3, Some(Node::new(1)), Some(Node::new(3))));
        match check(&tree) {
            Err(Error::HeightMismatch { subtree, expected, actual }) => {
                assert_eq!(subtree.item(), Some(&2));
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            },
            _ => panic!("Expected a height mismatch."),
        }
    }

    #[test]
    fn test_check_imbalance() {
        let right = Node::link(Node::new(2), None, Some(Node::new(3)));
        let tree = Some(Node::link(Node::new(1), None, Some(right)));
        match check(&tree) {
            Err(Error::Imbalance { subtree, balance }) => {
                assert_eq!(subtree.item(), Some(&1));
                assert_eq!(balance, -2);
            },
            _ => panic!("Expected an imbalance."),
        }
    }

    #[test]
    fn test_check_order_before_height() {
        // Both out of order and carrying a wrong height; order is reported first.
        let tree = Some(Node::forge(1, 5, Some(Node::new(2)), None));
        match check(&tree) {
            Err(Error::OrderViolation { .. }) => {},
            _ => panic!("Expected an order violation."),
        }
    }

    #[test]
    fn test_structure_display() {
        let tree = Some(Node::link(Node::new(2), Some(Node::new(1)), Some(Node::new(3))));
        assert_eq!(
            Structure::new(&tree).to_string(),
            "Node(item=2, height=2, left=Node(item=1, height=1), right=Node(item=3, height=1))",
        );

        let empty: tree::Tree<u32> = None;
        assert_eq!(Structure::new(&empty).to_string(), "None");
    }

    #[test]
    fn test_structure_navigation() {
        let tree = Some(Node::link(Node::new(2), Some(Node::new(1)), None));
        let structure = Structure::new(&tree);
        assert_eq!(structure.height(), 2);
        assert_eq!(structure.left().item(), Some(&1));
        assert_eq!(structure.right().item(), None);
        assert_eq!(structure.right().height(), 0);
    }
}
