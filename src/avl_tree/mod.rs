//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod check;
mod node;
mod set;
mod tree;

pub use self::check::Structure;
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::error;
use std::fmt;
use std::result;

/// An invariant violation found by `AvlSet::check`.
///
/// Every variant borrows the offending subtree so that it can be inspected or printed. A
/// violation is always a bug in the balancing logic and is never produced by a correctly
/// maintained tree.
pub enum Error<'a, T> {
    /// A reachable node is not structurally sound: its cached height is zero.
    MalformedNode { subtree: Structure<'a, T> },
    /// The item of a node is not strictly within the bounds inherited from its ancestors.
    OrderViolation {
        subtree: Structure<'a, T>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    },
    /// The cached height of a node is not one more than the height of its taller child.
    HeightMismatch {
        subtree: Structure<'a, T>,
        expected: usize,
        actual: usize,
    },
    /// The heights of the two children of a node differ by two or more.
    Imbalance {
        subtree: Structure<'a, T>,
        balance: isize,
    },
}

impl<'a, T> Error<'a, T> {
    /// Returns the subtree rooted at the node that violates the invariant.
    pub fn subtree(&self) -> Structure<'a, T> {
        match *self {
            Error::MalformedNode { subtree } => subtree,
            Error::OrderViolation { subtree, .. } => subtree,
            Error::HeightMismatch { subtree, .. } => subtree,
            Error::Imbalance { subtree, .. } => subtree,
        }
    }
}

impl<'a, T> fmt::Display for Error<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedNode { subtree } => {
                write!(f, "A node has a malformed height: {}", subtree)
            },
            Error::OrderViolation { subtree, lower, upper } => write!(
                f,
                "Keys are not in the correct BST order (bounds {:?}, {:?}): {}",
                lower, upper, subtree,
            ),
            Error::HeightMismatch { subtree, expected, actual } => write!(
                f,
                "Height field is wrong (expected {}, found {}): {}",
                expected, actual, subtree,
            ),
            Error::Imbalance { subtree, balance } => {
                write!(f, "Tree is unbalanced (balance {}): {}", balance, subtree)
            },
        }
    }
}

impl<'a, T> fmt::Debug for Error<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<'a, T> error::Error for Error<'a, T> where T: fmt::Debug {}

pub type Result<'a, T> = result::Result<(), Error<'a, T>>;
