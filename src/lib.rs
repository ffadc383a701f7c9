//! An ordered set backed by an avl tree.
//!
//! The set supports insertion, membership lookup, in-order iteration, and a full structural
//! self-check that re-verifies every invariant of the tree from scratch.

pub mod avl_tree;
