//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree is a left-leaning red black tree: every red link leans left, which makes the tree
//! isomorphic to a 2-3 tree. Each node also caches the size of its subtree so that order
//! statistics (`rank` and `select`) run in logarithmic time.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{
    OrdComparator, RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut,
};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};

use std::error;
use std::fmt;
use std::result;

/// An enum representing the failures of operations on a red black tree. No operation mutates the
/// tree when it fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested key does not exist.
    AbsentKey,
    /// The operation requires at least one entry.
    EmptyTable,
    /// The requested rank is not in `[0, len)`.
    InvalidRank,
    /// Every key is greater than the key whose floor was requested.
    TooSmallFloorKey,
    /// Every key is less than the key whose ceiling was requested.
    TooLargeCeilingKey,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AbsentKey => write!(f, "key is absent"),
            Error::EmptyTable => write!(f, "table is empty"),
            Error::InvalidRank => write!(f, "rank is out of range"),
            Error::TooSmallFloorKey => write!(f, "key to floor is too small"),
            Error::TooLargeCeilingKey => write!(f, "key to ceiling is too large"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// An enum representing a broken invariant found by `RedBlackMap::validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A key is not strictly between the keys of its ancestors.
    UnorderedKeys,
    /// A cached subtree length does not equal one plus the lengths of its children.
    InconsistentLen,
    /// A node has a red right link.
    RedRightLink,
    /// A red node has a red left child.
    ConsecutiveReds,
    /// Two paths from a node to its leaves have a different number of black links.
    UnbalancedBlacks,
    /// The root is red.
    RedRoot,
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::UnorderedKeys => write!(f, "keys are not in sorted order"),
            Violation::InconsistentLen => write!(f, "subtree length is inconsistent"),
            Violation::RedRightLink => write!(f, "red link leans right"),
            Violation::ConsecutiveReds => write!(f, "two consecutive red links"),
            Violation::UnbalancedBlacks => write!(f, "black height is not uniform"),
            Violation::RedRoot => write!(f, "root is red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Violation};

    #[test]
    fn test_error_display() {
        assert_eq!(Error::AbsentKey.to_string(), "key is absent");
        assert_eq!(Error::EmptyTable.to_string(), "table is empty");
        assert_eq!(Error::InvalidRank.to_string(), "rank is out of range");
        assert_eq!(Error::TooSmallFloorKey.to_string(), "key to floor is too small");
        assert_eq!(Error::TooLargeCeilingKey.to_string(), "key to ceiling is too large");
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(Violation::RedRoot.to_string(), "root is red");
        assert_eq!(Violation::UnbalancedBlacks.to_string(), "black height is not uniform");
    }
}
