//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again. Keys are ordered by a caller-supplied comparator rather than an
//! `Ord` bound.

mod map;
mod node;
mod tree;

pub use self::map::{NodeId, SplayMap, SplayMapIntoIter, SplayMapIter};

use std::error;
use std::fmt;
use std::result;

/// The error type for splay tree operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// No entry in the tree matched the requested key.
    KeyNotFound,
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::KeyNotFound => "key not found",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
