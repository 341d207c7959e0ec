//! Positional addresses for specs in a not-yet-materialized tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequence of zero-based sibling indices from the root to one spec.
///
/// Paths are only meaningful relative to the declaration order of a single
/// root procedure. The derived ordering is lexicographic and a prefix sorts
/// before its extensions, so sorting paths yields pre-order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th child of `self`.
    pub fn append(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// True if `self` is `target` or one of its ancestors.
    pub fn is_on(&self, target: &Path) -> bool {
        !self.is_beyond(target) && target.0.starts_with(&self.0)
    }

    /// True if `self` is strictly deeper than `target`.
    pub fn is_beyond(&self, target: &Path) -> bool {
        self.0.len() > target.0.len()
    }

    /// Final sibling index, or `None` for the root.
    pub fn last_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Nesting depth; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path of the enclosing spec, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, head) = self.0.split_last()?;
        Some(Self(head.to_vec()))
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
