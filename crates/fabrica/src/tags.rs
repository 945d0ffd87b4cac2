//! Deduplicated, order-irrelevant tag accumulation.
//!
//! A [`TagSet`] collects enumerated tag values during a builder's staging
//! lifetime and hands the built entity an independently-owned copy at
//! freeze time. The backing store is a persistent hash set, so the
//! freeze-time [`snapshot`](TagSet::snapshot) is cheap (structural
//! sharing) while remaining fully value-semantic: no mutation of one copy
//! can ever reach another.
//!
//! The public surface is accumulate-only. There is no removal operation;
//! chain callers only ever add tags.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A set of enumerated tag values with idempotent insertion.
///
/// Insertion order is irrelevant and duplicates collapse. Two tag sets
/// compare equal when they contain the same tags, regardless of the
/// sequence of insertions that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet<T>
where
    T: Clone + Eq + Hash,
{
    values: im::HashSet<T>,
}

impl<T> TagSet<T>
where
    T: Clone + Eq + Hash,
{
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: im::HashSet::new(),
        }
    }

    /// Stage a tag. Idempotent: re-inserting a present tag is a no-op.
    ///
    /// Returns `true` if the tag was newly added.
    pub fn insert(&mut self, tag: T) -> bool {
        self.values.insert(tag).is_none()
    }

    /// Check whether a tag is present.
    #[must_use]
    pub fn contains(&self, tag: &T) -> bool {
        self.values.contains(tag)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no tags are staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the tags in no particular order.
    pub fn iter(&self) -> im::hashset::Iter<'_, T> {
        self.values.iter()
    }

    /// Freeze an independently-owned copy of the current tags.
    ///
    /// Called once per terminal build. The copy shares structure with the
    /// source but is value-semantic: further insertion into either side
    /// leaves the other unchanged.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<T> Default for TagSet<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TagSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for TagSet<T>
where
    T: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<'a, T> IntoIterator for &'a TagSet<T>
where
    T: Clone + Eq + Hash,
{
    type Item = &'a T;
    type IntoIter = im::hashset::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Renders tags in declaration order, e.g. `[mushroom, onion]`.
impl<T> fmt::Display for TagSet<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&T> = self.values.iter().collect();
        tags.sort();

        write!(f, "[")?;
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tag}")?;
        }
        write!(f, "]")
    }
}
