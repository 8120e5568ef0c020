use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Display, Formatter},
    slice,
};

use crate::{
    name::DependencyName,
    utils::{merge::UniqueUnion, thread_safety::RcThreadSafety},
};

/// Ordered set of dependency names, inherited ones included.
///
/// The list is immutable once built and clones share the same storage,
/// so reading it repeatedly or from several threads always yields the same names.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DependencyList {
    names: RcThreadSafety<[DependencyName]>,
}

impl Default for DependencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_unique(Vec::new())
    }

    /// Caller guarantees `names` has no duplicates.
    #[inline]
    #[must_use]
    pub(crate) fn from_unique(names: Vec<DependencyName>) -> Self {
        Self {
            names: RcThreadSafety::from(names),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, DependencyName> {
        self.names.iter()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DependencyName> {
        self.names.get(index)
    }

    #[inline]
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|item| item.as_str() == name)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[DependencyName] {
        &self.names
    }

    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<DependencyName> {
        self.names.to_vec()
    }
}

impl FromIterator<DependencyName> for DependencyList {
    fn from_iter<I: IntoIterator<Item = DependencyName>>(iter: I) -> Self {
        let mut union = UniqueUnion::new();
        for name in iter {
            union.push(name);
        }
        union.finish()
    }
}

impl<'a> IntoIterator for &'a DependencyList {
    type Item = &'a DependencyName;
    type IntoIter = slice::Iter<'a, DependencyName>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<[&str]> for DependencyList {
    fn eq(&self, other: &[&str]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(name, other)| name == other)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for DependencyList {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}

impl Debug for DependencyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for DependencyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, name) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
