use alloc::{collections::BTreeSet, vec::Vec};

use crate::{dependency_list::DependencyList, name::DependencyName};

pub trait Merge<T> {
    type Output;

    #[must_use]
    fn merge(self, other: T) -> Self::Output;
}

/// Accumulates names in order of first occurrence.
/// Names that were already merged are dropped silently.
#[derive(Default, Clone)]
pub struct UniqueUnion {
    names: Vec<DependencyName>,
    seen: BTreeSet<DependencyName>,
}

impl UniqueUnion {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            seen: BTreeSet::new(),
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
    pub(crate) fn push(&mut self, name: DependencyName) -> bool {
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    #[inline]
    #[must_use]
    pub fn finish(self) -> DependencyList {
        DependencyList::from_unique(self.names)
    }
}

impl Merge<DependencyName> for UniqueUnion {
    type Output = Self;

    #[inline]
    fn merge(mut self, name: DependencyName) -> Self::Output {
        self.push(name);
        self
    }
}

impl Merge<&[DependencyName]> for UniqueUnion {
    type Output = Self;

    #[inline]
    fn merge(self, names: &[DependencyName]) -> Self::Output {
        names.iter().cloned().fold(self, Merge::merge)
    }
}

impl Merge<&DependencyList> for UniqueUnion {
    type Output = Self;

    #[inline]
    fn merge(self, list: &DependencyList) -> Self::Output {
        self.merge(list.as_slice())
    }
}

impl Merge<UniqueUnion> for UniqueUnion {
    type Output = Self;

    #[inline]
    fn merge(self, other: UniqueUnion) -> Self::Output {
        self.merge(other.names.as_slice())
    }
}
