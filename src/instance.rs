use alloc::collections::BTreeMap;
use core::{
    any::TypeId,
    fmt::{self, Debug, Formatter},
};

use crate::{
    any::TypeInfo,
    errors::InstanceErrorKind,
    name::DependencyName,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Dependencies assigned by name onto a constructed instance of a class
#[derive(Clone)]
pub struct Instance {
    type_info: TypeInfo,
    values: BTreeMap<DependencyName, RcAnyThreadSafety>,
}

impl Instance {
    #[inline]
    #[must_use]
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            values: BTreeMap::new(),
        }
    }

    #[inline]
    pub(crate) fn insert(&mut self, name: DependencyName, value: RcAnyThreadSafety) -> Option<RcAnyThreadSafety> {
        self.values.insert(name, value)
    }

    /// Type of the class the instance was constructed for
    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[must_use]
    pub fn get<T: SendSafety + SyncSafety + 'static>(&self, name: &str) -> Option<RcThreadSafety<T>> {
        self.values.get(name).and_then(|value| value.clone().downcast().ok())
    }

    #[inline]
    #[must_use]
    pub fn get_any(&self, name: &str) -> Option<&RcAnyThreadSafety> {
        self.values.get(name)
    }

    /// Gets a dependency with the reason of the failure
    ///
    /// # Errors
    /// - [`InstanceErrorKind::Missing`] if no value is assigned under `name`.
    /// - [`InstanceErrorKind::IncorrectType`] if the assigned value isn't a `T`.
    pub fn try_get<T: SendSafety + SyncSafety + 'static>(&self, name: &str) -> Result<RcThreadSafety<T>, InstanceErrorKind> {
        let Some(value) = self.values.get(name) else {
            return Err(InstanceErrorKind::Missing {
                name: DependencyName::new(name),
            });
        };

        value.clone().downcast().map_err(|value| InstanceErrorKind::IncorrectType {
            name: DependencyName::new(name),
            expected: TypeId::of::<T>(),
            actual: (*value).type_id(),
        })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assigned names in lexicographic order
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &DependencyName> {
        self.values.keys()
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_info", &self.type_info)
            .field("names", &self.values.keys())
            .finish()
    }
}
