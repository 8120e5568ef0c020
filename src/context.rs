use alloc::collections::BTreeMap;

use crate::{
    errors::ProvideErrorKind,
    name::DependencyName,
    provider::Provider,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Values registered by name, ready to be handed to annotated classes
#[derive(Default, Clone)]
pub struct Context {
    map: BTreeMap<DependencyName, RcAnyThreadSafety>,
}

impl Context {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    #[inline]
    pub fn insert<T: SendSafety + SyncSafety + 'static>(&mut self, name: impl Into<DependencyName>, value: T) -> Option<RcThreadSafety<T>> {
        self.map
            .insert(name.into(), RcThreadSafety::new(value))
            .and_then(|boxed| boxed.downcast().ok())
    }

    #[inline]
    pub fn insert_rc<T: SendSafety + SyncSafety + 'static>(
        &mut self,
        name: impl Into<DependencyName>,
        value: RcThreadSafety<T>,
    ) -> Option<RcThreadSafety<T>> {
        self.map.insert(name.into(), value).and_then(|boxed| boxed.downcast().ok())
    }

    #[inline]
    #[must_use]
    pub fn get<T: SendSafety + SyncSafety + 'static>(&self, name: &str) -> Option<RcThreadSafety<T>> {
        self.map.get(name).and_then(|boxed| boxed.clone().downcast().ok())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }
}

impl Provider for Context {
    fn provide(&self, name: &DependencyName) -> Result<RcAnyThreadSafety, ProvideErrorKind> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ProvideErrorKind::NotFound { name: name.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::{errors::ProvideErrorKind, name::DependencyName, provider::Provider as _};

    #[test]
    fn test_insert_replaces() {
        let mut context = Context::new();

        assert!(context.insert("$timeout", 100u32).is_none());
        assert_eq!(*context.insert("$timeout", 200u32).unwrap(), 100);
        assert_eq!(*context.get::<u32>("$timeout").unwrap(), 200);
    }

    #[test]
    fn test_provide_not_found() {
        let context = Context::new();

        let err = context.provide(&DependencyName::new("$http")).unwrap_err();
        assert!(matches!(err, ProvideErrorKind::NotFound { name } if name == "$http"));
    }
}
