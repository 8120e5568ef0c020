use alloc::string::String;
use core::{
    any::{Any, TypeId},
    borrow::Borrow,
    fmt::{self, Debug, Display, Formatter},
    ops::Deref,
};

use crate::utils::thread_safety::RcThreadSafety;

/// Name of a dependency an injection container knows how to resolve,
/// e.g. `$http` or `$location`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyName(RcThreadSafety<str>);

impl DependencyName {
    #[inline]
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(RcThreadSafety::from(name))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for DependencyName {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for DependencyName {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DependencyName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Debug for DependencyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for DependencyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DependencyName {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DependencyName {
    #[inline]
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for DependencyName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for DependencyName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Conversion of a declared dependency into a [`DependencyName`].
///
/// Statically typed strings always convert. Dynamic tokens (`&dyn Any`) convert
/// only when they hold a `&'static str`, a [`String`] or a [`DependencyName`],
/// otherwise the [`TypeId`] of the held value is returned so the caller can report it.
pub trait IntoDependencyName {
    #[allow(clippy::missing_errors_doc)]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId>;
}

impl IntoDependencyName for DependencyName {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        Ok(self)
    }
}

impl IntoDependencyName for &DependencyName {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        Ok(self.clone())
    }
}

impl IntoDependencyName for &str {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        Ok(DependencyName::new(self))
    }
}

impl IntoDependencyName for String {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        Ok(DependencyName::from(self))
    }
}

impl IntoDependencyName for &String {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        Ok(DependencyName::new(self))
    }
}

impl IntoDependencyName for &dyn Any {
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        if let Some(name) = self.downcast_ref::<&'static str>() {
            return Ok(DependencyName::new(name));
        }
        if let Some(name) = self.downcast_ref::<String>() {
            return Ok(DependencyName::new(name));
        }
        if let Some(name) = self.downcast_ref::<DependencyName>() {
            return Ok(name.clone());
        }
        Err((*self).type_id())
    }
}

impl IntoDependencyName for &(dyn Any + Send + Sync) {
    #[inline]
    fn into_dependency_name(self) -> Result<DependencyName, TypeId> {
        (self as &dyn Any).into_dependency_name()
    }
}
