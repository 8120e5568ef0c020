use core::fmt::{self, Debug, Formatter};
use tracing::error;

use crate::{
    any::TypeInfo,
    annotate::collect_names,
    config::Config,
    dependency_list::DependencyList,
    errors::AnnotateErrorKind,
    name::IntoDependencyName,
    utils::thread_safety::RcThreadSafety,
};

/// Descriptor of a class taking part in name-based injection.
///
/// A class has at most one parent, and the parent must exist before the child is described,
/// so the ancestor chain is always linear and finite.
/// The universal root type isn't represented: a class without a parent has no ancestors.
#[derive(Clone)]
pub struct Class {
    inner: RcThreadSafety<ClassInner>,
}

struct ClassInner {
    type_info: TypeInfo,
    parent: Option<Class>,
    inject: Option<DependencyList>,
    hook: Option<Config>,
}

impl Class {
    /// Describes `T` as a class without ancestors
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_parts(TypeInfo::of::<T>(), None, None, None)
    }

    /// Describes `T` as a class extending `parent`
    #[inline]
    #[must_use]
    pub fn derived<T: ?Sized + 'static>(parent: impl AsRef<Class>) -> Self {
        Self::from_parts(TypeInfo::of::<T>(), Some(parent.as_ref().clone()), None, None)
    }

    /// Attaches a hand-written dependency list to the class without merging ancestors into it,
    /// and without a construction hook.
    ///
    /// Annotated descendants still read the list when they merge their own.
    /// Duplicate names are dropped, first occurrence wins.
    ///
    /// # Errors
    /// - [`AnnotateErrorKind::NotAString`] if one of the names isn't a string.
    /// - [`AnnotateErrorKind::AlreadyAnnotated`] if the class carries a construction hook.
    pub fn with_inject<I>(self, names: I) -> Result<Self, AnnotateErrorKind>
    where
        I: IntoIterator,
        I::Item: IntoDependencyName,
    {
        if self.is_annotated() {
            let err = AnnotateErrorKind::AlreadyAnnotated { class: self.name() };
            error!("{}", err);
            return Err(err);
        }
        let inject = match collect_names(names) {
            Ok(names) => names.into_iter().collect(),
            Err(err) => {
                error!(class = self.name(), "{}", err);
                return Err(err);
            }
        };
        Ok(Self::from_parts(self.type_info(), self.parent().cloned(), Some(inject), None))
    }

    #[inline]
    #[must_use]
    pub(crate) fn from_parts(type_info: TypeInfo, parent: Option<Class>, inject: Option<DependencyList>, hook: Option<Config>) -> Self {
        Self {
            inner: RcThreadSafety::new(ClassInner {
                type_info,
                parent,
                inject,
                hook,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.inner.type_info
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.type_info.name
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&Class> {
        self.inner.parent.as_ref()
    }

    /// Dependency list attached to this class, if any.
    /// For an annotated class this is the merged list.
    #[inline]
    #[must_use]
    pub fn inject(&self) -> Option<&DependencyList> {
        self.inner.inject.as_ref()
    }

    /// Config of the construction hook, `None` if the class isn't annotated
    #[inline]
    #[must_use]
    pub fn hook(&self) -> Option<Config> {
        self.inner.hook
    }

    #[inline]
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.inner.hook.is_some()
    }

    /// Ancestors from the nearest to the furthest, `self` excluded
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: self.parent() }
    }

    /// Number of ancestors
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Whether both handles point to the same descriptor node
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Class) -> bool {
        RcThreadSafety::ptr_eq(&self.inner, &other.inner)
    }
}

impl AsRef<Class> for Class {
    #[inline]
    fn as_ref(&self) -> &Class {
        self
    }
}

impl Debug for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name())
            .field("parent", &self.parent().map(Class::name))
            .field("inject", &self.inject())
            .field("annotated", &self.is_annotated())
            .finish()
    }
}

pub struct Ancestors<'a> {
    next: Option<&'a Class>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
