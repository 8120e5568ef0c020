use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use tracing::{debug, error, info_span};

use crate::{
    any::TypeInfo,
    class::Class,
    config::Config,
    dependency_list::DependencyList,
    errors::{AnnotateErrorKind, ConstructErrorKind, ProvideErrorKind},
    instance::Instance,
    name::{DependencyName, IntoDependencyName},
    provider::Provider,
    utils::{
        merge::{Merge as _, UniqueUnion},
        thread_safety::RcAnyThreadSafety,
    },
};

pub(crate) fn collect_names<I>(names: I) -> Result<Vec<DependencyName>, AnnotateErrorKind>
where
    I: IntoIterator,
    I::Item: IntoDependencyName,
{
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            name.into_dependency_name()
                .map_err(|actual| AnnotateErrorKind::NotAString { index, actual })
        })
        .collect()
}

/// Annotates `class` with `names` using the default [`Config`].
///
/// See [`annotate_with_config`].
#[allow(clippy::missing_errors_doc)]
#[inline]
pub fn annotate<I>(names: I, class: Class) -> Result<AnnotatedClass, AnnotateErrorKind>
where
    I: IntoIterator,
    I::Item: IntoDependencyName,
{
    annotate_with_config(names, class, Config::default())
}

/// Annotates `class` with `names`.
///
/// The merged list starts with `names`, followed by the list attached to each ancestor
/// from the nearest to the furthest. Ancestors without a list contribute nothing.
/// Only the first occurrence of a name is kept.
///
/// # Errors
/// - [`AnnotateErrorKind::NotAString`] if one of the names isn't a string.
///   Nothing is annotated in this case.
/// - [`AnnotateErrorKind::AlreadyAnnotated`] if `class` was produced by a previous annotation.
pub fn annotate_with_config<I>(names: I, class: Class, config: Config) -> Result<AnnotatedClass, AnnotateErrorKind>
where
    I: IntoIterator,
    I::Item: IntoDependencyName,
{
    let span = info_span!("annotate", class = class.name());
    let _guard = span.enter();

    if class.is_annotated() {
        let err = AnnotateErrorKind::AlreadyAnnotated { class: class.name() };
        error!("{}", err);
        return Err(err);
    }

    let own = match collect_names(names) {
        Ok(own) => own,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    let mut union = UniqueUnion::new().merge(own.as_slice());
    for ancestor in class.ancestors() {
        match ancestor.inject() {
            Some(inject) => union = union.merge(inject),
            None => debug!(ancestor = ancestor.name(), "Ancestor has no dependency list"),
        }
    }
    let inject = union.finish();

    debug!(%inject, "Merged");

    Ok(AnnotatedClass {
        class: Class::from_parts(class.type_info(), class.parent().cloned(), Some(inject.clone()), Some(config)),
        inject,
        config,
    })
}

/// Runs the construction hook of a single level of a chain.
/// Returns `true` if the level assigned its dependencies.
fn assign(inject: &DependencyList, config: Config, instance: &mut Instance, args: &[RcAnyThreadSafety]) -> bool {
    if config.guard_arity && inject.len() != args.len() {
        debug!(expected = inject.len(), actual = args.len(), "Skipped: arity mismatch");
        return false;
    }

    for (name, value) in inject.iter().zip(args) {
        instance.insert(name.clone(), value.clone());
    }

    debug!(count = inject.len().min(args.len()), "Assigned");
    true
}

/// Class with a merged dependency list and a construction hook attached.
///
/// The list is computed once, on annotation, and never changes afterwards.
/// An external container reads it from [`AnnotatedClass::inject`] to know what to supply,
/// in which order, at construction time.
#[derive(Clone)]
pub struct AnnotatedClass {
    class: Class,
    inject: DependencyList,
    config: Config,
}

impl AnnotatedClass {
    /// Merged dependency list
    #[inline]
    #[must_use]
    pub fn inject(&self) -> &DependencyList {
        &self.inject
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.class
    }

    #[inline]
    #[must_use]
    pub fn into_class(self) -> Class {
        self.class
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.class.type_info()
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Runs this class' construction hook on a new instance.
    ///
    /// # Notes
    /// With [`Config::guard_arity`] set, nothing is assigned unless `args` has exactly one value
    /// per name of the merged list, see [`Config`].
    #[must_use]
    pub fn construct(&self, args: &[RcAnyThreadSafety]) -> Instance {
        let mut instance = Instance::new(self.type_info());
        self.construct_into(&mut instance, args);
        instance
    }

    /// Runs this class' construction hook on an existing instance.
    /// Returns `true` if the dependencies were assigned.
    pub fn construct_into(&self, instance: &mut Instance, args: &[RcAnyThreadSafety]) -> bool {
        assign(&self.inject, self.config, instance, args)
    }

    /// Strict form of [`Self::construct`] that never skips the assignment.
    ///
    /// # Errors
    /// Returns [`ConstructErrorKind::ArgumentCount`] if `args` doesn't have exactly one value per name,
    /// whatever [`Config::guard_arity`] is.
    pub fn try_construct(&self, args: &[RcAnyThreadSafety]) -> Result<Instance, ConstructErrorKind> {
        if self.inject.len() != args.len() {
            let err = ConstructErrorKind::ArgumentCount {
                expected: self.inject.len(),
                actual: args.len(),
            };
            error!("{}", err);
            return Err(err);
        }

        let mut instance = Instance::new(self.type_info());
        assign(&self.inject, self.config, &mut instance, args);
        Ok(instance)
    }

    /// Constructs an instance the way a derived constructor chains to its ancestors:
    /// the hook of every annotated ancestor runs first, from the furthest to the nearest,
    /// then the hook of this class. Every level receives the same `args`.
    ///
    /// Ancestors whose merged list is shorter than `args` skip the assignment when guarded.
    /// This class runs last, so its assignment wins whenever it happens.
    #[must_use]
    pub fn instantiate(&self, args: &[RcAnyThreadSafety]) -> Instance {
        let span = info_span!("instantiate", class = self.name(), args = args.len());
        let _guard = span.enter();

        let mut instance = Instance::new(self.type_info());

        let ancestors: Vec<&Class> = self.class.ancestors().collect();
        for ancestor in ancestors.into_iter().rev() {
            if let (Some(inject), Some(config)) = (ancestor.inject(), ancestor.hook()) {
                let span = info_span!("ancestor", class = ancestor.name());
                let _guard = span.enter();

                assign(inject, config, &mut instance, args);
            }
        }
        assign(&self.inject, self.config, &mut instance, args);

        instance
    }

    /// Asks `provider` for every name of the merged list, in order, and instantiates with the values.
    ///
    /// # Errors
    /// Returns the first error of the provider, no hook runs in this case.
    pub fn instantiate_with<P>(&self, provider: &P) -> Result<Instance, ProvideErrorKind>
    where
        P: Provider + ?Sized,
    {
        let mut args = Vec::with_capacity(self.inject.len());
        for name in &self.inject {
            match provider.provide(name) {
                Ok(value) => args.push(value),
                Err(err) => {
                    error!(class = self.name(), "{}", err);
                    return Err(err);
                }
            }
        }
        Ok(self.instantiate(&args))
    }
}

impl AsRef<Class> for AnnotatedClass {
    #[inline]
    fn as_ref(&self) -> &Class {
        &self.class
    }
}

impl From<AnnotatedClass> for Class {
    #[inline]
    fn from(annotated: AnnotatedClass) -> Self {
        annotated.class
    }
}

impl Debug for AnnotatedClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedClass")
            .field("name", &self.name())
            .field("inject", &self.inject)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{annotate, annotate_with_config};
    use crate::{
        class::Class,
        config::Config,
        errors::{AnnotateErrorKind, ConstructErrorKind},
    };

    use alloc::{
        format,
        string::{String, ToString as _},
    };
    use core::any::{Any, TypeId};
    use tracing_test::traced_test;

    #[derive(Debug, PartialEq)]
    struct Http;
    #[derive(Debug, PartialEq)]
    struct Q;
    #[derive(Debug, PartialEq)]
    struct Compile;
    #[derive(Debug, PartialEq)]
    struct Location(&'static str);

    struct ParentCtrl;
    struct TestCtrl;

    #[test]
    #[traced_test]
    fn test_annotate_without_ancestors() {
        let class = annotate(["$http", "$q", "$compile"], Class::of::<TestCtrl>()).unwrap();

        assert_eq!(class.inject(), &["$http", "$q", "$compile"]);
        assert!(class.class().is_annotated());
        assert_eq!(class.class().inject(), Some(class.inject()));
    }

    #[test]
    #[traced_test]
    fn test_annotate_reads_plain_ancestor_list() {
        let parent = Class::of::<ParentCtrl>().with_inject(["$location"]).unwrap();
        let class = annotate(["$http"], Class::derived::<TestCtrl>(&parent)).unwrap();

        assert_eq!(class.inject(), &["$http", "$location"]);
    }

    #[test]
    #[traced_test]
    fn test_annotate_skips_ancestor_without_list() {
        let grand_parent = annotate(["$document"], Class::of::<()>()).unwrap();
        let parent = Class::derived::<ParentCtrl>(&grand_parent);
        let class = annotate(["$http"], Class::derived::<TestCtrl>(&parent)).unwrap();

        assert_eq!(class.inject(), &["$http", "$document"]);
        assert!(logs_contain("Ancestor has no dependency list"));
    }

    #[test]
    #[traced_test]
    fn test_annotate_own_list_replaces_plain_list() {
        let class = Class::of::<TestCtrl>().with_inject(["$location"]).unwrap();
        let class = annotate(["$http"], class).unwrap();

        assert_eq!(class.inject(), &["$http"]);
    }

    #[test]
    #[traced_test]
    fn test_annotate_not_a_string() {
        let tokens: [&dyn Any; 3] = [&"$http", &String::from("$q"), &42i32];

        let err = annotate(tokens, Class::of::<TestCtrl>()).unwrap_err();
        assert_eq!(
            err,
            AnnotateErrorKind::NotAString {
                index: 2,
                actual: TypeId::of::<i32>(),
            }
        );
    }

    #[test]
    #[traced_test]
    fn test_annotate_twice() {
        let class = annotate(["$http"], Class::of::<TestCtrl>()).unwrap();

        let err = annotate(["$q"], class.into_class()).unwrap_err();
        assert!(matches!(err, AnnotateErrorKind::AlreadyAnnotated { .. }));
    }

    #[test]
    #[traced_test]
    fn test_construct_guarded() {
        let class = annotate(["$http", "$q"], Class::of::<TestCtrl>()).unwrap();

        let instance = class.construct(&args![Http, Q]);
        assert_eq!(instance.len(), 2);
        assert_eq!(*instance.get::<Http>("$http").unwrap(), Http);
        assert_eq!(*instance.get::<Q>("$q").unwrap(), Q);

        let instance = class.construct(&args![Http]);
        assert!(instance.is_empty());
        assert!(logs_contain("Skipped: arity mismatch"));
    }

    #[test]
    #[traced_test]
    fn test_construct_unguarded() {
        let class = annotate_with_config(["$http", "$q", "$compile"], Class::of::<TestCtrl>(), Config { guard_arity: false }).unwrap();

        let instance = class.construct(&args![Http, Q]);
        assert_eq!(instance.len(), 2);
        assert!(instance.contains("$http"));
        assert!(instance.contains("$q"));
        assert!(!instance.contains("$compile"));

        let instance = class.construct(&args![Http, Q, Compile, Location("extra")]);
        assert_eq!(instance.len(), 3);
    }

    #[test]
    #[traced_test]
    fn test_try_construct() {
        let class = annotate_with_config(["$http", "$q"], Class::of::<TestCtrl>(), Config { guard_arity: false }).unwrap();

        let err = class.try_construct(&args![Http]).unwrap_err();
        assert_eq!(err, ConstructErrorKind::ArgumentCount { expected: 2, actual: 1 });

        let instance = class.try_construct(&args![Http, Q]).unwrap();
        assert_eq!(instance.len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_instantiate_most_derived_wins() {
        // Same length on both levels, different order
        let parent = annotate(["$http", "$location"], Class::of::<ParentCtrl>()).unwrap();
        let class = annotate(["$location", "$http"], Class::derived::<TestCtrl>(&parent)).unwrap();
        assert_eq!(class.inject(), &["$location", "$http"]);

        let instance = class.instantiate(&args![Location("/"), Http]);
        assert_eq!(*instance.get::<Location>("$location").unwrap(), Location("/"));
        assert_eq!(*instance.get::<Http>("$http").unwrap(), Http);
    }

    #[test]
    #[traced_test]
    fn test_instantiate_partial_args_from_ancestor() {
        let parent = annotate(["$http"], Class::of::<ParentCtrl>()).unwrap();
        let class = annotate(["$q"], Class::derived::<TestCtrl>(&parent)).unwrap();

        // Only the parent level matches the argument count
        let instance = class.instantiate(&args![Http]);
        assert_eq!(instance.len(), 1);
        assert!(instance.contains("$http"));
    }
}
