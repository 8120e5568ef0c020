/// Annotates a class described by a Rust type.
///
/// # Syntax
/// ```text
/// annotate!(Class => [name, ...])
/// annotate!(Class: parent => [name, ...])
/// annotate!(Class: parent => [name, ...], config)
/// ```
/// where `parent` is a [`Class`](crate::Class) or an [`AnnotatedClass`](crate::AnnotatedClass)
/// and `config` is a [`Config`](crate::Config).
///
/// # Examples
/// ```rust
/// use inject_chain::annotate;
///
/// struct ParentCtrl;
/// struct TestCtrl;
///
/// let parent = annotate!(ParentCtrl => ["$location", "$document"]).unwrap();
/// let class = annotate!(TestCtrl: parent => ["$http", "$q", "$compile"]).unwrap();
///
/// assert_eq!(class.inject(), &["$http", "$q", "$compile", "$location", "$document"]);
/// ```
#[macro_export]
macro_rules! annotate {
    ($class:ty : $parent:expr => [ $($names:tt)* ] $(, $config:expr)?) => {
        $crate::annotate_internal!(@names [ $($names)* ], $crate::Class::derived::<$class>(&$parent) $(, $config)?)
    };
    ($class:ty => [ $($names:tt)* ] $(, $config:expr)?) => {
        $crate::annotate_internal!(@names [ $($names)* ], $crate::Class::of::<$class>() $(, $config)?)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! annotate_internal {
    (@names [], $class:expr) => {
        $crate::annotate(::core::iter::empty::<&str>(), $class)
    };
    (@names [], $class:expr, $config:expr) => {
        $crate::annotate_with_config(::core::iter::empty::<&str>(), $class, $config)
    };
    (@names [ $($name:expr),+ $(,)? ], $class:expr) => {
        $crate::annotate([ $($name),+ ], $class)
    };
    (@names [ $($name:expr),+ $(,)? ], $class:expr, $config:expr) => {
        $crate::annotate_with_config([ $($name),+ ], $class, $config)
    };
}

/// Wraps values into constructor arguments for an annotated class.
///
/// # Examples
/// ```rust
/// use inject_chain::{annotate, args};
///
/// struct Http;
/// struct TestCtrl;
///
/// let class = annotate!(TestCtrl => ["$http"]).unwrap();
/// let instance = class.construct(&args![Http]);
///
/// assert!(instance.get::<Http>("$http").is_some());
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [ $( $crate::utils::thread_safety::RcThreadSafety::new($value) as $crate::utils::thread_safety::RcAnyThreadSafety ),* ]
    };
}
