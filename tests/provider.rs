use inject_chain::{
    annotate,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety},
    Class, Context, DependencyName, ProvideErrorKind,
};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, PartialEq)]
struct Http(&'static str);
#[derive(Debug, PartialEq)]
struct Location(&'static str);

struct ParentCtrl;
struct TestCtrl;

#[test]
fn test_instantiate_with_context() {
    let parent = annotate(["$location"], Class::of::<ParentCtrl>()).unwrap();
    let class = annotate(["$http"], Class::derived::<TestCtrl>(&parent)).unwrap();

    let mut context = Context::new();
    context.insert("$http", Http("http"));
    context.insert("$location", Location("/"));

    let instance = class.instantiate_with(&context).unwrap();
    assert_eq!(*instance.get::<Http>("$http").unwrap(), Http("http"));
    assert_eq!(*instance.get::<Location>("$location").unwrap(), Location("/"));
}

#[test]
fn test_instantiate_with_missing() {
    let class = annotate(["$http", "$location"], Class::of::<TestCtrl>()).unwrap();

    let mut context = Context::new();
    context.insert("$http", Http("http"));

    let err = class.instantiate_with(&context).unwrap_err();
    assert!(matches!(err, ProvideErrorKind::NotFound { name } if name == "$location"));
}

#[test]
fn test_instantiate_with_fn_provider() {
    let class = annotate(["$http", "$location"], Class::of::<TestCtrl>()).unwrap();
    let calls = AtomicUsize::new(0);

    let provider = |name: &DependencyName| {
        calls.fetch_add(1, Ordering::SeqCst);
        match name.as_str() {
            "$http" => Ok(RcThreadSafety::new(Http("http")) as RcAnyThreadSafety),
            "$location" => Ok(RcThreadSafety::new(Location("/")) as _),
            _ => Err(ProvideErrorKind::NotFound { name: name.clone() }),
        }
    };

    let instance = class.instantiate_with(&provider).unwrap();
    assert_eq!(instance.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_instantiate_with_custom_error() {
    let class = annotate(["$http"], Class::of::<TestCtrl>()).unwrap();

    let provider = |_: &DependencyName| -> Result<RcAnyThreadSafety, ProvideErrorKind> {
        Err(ProvideErrorKind::Custom(anyhow::anyhow!("container is closed")))
    };

    let err = class.instantiate_with(&provider).unwrap_err();
    assert_eq!(err.to_string(), "container is closed");
}
