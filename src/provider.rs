use crate::{errors::ProvideErrorKind, name::DependencyName, utils::thread_safety::RcAnyThreadSafety};

/// Source of resolved values, looked up by dependency name.
///
/// This is the seam to the injection container that actually owns and builds the services.
pub trait Provider {
    #[allow(clippy::missing_errors_doc)]
    fn provide(&self, name: &DependencyName) -> Result<RcAnyThreadSafety, ProvideErrorKind>;
}

impl<F> Provider for F
where
    F: Fn(&DependencyName) -> Result<RcAnyThreadSafety, ProvideErrorKind>,
{
    #[inline]
    fn provide(&self, name: &DependencyName) -> Result<RcAnyThreadSafety, ProvideErrorKind> {
        self(name)
    }
}
