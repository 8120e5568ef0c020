use core::any::TypeId;

use crate::name::DependencyName;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceErrorKind {
    #[error("Dependency `{name}` isn't assigned on the instance")]
    Missing { name: DependencyName },
    #[error("Incorrect type of dependency `{name}`. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType {
        name: DependencyName,
        expected: TypeId,
        actual: TypeId,
    },
}
