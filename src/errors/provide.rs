use crate::name::DependencyName;

#[derive(thiserror::Error, Debug)]
pub enum ProvideErrorKind {
    #[error("Dependency `{name}` not found in provider")]
    NotFound { name: DependencyName },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
