use core::any::TypeId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateErrorKind {
    #[error("Expected dependency at index {index} to be of type `String`, got: {actual:?}")]
    NotAString { index: usize, actual: TypeId },
    #[error("Class `{class}` is already annotated. Re-annotation isn't supported")]
    AlreadyAnnotated { class: &'static str },
}
