#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructErrorKind {
    #[error("Incorrect number of constructor arguments. Actual: {actual}, expected: {expected}")]
    ArgumentCount { expected: usize, actual: usize },
}
