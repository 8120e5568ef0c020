/// Config for an annotated class
/// ## Fields
/// - `guard_arity`:
///   If `true`, the construction hook assigns dependencies only when it receives exactly
///   as many arguments as there are names in the merged list, and assigns nothing otherwise.
///   A call with a different count is treated as a call made for a class further down the chain.
///
///   If `false`, names are assigned positionally for every supplied argument,
///   extra arguments are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub guard_arity: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { guard_arity: true }
    }
}
