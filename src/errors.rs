mod annotate;
mod construct;
mod instance;
mod provide;

pub use annotate::AnnotateErrorKind;
pub use construct::ConstructErrorKind;
pub use instance::InstanceErrorKind;
pub use provide::ProvideErrorKind;
