//! Shared handles used by descriptors, lists and instances.
//!
//! With the `thread_safe` feature they are [`Arc`](alloc::sync::Arc)s and every value put behind them
//! has to be `Send + Sync`, without it they are [`Rc`](alloc::rc::Rc)s and no bound is required.

#[cfg(feature = "thread_safe")]
mod inner {
    use alloc::sync::Arc;
    use core::any::Any;

    pub trait SendSafety: Send {}
    pub trait SyncSafety: Sync {}

    impl<T: Send + ?Sized> SendSafety for T {}
    impl<T: Sync + ?Sized> SyncSafety for T {}

    pub type RcThreadSafety<T> = Arc<T>;
    pub type RcAnyThreadSafety = Arc<dyn Any + Send + Sync>;
}

#[cfg(not(feature = "thread_safe"))]
mod inner {
    use alloc::rc::Rc;
    use core::any::Any;

    pub trait SendSafety {}
    pub trait SyncSafety {}

    impl<T: ?Sized> SendSafety for T {}
    impl<T: ?Sized> SyncSafety for T {}

    pub type RcThreadSafety<T> = Rc<T>;
    pub type RcAnyThreadSafety = Rc<dyn Any>;
}

pub use inner::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety};
