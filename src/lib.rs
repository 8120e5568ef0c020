//! Inheritance-aware dependency annotations for name-based injection.
//!
//! A [`Class`] describes a type and its single parent. [`annotate`] attaches a list of dependency
//! names to it, merged with the lists of all its ancestors, and a construction hook that assigns
//! resolved values by name onto an [`Instance`].

#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod annotate;
pub(crate) mod any;
pub(crate) mod class;
pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod dependency_list;
pub(crate) mod errors;
pub(crate) mod instance;
pub(crate) mod name;
pub(crate) mod provider;

pub mod utils;

pub use annotate::{annotate, annotate_with_config, AnnotatedClass};
pub use any::TypeInfo;
pub use class::{Ancestors, Class};
pub use config::Config;
pub use context::Context;
pub use dependency_list::DependencyList;
pub use errors::{AnnotateErrorKind, ConstructErrorKind, InstanceErrorKind, ProvideErrorKind};
pub use instance::Instance;
pub use name::{DependencyName, IntoDependencyName};
pub use provider::Provider;
