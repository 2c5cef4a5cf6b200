//! Configuration structures for one orchestration run.
//!
//! [`BuildOptions`] is the immutable record every lifecycle stage reads from;
//! [`BuildOptionsBuilder`] validates input before a run starts.

mod builder;
mod bundle;
mod core;
mod package;

pub use builder::BuildOptionsBuilder;
pub use bundle::{BundleFormat, MobileTargets, ProjectOverrides};
pub use core::BuildOptions;
pub use package::PackageManager;
