//! # tenv application
//!
//! The engine proper:
//!
//! - [`environment`] - the block registry, the build engine and teardown
//! - [`lifecycle`] - the test factory and the wrapper lifecycle
//! - [`ports`] - block and wrapper contracts plus the named wrapper registry
//! - [`dependencies`] - constructor dependency lookup
//! - [`resolver`] - the default resolver

pub mod dependencies;
pub mod environment;
pub mod lifecycle;
pub mod ports;
pub mod resolver;

pub use dependencies::Dependencies;
pub use environment::{RealizedBlock, Setup, TestEnvironment};
pub use ports::{
    Block, Construct, TestWrapper, WRAPPERS, WrapperConstruct, WrapperEntry, WrapperType,
    list_wrappers, resolve_wrapper,
};
pub use lifecycle::{Test, TestCase, TestContext, TestOptions, WrapperContext, WrapperOptions};
pub use resolver::NullResolver;
