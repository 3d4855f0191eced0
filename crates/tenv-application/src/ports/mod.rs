//! Application Port Interfaces
//!
//! Contracts implemented by test authors and consumed by the engine.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Block`] | One stage of the fixture pipeline |
//! | [`Construct`] | Explicit constructor fed by published data and the resolver |
//! | [`TestWrapper`] | Per-test begin/finish hooks |
//! | [`WrapperConstruct`] | Explicit constructor of a wrapper |
//! | [`registry`] | Named wrappers discoverable from configuration |

/// Pipeline stage contract
pub mod block;
/// Named wrapper registry
pub mod registry;
/// Test wrapper contract
pub mod wrapper;

pub use block::{Block, Construct};
pub use registry::{WRAPPERS, WrapperEntry, list_wrappers, resolve_wrapper};
pub use wrapper::{TestWrapper, WrapperConstruct, WrapperType};
