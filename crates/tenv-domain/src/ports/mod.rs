//! Domain Port Interfaces
//!
//! Contracts implemented by collaborators outside the engine.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Resolver`] | External dependency resolution capability |
//! | [`Dispose`] | Asynchronous release of a tracked resource |

/// Disposal port
pub mod dispose;
/// Resolver port
pub mod resolver;

pub use dispose::{DisposableAction, Dispose};
pub use resolver::{Resolver, ResolverExt};
