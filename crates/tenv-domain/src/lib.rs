//! # tenv domain
//!
//! Core types shared by every layer of the test environment engine:
//!
//! - [`error`] - the error taxonomy surfaced to test code
//! - [`value_objects`] - type identity, published data, registration keys
//!   and block execution results
//! - [`ports`] - the resolver and disposal contracts implemented by
//!   external collaborators
//! - [`constants`] - shared message fragments and defaults

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Dispose, DisposableAction, Resolver, ResolverExt};
pub use value_objects::{
    ActionAfterExecution, BlockExecutionResult, InsertMode, Instance, RegistrationKey, TypeKey,
};
