//! Domain Value Objects
//!
//! Immutable value objects shared by the registry, the build engine and the
//! test factory.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Runtime identity of a type, usable for unsized types |
//! | [`Instance`] | Type-erased published value, optionally disposable |
//! | [`RegistrationKey`] | Block type plus optional mark |
//! | [`InsertMode`] | Relative insertion position |
//! | [`BlockExecutionResult`] | Continue/break signal plus published data |

/// Block execution results
pub mod execution;
/// Type-erased instances
pub mod instance;
/// Registration identity
pub mod registration;
/// Runtime type identity
pub mod type_key;

pub use execution::{ActionAfterExecution, BlockExecutionResult};
pub use instance::Instance;
pub use registration::{InsertMode, RegistrationKey};
pub use type_key::TypeKey;
