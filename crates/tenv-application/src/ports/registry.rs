//! Wrapper Registry
//!
//! Auto-registration of named wrappers using linkme distributed slices.
//! Configuration refers to wrappers by name; the names are resolved here at
//! bootstrap.
//!
//! ## Registration
//!
//! ```ignore
//! #[linkme::distributed_slice(WRAPPERS)]
//! static TRANSACTION: WrapperEntry = WrapperEntry {
//!     name: "transaction",
//!     description: "Rolls back the database after each test",
//!     wrapper: WrapperType::of::<TransactionWrapper>,
//! };
//! ```

use super::WrapperType;
use tenv_domain::{Error, Result};

/// Registry entry for a named wrapper
pub struct WrapperEntry {
    /// Unique name used in configuration
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declaration of the wrapper type
    pub wrapper: fn() -> WrapperType,
}

#[linkme::distributed_slice]
pub static WRAPPERS: [WrapperEntry] = [..];

/// Resolve a wrapper declaration by its registered name
///
/// # Errors
///
/// Returns a configuration error listing the known names when `name` is not
/// registered.
pub fn resolve_wrapper(name: &str) -> Result<WrapperType> {
    for entry in WRAPPERS {
        if entry.name == name {
            return Ok((entry.wrapper)());
        }
    }

    let available: Vec<&str> = WRAPPERS.iter().map(|e| e.name).collect();

    Err(Error::configuration(format!(
        "Unknown wrapper '{name}'. Available wrappers: {available:?}"
    )))
}

/// List all registered wrappers as `(name, description)` pairs
pub fn list_wrappers() -> Vec<(&'static str, &'static str)> {
    WRAPPERS.iter().map(|e| (e.name, e.description)).collect()
}
