//! Domain layer constants
//!
//! Contains constants used when describing registrations and instances in
//! messages and logs.

/// Display placeholder for an absent mark
pub const NO_MARK: &str = "<null>";

/// Default name of an environment that was not explicitly named
pub const DEFAULT_ENVIRONMENT_NAME: &str = "default";
