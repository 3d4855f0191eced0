//! Configuration management
//!
//! `tenv.toml` plus `TENV_`-prefixed environment variables, merged over
//! defaults with figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, EnvironmentConfig, LoggingConfig};
