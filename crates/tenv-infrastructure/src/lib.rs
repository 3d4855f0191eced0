//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the test environment engine.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration with `TENV_` environment overrides |
//! | [`di`] | dill-backed resolver adapter |
//! | [`bootstrap`] | Environment creation from configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::environment_from_config;
pub use config::{AppConfig, ConfigLoader};
pub use di::CatalogResolver;
pub use error_ext::ErrorContext;
