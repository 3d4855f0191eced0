//! Dependency injection
//!
//! Adapts a dill [`Catalog`](dill::Catalog) to the engine's resolver port.

pub mod catalog;

pub use catalog::CatalogResolver;
