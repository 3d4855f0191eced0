//! dill Catalog resolver
//!
//! The engine looks services up by [`TypeKey`]; dill looks them up by static
//! type. Every type a test environment may ask for is exposed once, which
//! records a typed `get_one` call under its key.
//!
//! ## Architecture
//!
//! ```text
//! CatalogBuilder::add_value(service)
//!            ↓
//! CatalogResolver::new(catalog).expose::<Service>()
//!            ↓
//! Resolver::try_resolve(TypeKey::of::<Service>())
//!            ↓
//! Catalog::get_one::<Service>()
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = CatalogBuilder::new().add_value(Database::in_memory()).build();
//! let resolver = CatalogResolver::new(catalog).expose::<Database>();
//! env.set_resolver(Arc::new(resolver));
//! ```

use dill::Catalog;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tenv_domain::{Instance, Resolver, TypeKey};
use tracing::debug;

type Lookup = Arc<dyn Fn(&Catalog) -> Option<Instance> + Send + Sync>;

/// Resolver backed by a dill catalog
#[derive(Clone)]
pub struct CatalogResolver {
    catalog: Catalog,
    exposed: HashMap<TypeKey, Lookup>,
}

impl CatalogResolver {
    /// Resolver exposing nothing yet
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            exposed: HashMap::new(),
        }
    }

    /// Make `T` resolvable through the catalog
    #[must_use]
    pub fn expose<T: ?Sized + Send + Sync + 'static>(mut self) -> Self {
        let lookup: Lookup = Arc::new(|catalog: &Catalog| match catalog.get_one::<T>() {
            Ok(service) => Some(Instance::new(service)),
            Err(e) => {
                debug!(service = std::any::type_name::<T>(), error = %e, "Catalog lookup failed");
                None
            }
        });
        self.exposed.insert(TypeKey::of::<T>(), lookup);
        self
    }

    /// Underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether `key` was exposed
    pub fn exposes(&self, key: &TypeKey) -> bool {
        self.exposed.contains_key(key)
    }
}

impl Resolver for CatalogResolver {
    fn try_resolve(&self, key: &TypeKey) -> Option<Instance> {
        self.exposed
            .get(key)
            .and_then(|lookup| lookup(&self.catalog))
    }
}

impl fmt::Debug for CatalogResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exposed: Vec<_> = self.exposed.keys().map(TypeKey::name).collect();
        exposed.sort_unstable();
        f.debug_struct("CatalogResolver")
            .field("exposed", &exposed)
            .finish_non_exhaustive()
    }
}
