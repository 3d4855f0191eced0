//! Resolver Port
//!
//! Defines the contract of the external dependency resolver the engine
//! delegates type-to-instance lookups to. The engine never implements type
//! resolution itself; it only consumes this port.

use crate::error::{Error, Result};
use crate::value_objects::{Instance, TypeKey};
use async_trait::async_trait;
use std::sync::Arc;

/// External dependency resolver
///
/// Implementations are shared read-only by the engine; a resolver is only
/// swapped through the environment's explicit setter.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Look up an instance published under `key`, `None` on miss
    fn try_resolve(&self, key: &TypeKey) -> Option<Instance>;

    /// Look up an instance, failing on miss when `required` is set
    fn resolve(&self, key: &TypeKey, required: bool) -> Result<Option<Instance>> {
        match self.try_resolve(key) {
            Some(instance) => Ok(Some(instance)),
            None if required => Err(Error::resolution("resolver", "service", key.name())),
            None => Ok(None),
        }
    }

    /// Open a child scope for one test
    ///
    /// `None` means the scope shares this resolver.
    fn create_scope(&self) -> Option<Arc<dyn Resolver>> {
        None
    }

    /// Release the resolver at environment or scope teardown
    async fn dispose(&self) -> Result<()> {
        Ok(())
    }
}

/// Typed lookups over any [`Resolver`]
pub trait ResolverExt {
    /// Resolve `T`, `None` on miss
    fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>>;

    /// Resolve `T`, failing with [`Error::Resolution`] on miss
    fn get_required<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>>;
}

impl<R: Resolver + ?Sized> ResolverExt for R {
    fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.try_resolve(&TypeKey::of::<T>())
            .and_then(|instance| instance.downcast::<T>())
    }

    fn get_required<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let key = TypeKey::of::<T>();
        self.resolve(&key, true)?
            .and_then(|instance| instance.downcast::<T>())
            .ok_or_else(|| Error::resolution("resolver", "service", key.name()))
    }
}
