//! Constructor dependency lookup
//!
//! Blocks, tests and wrappers are built through explicit constructors that
//! pull what they need from a [`Dependencies`] view. Lookups search the
//! instances published so far, newest first, and fall back to the resolver.

use std::sync::Arc;
use tenv_domain::{Error, Instance, Resolver, Result, TypeKey};

/// Read-only view over published data and the resolver
pub struct Dependencies<'a> {
    target: &'static str,
    published: &'a [Instance],
    resolver: &'a Arc<dyn Resolver>,
}

impl<'a> Dependencies<'a> {
    pub(crate) fn new(
        target: &'static str,
        published: &'a [Instance],
        resolver: &'a Arc<dyn Resolver>,
    ) -> Self {
        Self {
            target,
            published,
            resolver,
        }
    }

    /// Type name of the value being constructed
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Resolver backing lookups that miss the published data
    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        self.resolver
    }

    /// Look up `T`, failing with [`Error::Resolution`] on miss
    ///
    /// `parameter` names the constructor parameter in the error.
    pub fn required<T: ?Sized + Send + Sync + 'static>(&self, parameter: &str) -> Result<Arc<T>> {
        if let Some(found) = self.published::<T>() {
            return Ok(found);
        }
        let key = TypeKey::of::<T>();
        self.resolver
            .resolve(&key, true)
            .ok()
            .flatten()
            .and_then(|instance| instance.downcast::<T>())
            .ok_or_else(|| Error::resolution(self.target, parameter, key.name()))
    }

    /// Look up `T`, `None` on miss
    pub fn optional<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.published::<T>().or_else(|| {
            self.resolver
                .try_resolve(&TypeKey::of::<T>())
                .and_then(|instance| instance.downcast::<T>())
        })
    }

    fn published<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.published
            .iter()
            .rev()
            .find(|instance| instance.is::<T>())
            .and_then(Instance::downcast::<T>)
    }
}
