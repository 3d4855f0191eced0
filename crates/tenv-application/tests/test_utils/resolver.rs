//! Map-backed resolver with optional child scopes

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tenv_domain::{Error, Instance, Resolver, Result, TypeKey};

#[derive(Clone, Default)]
pub struct MapResolver {
    instances: HashMap<TypeKey, Instance>,
    scoped: bool,
    failing_dispose: bool,
    disposals: Arc<AtomicUsize>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shared<T: ?Sized + Send + Sync + 'static>(mut self, value: Arc<T>) -> Self {
        let instance = Instance::new(value);
        self.instances.insert(*instance.key(), instance);
        self
    }

    pub fn with_value<T: Send + Sync + 'static>(self, value: T) -> Self {
        self.with_shared(Arc::new(value))
    }

    /// Hand out child scopes sharing the same instances
    pub fn scoped(mut self) -> Self {
        self.scoped = true;
        self
    }

    /// Make every `dispose` call fail after counting it
    pub fn failing_dispose(mut self) -> Self {
        self.failing_dispose = true;
        self
    }

    /// Number of `dispose` calls across this resolver and its scopes
    pub fn disposals(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.disposals)
    }
}

#[async_trait::async_trait]
impl Resolver for MapResolver {
    fn try_resolve(&self, key: &TypeKey) -> Option<Instance> {
        self.instances.get(key).cloned()
    }

    fn create_scope(&self) -> Option<Arc<dyn Resolver>> {
        if self.scoped {
            Some(Arc::new(Self {
                scoped: false,
                ..self.clone()
            }))
        } else {
            None
        }
    }

    async fn dispose(&self) -> Result<()> {
        self.disposals.fetch_add(1, Ordering::SeqCst);
        if self.failing_dispose {
            return Err(Error::execution("resolver release failed"));
        }
        Ok(())
    }
}
