use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::TypeKey;
use crate::ports::Dispose;

/// Type-erased value published into a build or handed out by a resolver
///
/// The payload is an `Arc<T>` registered under [`TypeKey::of::<T>()`]; an
/// object that should be visible under several types (for instance a
/// concrete struct and a `dyn Trait`) is published once per key.
/// Instances carrying a disposer are tracked by the environment and
/// disposed with it.
#[derive(Clone)]
pub struct Instance {
    key: TypeKey,
    value: Arc<dyn Any + Send + Sync>,
    disposer: Option<Arc<dyn Dispose>>,
}

impl Instance {
    /// Wrap a shared value under its own type key
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            value: Arc::new(value),
            disposer: None,
        }
    }

    /// Wrap an owned value under its own type key
    pub fn from_value<T: Send + Sync + 'static>(value: T) -> Self {
        Self::new(Arc::new(value))
    }

    /// Wrap a value that is disposed together with the environment
    pub fn disposable<T: Dispose + 'static>(value: Arc<T>) -> Self {
        let disposer: Arc<dyn Dispose> = value.clone();
        Self::new(value).with_disposer(disposer)
    }

    /// Attach a disposer to this instance
    #[must_use]
    pub fn with_disposer(mut self, disposer: Arc<dyn Dispose>) -> Self {
        self.disposer = Some(disposer);
        self
    }

    /// Key the instance is published under
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Whether the instance is published under `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.key.is::<T>()
    }

    /// Typed access to the payload
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    /// Disposal capability, if the instance exposes one
    pub fn disposer(&self) -> Option<&Arc<dyn Dispose>> {
        self.disposer.as_ref()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("key", &self.key)
            .field("disposable", &self.disposer.is_some())
            .finish()
    }
}
