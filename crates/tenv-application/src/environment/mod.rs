//! Test Environment
//!
//! The environment owns the ordered block pipeline, the environment-level
//! wrapper declarations, the resolver and every disposable created while it
//! was built.
//!
//! ## Lifecycle
//!
//! ```text
//! configure (add/insert/update/replace/remove, wrap/unwrap)
//!     │
//!     ▼
//! build(data) ── registry frozen, blocks run in order
//!     │
//!     ▼
//! create_test::<T>() ── any number of times
//!     │
//!     ▼
//! dispose() ── end hooks, disposables, resolver
//! ```
//!
//! [`TestEnvironment`] is a cheap handle; clones share the same state.

mod build;
mod dispose;
mod registration;
mod registry;

pub use registration::Setup;

use crate::ports::{Block, TestWrapper, WrapperConstruct, WrapperType};
use crate::resolver::NullResolver;
use parking_lot::{Mutex, RwLock};
use registration::Registration;
use std::fmt;
use std::sync::Arc;
use tenv_domain::constants::DEFAULT_ENVIRONMENT_NAME;
use tenv_domain::{Dispose, RegistrationKey, Resolver, TypeKey};

/// Block realized during build, in execution order
#[derive(Clone)]
pub struct RealizedBlock {
    key: RegistrationKey,
    block: Arc<dyn Block>,
}

impl RealizedBlock {
    /// Registration the block was built from
    pub fn key(&self) -> &RegistrationKey {
        &self.key
    }

    /// The block instance
    pub fn block(&self) -> &Arc<dyn Block> {
        &self.block
    }
}

impl fmt::Debug for RealizedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RealizedBlock").field(&self.key).finish()
    }
}

#[derive(Default)]
struct RegistryState {
    built: bool,
    registrations: Vec<Arc<dyn Registration>>,
}

struct EnvironmentInner {
    name: String,
    state: Mutex<RegistryState>,
    wrappers: Mutex<Vec<WrapperType>>,
    resolver: RwLock<Option<Arc<dyn Resolver>>>,
    blocks: Mutex<Vec<RealizedBlock>>,
    disposables: Mutex<Vec<Arc<dyn Dispose>>>,
}

/// Ordered block pipeline plus everything it created
#[derive(Clone)]
pub struct TestEnvironment {
    inner: Arc<EnvironmentInner>,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    /// Empty environment named `default`
    pub fn new() -> Self {
        Self::named(DEFAULT_ENVIRONMENT_NAME)
    }

    /// Empty environment with a name used in logs
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            inner: Arc::new(EnvironmentInner {
                name: name.into(),
                state: Mutex::new(RegistryState::default()),
                wrappers: Mutex::new(Vec::new()),
                resolver: RwLock::new(None),
                blocks: Mutex::new(Vec::new()),
                disposables: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Name used in logs
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether `build` was called
    pub fn is_built(&self) -> bool {
        self.inner.state.lock().built
    }

    /// Configured resolver, or a resolver that never resolves
    pub fn resolver(&self) -> Arc<dyn Resolver> {
        self.inner
            .resolver
            .read()
            .clone()
            .unwrap_or_else(|| Arc::new(NullResolver))
    }

    /// Replace the resolver
    pub fn set_resolver(&self, resolver: Arc<dyn Resolver>) -> &Self {
        *self.inner.resolver.write() = Some(resolver);
        self
    }

    /// Declare wrapper `W` for every test created from now on
    pub fn wrap<W: WrapperConstruct>(&self) -> &Self {
        self.wrap_type(WrapperType::of::<W>())
    }

    /// Declare a wrapper for every test created from now on
    pub fn wrap_type(&self, wrapper: WrapperType) -> &Self {
        self.inner.wrappers.lock().push(wrapper);
        self
    }

    /// Remove the first declaration of wrapper `W`
    pub fn unwrap<W: TestWrapper>(&self) -> &Self {
        self.unwrap_type(&TypeKey::of::<W>())
    }

    /// Remove the first declaration of the wrapper identified by `key`
    pub fn unwrap_type(&self, key: &TypeKey) -> &Self {
        let mut wrappers = self.inner.wrappers.lock();
        if let Some(index) = wrappers.iter().position(|w| w.key() == key) {
            wrappers.remove(index);
        }
        self
    }

    /// Environment-level wrapper declarations, in declaration order
    pub fn wrappers(&self) -> Vec<WrapperType> {
        self.inner.wrappers.lock().clone()
    }

    /// Track a disposable released together with the environment
    ///
    /// The same object is tracked at most once.
    pub fn add_disposable(&self, disposable: Arc<dyn Dispose>) -> &Self {
        let mut disposables = self.inner.disposables.lock();
        if !disposables.iter().any(|d| same_object(d, &disposable)) {
            disposables.push(disposable);
        }
        self
    }

    /// Number of tracked disposables
    pub fn disposable_count(&self) -> usize {
        self.inner.disposables.lock().len()
    }

    /// Blocks realized by `build`, in execution order
    pub fn blocks(&self) -> Vec<RealizedBlock> {
        self.inner.blocks.lock().clone()
    }

    /// First realized block of type `B`
    pub fn block<B: Block>(&self) -> Option<Arc<B>> {
        self.inner
            .blocks
            .lock()
            .iter()
            .find(|realized| realized.key.is::<B>())
            .and_then(|realized| Arc::clone(&realized.block).downcast_arc::<B>().ok())
    }

    /// Realized block of type `B` registered under `mark`
    pub fn block_marked<B: Block>(&self, mark: Option<&str>) -> Option<Arc<B>> {
        let key = RegistrationKey::of::<B>(mark);
        self.inner
            .blocks
            .lock()
            .iter()
            .find(|realized| realized.key == key)
            .and_then(|realized| Arc::clone(&realized.block).downcast_arc::<B>().ok())
    }
}

impl fmt::Debug for TestEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEnvironment")
            .field("name", &self.inner.name)
            .field("registrations", &self.registrations())
            .field("built", &self.is_built())
            .finish_non_exhaustive()
    }
}

fn same_object(a: &Arc<dyn Dispose>, b: &Arc<dyn Dispose>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
