//! Tests and their wrapper lifecycle
//!
//! A [`Test`] owns one resolver scope and the wrappers declared for it.
//!
//! ```text
//! create_test ── Test::new ── begin_wrappers (declaration order)
//!                                  │
//!                              test body
//!                                  │
//! dispose ─────── finish_wrappers (begin order) ── release scope
//! ```
//!
//! A test whose wrappers were finished can be begun again.

mod context;
mod factory;
mod options;

pub use context::{TestContext, WrapperContext};
pub use factory::TestCase;
pub use options::{TestOptions, WrapperOptions};

use crate::dependencies::Dependencies;
use crate::ports::{Construct, TestWrapper, WrapperType};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tenv_domain::{Error, Resolver, ResolverExt, Result, TypeKey};
use tracing::{debug, warn};

struct TestInner {
    scope: Arc<dyn Resolver>,
    owns_scope: bool,
    wrappers: Vec<WrapperType>,
    live: Mutex<VecDeque<Arc<dyn TestWrapper>>>,
    scope_released: AtomicBool,
}

/// One test: a resolver scope plus its wrappers
#[derive(Clone)]
pub struct Test {
    inner: Arc<TestInner>,
}

impl Test {
    /// Test bound to a new scope of `resolver` and the wrappers in `options`
    ///
    /// When the resolver has no scopes the test shares it and never disposes
    /// it.
    pub fn new<O: WrapperOptions>(resolver: &Arc<dyn Resolver>, options: &O) -> Self {
        let (scope, owns_scope) = match resolver.create_scope() {
            Some(scope) => (scope, true),
            None => (Arc::clone(resolver), false),
        };
        Self {
            inner: Arc::new(TestInner {
                scope,
                owns_scope,
                wrappers: options.wrappers().to_vec(),
                live: Mutex::new(VecDeque::new()),
                scope_released: AtomicBool::new(false),
            }),
        }
    }

    /// The test's resolver scope
    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.inner.scope
    }

    /// Declared wrappers, in declaration order
    pub fn wrappers(&self) -> &[WrapperType] {
        &self.inner.wrappers
    }

    /// Number of begun wrappers not finished yet
    pub fn live_wrappers(&self) -> usize {
        self.inner.live.lock().len()
    }

    /// Look up `T` in the test scope
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.inner.scope.get::<T>()
    }

    /// Look up `T` in the test scope, constructing it when the scope has none
    pub fn resolve<T: Construct>(&self) -> Result<Arc<T>> {
        if let Some(found) = self.get::<T>() {
            return Ok(found);
        }
        let deps = Dependencies::new(TypeKey::of::<T>().name(), &[], &self.inner.scope);
        T::construct(&deps).map(Arc::new)
    }

    /// Construct and begin every declared wrapper, in declaration order
    ///
    /// The first failure aborts the remaining wrappers. Wrappers begun
    /// before the failure stay live and are finished by
    /// [`Test::finish_wrappers`].
    pub async fn begin_wrappers(&self) -> Result<()> {
        for declared in &self.inner.wrappers {
            let wrapper = {
                let ctx = WrapperContext::new(self, declared.key().name());
                declared.instantiate(&ctx)?
            };
            self.inner.live.lock().push_back(Arc::clone(&wrapper));
            debug!(wrapper = %declared.key(), "Beginning test wrapper");
            wrapper.begin().await?;
        }
        Ok(())
    }

    /// Finish every live wrapper, in begin order
    ///
    /// Every wrapper is finished even when an earlier one fails; failures
    /// are returned together as [`Error::WrapperAggregate`].
    pub async fn finish_wrappers(&self) -> Result<()> {
        let mut errors = Vec::new();
        loop {
            let next = self.inner.live.lock().pop_front();
            let Some(wrapper) = next else { break };
            if let Err(e) = wrapper.finish().await {
                warn!(error = %e, "Test wrapper failed to finish");
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::WrapperAggregate { errors })
        }
    }

    /// Finish the wrappers, then release the resolver scope
    ///
    /// The scope is released even when a wrapper fails, and only once. A
    /// failed release joins the wrapper failures in
    /// [`Error::WrapperAggregate`].
    pub async fn dispose(&self) -> Result<()> {
        let mut errors = match self.finish_wrappers().await {
            Ok(()) => Vec::new(),
            Err(Error::WrapperAggregate { errors }) => errors,
            Err(e) => vec![e],
        };

        if self.inner.owns_scope
            && !self.inner.scope_released.swap(true, Ordering::SeqCst)
            && let Err(e) = self.inner.scope.dispose().await
        {
            warn!(error = %e, "Failed to release test scope");
            if errors.is_empty() {
                return Err(e);
            }
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::WrapperAggregate { errors })
        }
    }

    /// Blocking form of [`Test::dispose`]
    pub fn dispose_blocking(&self) -> Result<()> {
        futures::executor::block_on(self.dispose())
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test")
            .field("wrappers", &self.inner.wrappers)
            .field("live", &self.live_wrappers())
            .finish_non_exhaustive()
    }
}
