//! Test Wrapper Port
//!
//! Wrappers bracket a single test: `begin` runs when the test is created,
//! `finish` when the test is disposed. They are declared by type and
//! instantiated per test against the test's resolver scope.

use crate::lifecycle::WrapperContext;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tenv_domain::{Result, TypeKey};

/// Per-test begin/finish hooks
#[async_trait]
pub trait TestWrapper: Send + Sync + 'static {
    /// Called once, in declaration order, while the test is created
    async fn begin(&self) -> Result<()>;

    /// Called once, in begin order, while the test is disposed
    async fn finish(&self) -> Result<()>;
}

/// Explicit constructor of a wrapper
pub trait WrapperConstruct: TestWrapper + Sized {
    /// Build the wrapper for the test exposed by `ctx`
    fn construct(ctx: &WrapperContext<'_>) -> Result<Self>;
}

type WrapperFactory = fn(&WrapperContext<'_>) -> Result<Arc<dyn TestWrapper>>;

/// Declared wrapper type
///
/// Two declarations are equal iff they name the same wrapper type.
#[derive(Clone, Copy)]
pub struct WrapperType {
    key: TypeKey,
    factory: WrapperFactory,
}

impl WrapperType {
    /// Declaration of wrapper `W`
    pub fn of<W: WrapperConstruct>() -> Self {
        Self {
            key: TypeKey::of::<W>(),
            factory: instantiate::<W>,
        }
    }

    /// Type identity of the wrapper
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Whether this declares `W`
    pub fn is<W: 'static>(&self) -> bool {
        self.key.is::<W>()
    }

    pub(crate) fn instantiate(&self, ctx: &WrapperContext<'_>) -> Result<Arc<dyn TestWrapper>> {
        (self.factory)(ctx)
    }
}

fn instantiate<W: WrapperConstruct>(ctx: &WrapperContext<'_>) -> Result<Arc<dyn TestWrapper>> {
    Ok(Arc::new(W::construct(ctx)?))
}

impl PartialEq for WrapperType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for WrapperType {}

impl fmt::Debug for WrapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WrapperType").field(&self.key).finish()
    }
}
