//! Disposal Port
//!
//! Anything tracked by an environment and released when it is disposed.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Resource released at environment teardown
#[async_trait]
pub trait Dispose: Send + Sync {
    /// Release the resource
    async fn dispose(&self) -> Result<()>;
}

/// Disposable running a closure on every `dispose` call
pub struct DisposableAction {
    action: Box<dyn Fn() + Send + Sync>,
}

impl DisposableAction {
    /// Wrap `action`
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }
}

#[async_trait]
impl Dispose for DisposableAction {
    async fn dispose(&self) -> Result<()> {
        (self.action)();
        Ok(())
    }
}

impl fmt::Debug for DisposableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisposableAction").finish_non_exhaustive()
    }
}
