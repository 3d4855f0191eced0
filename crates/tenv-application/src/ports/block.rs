//! Block Port
//!
//! A block is one stage of the build pipeline. Blocks are constructed by the
//! engine right before they execute, receive the environment on execution
//! and may publish data consumed by every later block.

use crate::dependencies::Dependencies;
use crate::environment::TestEnvironment;
use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};
use std::sync::Arc;
use tenv_domain::{BlockExecutionResult, Dispose, Result};

/// One stage of the fixture pipeline
///
/// # Example
///
/// ```ignore
/// struct SeedUsers {
///     db: Arc<dyn Database>,
/// }
///
/// impl Construct for SeedUsers {
///     fn construct(deps: &Dependencies<'_>) -> Result<Self> {
///         Ok(Self { db: deps.required::<dyn Database>("db")? })
///     }
/// }
///
/// #[async_trait]
/// impl Block for SeedUsers {
///     async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
///         let users = self.db.insert_users().await?;
///         Ok(BlockExecutionResult::new_continue(vec![Instance::from_value(users)]))
///     }
/// }
/// ```
#[async_trait]
pub trait Block: DowncastSync {
    /// Run the stage and tell the engine whether to continue
    async fn execute(&self, env: &TestEnvironment) -> Result<BlockExecutionResult>;

    /// End-of-life hook, run when the environment is disposed
    async fn execute_at_the_end(&self, _env: &TestEnvironment) -> Result<()> {
        Ok(())
    }

    /// Disposal capability of the block itself
    ///
    /// Blocks returning `Some` are disposed with the environment.
    fn as_disposable(self: Arc<Self>) -> Option<Arc<dyn Dispose>> {
        None
    }
}

impl_downcast!(sync Block);

/// Explicit constructor
///
/// Dependencies are looked up among the instances published so far
/// (newest first) and then through the environment's resolver.
pub trait Construct: Sized + Send + Sync + 'static {
    /// Build the value from its dependencies
    fn construct(deps: &Dependencies<'_>) -> Result<Self>;
}
