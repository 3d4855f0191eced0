//! # tenv
//!
//! Composable test environments: an ordered pipeline of fixture blocks is
//! built once, then any number of tests are created from it, each bracketed
//! by its own wrappers.
//!
//! ## Example
//!
//! ```ignore
//! use tenv::prelude::*;
//!
//! struct SeedUsers;
//!
//! impl Construct for SeedUsers {
//!     fn construct(_deps: &Dependencies<'_>) -> Result<Self> {
//!         Ok(Self)
//!     }
//! }
//!
//! #[async_trait]
//! impl Block for SeedUsers {
//!     async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
//!         Ok(BlockExecutionResult::new_continue(vec![Instance::from_value(vec!["ada"])]))
//!     }
//! }
//!
//! let env = TestEnvironment::new();
//! env.add::<SeedUsers>()?;
//! env.build(Vec::new()).await?;
//! let test = env.create_test::<Test>().await?;
//! test.dispose().await?;
//! env.dispose().await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, value objects and the resolver port
//! - `application` - block registry, build engine, test factory, wrappers
//! - `infrastructure` - configuration, logging and the dill resolver

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tenv_domain::*;
}

/// Application layer - the engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tenv_application::*;
}

/// Infrastructure layer - config, logging and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tenv_infrastructure::*;
}

/// Everything needed to write blocks, wrappers and tests
pub mod prelude {
    pub use async_trait::async_trait;
    pub use tenv_application::{
        Block, Construct, Dependencies, Test, TestCase, TestContext, TestEnvironment,
        TestOptions, TestWrapper, WrapperConstruct, WrapperContext, WrapperOptions,
        WrapperType,
    };
    pub use tenv_domain::{
        ActionAfterExecution, BlockExecutionResult, DisposableAction, Dispose, Error,
        InsertMode, Instance, Resolver, ResolverExt, Result,
    };
}

// Re-export commonly used types at the crate root
pub use application::{Test, TestEnvironment};
pub use domain::{Error, Result};
pub use infrastructure::{CatalogResolver, ConfigLoader, environment_from_config};
