//! Test factory
//!
//! `create_test` builds a test type against a built environment: options are
//! seeded with the environment's wrappers, the caller may modify them, the
//! test is constructed and its wrappers are begun before it is returned.

use super::{Test, TestContext, WrapperOptions};
use crate::environment::TestEnvironment;
use tenv_domain::{Error, Result, TypeKey};
use tracing::{debug, warn};

/// A test type the factory can create
///
/// Implementations typically embed the base [`Test`] obtained from
/// [`TestContext::test`] next to whatever they resolve.
pub trait TestCase: Send + Sync + Sized + 'static {
    /// Options accepted by the test
    type Options: WrapperOptions;

    /// Build the test
    fn construct(ctx: &TestContext<'_, Self::Options>) -> Result<Self>;

    /// The embedded base test
    fn test(&self) -> &Test;
}

impl TestCase for Test {
    type Options = super::TestOptions;

    fn construct(ctx: &TestContext<'_, Self::Options>) -> Result<Self> {
        Ok(ctx.test())
    }

    fn test(&self) -> &Test {
        self
    }
}

impl TestEnvironment {
    /// Create a test with the environment's wrappers
    pub async fn create_test<T: TestCase>(&self) -> Result<T> {
        self.create_test_with::<T, _>(|_| {}).await
    }

    /// Create a test, letting `modify` adjust its options first
    ///
    /// Fails with [`Error::NotBuilt`] before `build`. When a wrapper fails
    /// to begin, the wrappers already begun are finished and the begin
    /// failure is returned.
    pub async fn create_test_with<T, F>(&self, modify: F) -> Result<T>
    where
        T: TestCase,
        F: FnOnce(&mut T::Options),
    {
        if !self.is_built() {
            return Err(Error::NotBuilt);
        }

        let mut options = T::Options::default();
        for wrapper in self.wrappers() {
            options.wrap_type(wrapper);
        }
        modify(&mut options);

        let target = TypeKey::of::<T>().name();
        let test = {
            let ctx = TestContext::new(self, &options, self.resolver(), target);
            T::construct(&ctx)?
        };

        debug!(
            test = target,
            wrappers = test.test().wrappers().len(),
            "Creating test"
        );

        if let Err(e) = test.test().begin_wrappers().await {
            warn!(test = target, error = %e, "Test wrapper failed to begin");
            if let Err(finish) = test.test().finish_wrappers().await {
                warn!(test = target, error = %finish, "Failed to finish begun wrappers");
            }
            return Err(e);
        }

        Ok(test)
    }
}
