//! Construction contexts for tests and wrappers

use super::Test;
use super::options::WrapperOptions;
use crate::dependencies::Dependencies;
use crate::environment::TestEnvironment;
use std::sync::Arc;
use tenv_domain::{Resolver, Result};

/// What a test constructor can see
///
/// Lookups go through the environment's resolver.
pub struct TestContext<'a, O> {
    environment: &'a TestEnvironment,
    options: &'a O,
    resolver: Arc<dyn Resolver>,
    target: &'static str,
}

impl<'a, O: WrapperOptions> TestContext<'a, O> {
    pub(crate) fn new(
        environment: &'a TestEnvironment,
        options: &'a O,
        resolver: Arc<dyn Resolver>,
        target: &'static str,
    ) -> Self {
        Self {
            environment,
            options,
            resolver,
            target,
        }
    }

    /// Environment the test is created from
    pub fn environment(&self) -> &TestEnvironment {
        self.environment
    }

    /// Final options, environment wrappers included
    pub fn options(&self) -> &O {
        self.options
    }

    /// Environment resolver
    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    /// Resolve a required constructor parameter
    pub fn required<T: ?Sized + Send + Sync + 'static>(&self, parameter: &str) -> Result<Arc<T>> {
        Dependencies::new(self.target, &[], &self.resolver).required::<T>(parameter)
    }

    /// Resolve an optional constructor parameter
    pub fn optional<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Dependencies::new(self.target, &[], &self.resolver).optional::<T>()
    }

    /// Base test bound to these options and a fresh resolver scope
    pub fn test(&self) -> Test {
        Test::new(&self.resolver, self.options)
    }
}

/// What a wrapper constructor can see
///
/// Lookups go through the test's resolver scope.
pub struct WrapperContext<'a> {
    test: &'a Test,
    deps: Dependencies<'a>,
}

impl<'a> WrapperContext<'a> {
    pub(crate) fn new(test: &'a Test, target: &'static str) -> Self {
        Self {
            test,
            deps: Dependencies::new(target, &[], test.resolver()),
        }
    }

    /// The test being wrapped
    pub fn test(&self) -> &Test {
        self.test
    }

    /// Resolve a required constructor parameter from the test scope
    pub fn required<T: ?Sized + Send + Sync + 'static>(&self, parameter: &str) -> Result<Arc<T>> {
        self.deps.required::<T>(parameter)
    }

    /// Resolve an optional constructor parameter from the test scope
    pub fn optional<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.deps.optional::<T>()
    }
}
