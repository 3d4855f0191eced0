//! Wrapper options
//!
//! Options carry the wrapper declarations a test is created with. The
//! environment seeds them from its own declarations before the caller's
//! modification runs.

use crate::ports::{TestWrapper, WrapperConstruct, WrapperType};
use tenv_domain::TypeKey;

/// Options type accepted by a test
///
/// Custom tests may define richer options; they only have to expose the
/// wrapper list.
pub trait WrapperOptions: Default + Send + Sync + 'static {
    /// Declare a wrapper; declaring the same type twice has no effect
    fn wrap_type(&mut self, wrapper: WrapperType) -> &mut Self;

    /// Drop the declaration identified by `key`
    fn unwrap_type(&mut self, key: &TypeKey) -> &mut Self;

    /// Declared wrappers, in declaration order
    fn wrappers(&self) -> &[WrapperType];

    /// Declare wrapper `W`
    fn wrap<W: WrapperConstruct>(&mut self) -> &mut Self {
        self.wrap_type(WrapperType::of::<W>())
    }

    /// Drop the declaration of wrapper `W`
    fn unwrap<W: TestWrapper>(&mut self) -> &mut Self {
        self.unwrap_type(&TypeKey::of::<W>())
    }
}

/// Default options: an ordered, duplicate-free wrapper list
#[derive(Debug, Default, Clone)]
pub struct TestOptions {
    wrappers: Vec<WrapperType>,
}

impl TestOptions {
    /// Options without wrappers
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`WrapperOptions::wrap`]
    #[must_use]
    pub fn with<W: WrapperConstruct>(mut self) -> Self {
        self.wrap::<W>();
        self
    }
}

impl WrapperOptions for TestOptions {
    fn wrap_type(&mut self, wrapper: WrapperType) -> &mut Self {
        if !self.wrappers.contains(&wrapper) {
            self.wrappers.push(wrapper);
        }
        self
    }

    fn unwrap_type(&mut self, key: &TypeKey) -> &mut Self {
        self.wrappers.retain(|w| w.key() != key);
        self
    }

    fn wrappers(&self) -> &[WrapperType] {
        &self.wrappers
    }
}
