//! Test utilities for tenv-application tests
//!
//! Fixture blocks and wrappers record what they do into a [`Journal`]
//! resolved from a [`MapResolver`], so every test observes only its own
//! environment.

pub mod blocks;
pub mod resolver;

pub use blocks::*;
pub use resolver::*;
pub use wrappers::*;

use parking_lot::Mutex;
use std::sync::Arc;
use tenv_application::TestEnvironment;

/// Ordered record of fixture activity
#[derive(Default)]
pub struct Journal(Mutex<Vec<String>>);

impl Journal {
    pub fn record<S: Into<String>>(&self, entry: S) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// Environment whose resolver exposes a fresh journal
pub fn journaled_environment() -> (TestEnvironment, Arc<Journal>) {
    let journal = Arc::new(Journal::default());
    let resolver = MapResolver::new().with_shared(Arc::clone(&journal));
    let environment = TestEnvironment::named("unit");
    environment.set_resolver(Arc::new(resolver));
    (environment, journal)
}
