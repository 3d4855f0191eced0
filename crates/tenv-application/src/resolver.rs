//! Default resolver
//!
//! Used whenever an environment has no resolver configured.

use tenv_domain::{Instance, Resolver, TypeKey};

/// Resolver that never resolves anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl Resolver for NullResolver {
    fn try_resolve(&self, _key: &TypeKey) -> Option<Instance> {
        None
    }
}
