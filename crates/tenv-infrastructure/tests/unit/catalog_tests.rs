//! dill Catalog Resolver Tests

use dill::CatalogBuilder;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tenv_domain::error::Error;
use tenv_domain::{Resolver, ResolverExt, TypeKey};
use tenv_infrastructure::di::CatalogResolver;

#[derive(Default)]
struct Counter(AtomicUsize);

struct Clock {
    now: u64,
}

struct NotInCatalog;

fn resolver() -> CatalogResolver {
    let catalog = CatalogBuilder::new()
        .add_value(Counter::default())
        .add_value(Clock { now: 1_700_000_000 })
        .build();
    CatalogResolver::new(catalog)
        .expose::<Counter>()
        .expose::<Clock>()
        .expose::<NotInCatalog>()
}

#[test]
fn test_exposed_service_resolves() {
    let resolver = resolver();

    let clock = resolver.get::<Clock>().unwrap();

    assert_eq!(clock.now, 1_700_000_000);
}

#[test]
fn test_resolution_returns_the_catalog_singleton() {
    let resolver = resolver();

    resolver.get::<Counter>().unwrap().0.fetch_add(1, Ordering::SeqCst);
    let again = resolver.get::<Counter>().unwrap();

    assert_eq!(again.0.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unexposed_type_misses() {
    let resolver = resolver();

    assert!(!resolver.exposes(&TypeKey::of::<String>()));
    assert!(resolver.try_resolve(&TypeKey::of::<String>()).is_none());
}

#[test]
fn test_exposed_but_unregistered_type_misses() {
    let resolver = resolver();

    assert!(resolver.exposes(&TypeKey::of::<NotInCatalog>()));
    assert!(matches!(
        resolver.get_required::<NotInCatalog>(),
        Err(Error::Resolution { .. })
    ));
}

#[tokio::test]
async fn test_shared_as_environment_resolver() {
    let resolver: Arc<dyn Resolver> = Arc::new(resolver());

    assert!(resolver.create_scope().is_none());
    assert!(resolver.get::<Clock>().is_some());
    resolver.dispose().await.unwrap();
}

#[test]
fn test_debug_lists_exposed_types() {
    let debug = format!("{:?}", resolver());

    assert!(debug.contains("Clock"));
    assert!(debug.contains("Counter"));
}
