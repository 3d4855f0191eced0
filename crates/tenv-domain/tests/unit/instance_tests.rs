//! Unit tests for type-erased instances

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tenv_domain::{Dispose, Instance, Result, TypeKey};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_owned()
    }
}

#[derive(Default)]
struct Connection {
    closed: AtomicUsize,
}

#[async_trait]
impl Dispose for Connection {
    async fn dispose(&self) -> Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_downcast_to_own_type() {
    let instance = Instance::from_value(42_i64);

    assert!(instance.is::<i64>());
    assert_eq!(*instance.downcast::<i64>().unwrap(), 42);
    assert!(instance.downcast::<i32>().is_none());
}

#[test]
fn test_trait_object_instance() {
    let greeter: Arc<dyn Greeter> = Arc::new(English);
    let instance = Instance::new(greeter);

    assert_eq!(instance.key(), &TypeKey::of::<dyn Greeter>());
    assert!(!instance.is::<English>());
    assert_eq!(instance.downcast::<dyn Greeter>().unwrap().greet(), "hello");
}

#[test]
fn test_plain_instance_has_no_disposer() {
    assert!(Instance::from_value("x".to_owned()).disposer().is_none());
}

#[tokio::test]
async fn test_disposable_instance_shares_object() {
    let connection = Arc::new(Connection::default());
    let instance = Instance::disposable(Arc::clone(&connection));

    instance.disposer().unwrap().dispose().await.unwrap();

    assert_eq!(connection.closed.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(
        &instance.downcast::<Connection>().unwrap(),
        &connection
    ));
}

#[test]
fn test_debug_reports_key_and_disposability() {
    let debug = format!("{:?}", Instance::from_value(1_u8));
    assert!(debug.contains("u8"));
    assert!(debug.contains("disposable: false"));
}
