//! Integration tests demonstrating how to use a container WITHOUT the macro.
//!
//! Implementing `ContainerApi` by hand only needs the two accessors; every
//! operation comes from the trait's default methods.
//!
//! NOTE: All tests use #[serial] because they share the same static container (MY_CONTAINER).

use binding_registry::{ContainerApi, ContainerEvent, Registry, TraceSlot};
use serial_test::serial;
use std::sync::{Arc, LazyLock};

// ============================================================================
// Manual Container Implementation (Without Macro)
// ============================================================================

#[derive(Default)]
struct MyContainer {
    registry: Registry,
    trace: TraceSlot,
}

impl ContainerApi for MyContainer {
    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn trace(&self) -> &TraceSlot {
        &self.trace
    }
}

static MY_CONTAINER: LazyLock<MyContainer> = LazyLock::new(MyContainer::default);

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
#[serial]
fn test_basic_singleton_and_resolve() {
    MY_CONTAINER.singleton(|| 42i32).unwrap();

    let value: i32 = MY_CONTAINER.resolve().unwrap();
    assert_eq!(value, 42);
}

#[test]
#[serial]
fn test_register_multiple_types() {
    MY_CONTAINER
        .singleton(|| (100u32, "Hello".to_string(), 3.5f64))
        .unwrap();

    let num: u32 = MY_CONTAINER.resolve().unwrap();
    let text: String = MY_CONTAINER.resolve().unwrap();
    let ratio: f64 = MY_CONTAINER.resolve().unwrap();

    assert_eq!(num, 100);
    assert_eq!(text, "Hello");
    assert_eq!(ratio, 3.5);
}

#[test]
#[serial]
fn test_contains_check() {
    MY_CONTAINER.singleton(|| 999i64).unwrap();

    assert!(MY_CONTAINER.contains::<i64>().unwrap());
    assert!(!MY_CONTAINER.contains::<i8>().unwrap());
}

#[test]
#[serial]
fn test_factory_and_call() {
    MY_CONTAINER.singleton(|| 7u16).unwrap();
    MY_CONTAINER.factory(|port: u16| format!("port-{port}")).unwrap();

    let label = MY_CONTAINER.call(|label: String| label.len()).unwrap();
    assert_eq!(label, 6);
}

#[test]
#[serial]
fn test_with_tracing() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let event_count = Arc::new(AtomicUsize::new(0));
    let event_count_clone = Arc::clone(&event_count);

    MY_CONTAINER.set_trace_callback(move |_event: &ContainerEvent| {
        event_count_clone.fetch_add(1, Ordering::SeqCst);
    });

    MY_CONTAINER.singleton(|| 777i32).unwrap(); // bind
    let _: i32 = MY_CONTAINER.resolve().unwrap(); // resolve
    MY_CONTAINER.contains::<i32>().unwrap(); // contains

    assert_eq!(event_count.load(Ordering::SeqCst), 3);

    MY_CONTAINER.clear_trace_callback();
}

#[test]
#[serial]
fn test_trait_object() {
    trait Service: Send + Sync {
        fn name(&self) -> &str;
    }

    struct MyService;
    impl Service for MyService {
        fn name(&self) -> &str {
            "MyService"
        }
    }

    MY_CONTAINER
        .singleton(|| Arc::new(MyService) as Arc<dyn Service>)
        .unwrap();

    let retrieved: Arc<dyn Service> = MY_CONTAINER.resolve().unwrap();
    assert_eq!(retrieved.name(), "MyService");
}

#[test]
#[serial]
fn test_clear() {
    MY_CONTAINER.singleton(|| 'c').unwrap();
    assert!(!MY_CONTAINER.is_empty());

    MY_CONTAINER.clear();
    assert!(MY_CONTAINER.is_empty());
    assert!(MY_CONTAINER.resolve::<char>().is_err());
}
