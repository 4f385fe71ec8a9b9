//! Integration tests for registering type-erased constructors.
//!
//! Constructors can travel as `Box<dyn Any>` (e.g. from a plugin table); the
//! container checks that the value really is a constructor before using it.

mod common;

use binding_registry::{with_name, BindOptions, Constructor, Container, ContainerApi, ContainerError};
use common::{new_circle, Shape};
use std::any::Any;
use std::sync::Arc;

#[test]
fn test_singleton_resolver_not_a_func() {
    let container = Container::new();
    let err = container
        .singleton_any(Box::new("STRING!"), BindOptions::default())
        .unwrap_err();

    assert_eq!(err.to_string(), "container: the resolver must be a function");
    assert!(container.is_empty());
}

#[test]
fn test_factory_resolver_not_a_func() {
    let container = Container::new();
    let err = container
        .factory_any(Box::new(42u8), BindOptions::default())
        .unwrap_err();

    assert!(matches!(err, ContainerError::InvalidResolver));
}

#[test]
fn test_erased_singleton() {
    let container = Container::new();
    let resolver: Box<dyn Any + Send + Sync> = Box::new(Constructor::new(new_circle));
    container
        .singleton_any(resolver, BindOptions::default())
        .unwrap();

    let a: Arc<dyn Shape> = container.resolve().unwrap();
    let b: Arc<dyn Shape> = container.resolve().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_erased_factory_named() {
    let container = Container::new();
    container
        .factory_any(Box::new(Constructor::new(new_circle)), with_name("c"))
        .unwrap();

    let shape: Arc<dyn Shape> = container.resolve_with(with_name("c")).unwrap();
    assert_eq!(shape.area(), 100500);
}

#[test]
fn test_erased_factory_arity() {
    let container = Container::new();
    let err = container
        .factory_any(
            Box::new(Constructor::new(|| (1u8, 2u8, 3u8))),
            BindOptions::default(),
        )
        .unwrap_err();

    assert!(matches!(err, ContainerError::InvalidArity));
}

#[test]
fn test_constructor_table() {
    let table: Vec<(&str, Constructor)> = vec![
        ("port", Constructor::new(|| 8080u16)),
        ("host", Constructor::new(|| "localhost".to_string())),
        ("url", Constructor::new(|host: String, port: u16| format!("{host}:{port}"))),
    ];

    let container = Container::new();
    for (_, constructor) in table {
        container
            .bind_singleton(constructor, &BindOptions::default())
            .unwrap();
    }

    // The url constructor rebinds String from the host it consumed.
    assert_eq!(container.resolve::<String>().unwrap(), "localhost:8080");
}
