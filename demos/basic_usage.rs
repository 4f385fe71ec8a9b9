//! Basic usage example for binding-registry.
//!
//! Demonstrates:
//! - Registering singletons, including several values from one constructor
//! - Registering factories that build a fresh value per resolution
//! - Resolving values and calling functions with injected arguments
//! - Checking registration status with `contains()`
//!
//! Run with: `RUST_LOG=binding_registry=debug cargo run --example basic_usage`

use binding_registry::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

impl Dependency for AppConfig {}

fn main() -> Result<(), ContainerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== binding-registry: Basic Usage ===\n");

    let container = Container::new();

    // -------------------------------------------------------------------------
    // 1. Singletons run once, at registration
    // -------------------------------------------------------------------------
    println!("1. Registering singletons...");

    container.singleton(|| AppConfig {
        name: "MyApp".to_string(),
        version: 1,
        debug_mode: true,
    })?;
    container.singleton(|| (8080u16, "localhost".to_string()))?;

    println!("   Registered: AppConfig, u16, String");

    // -------------------------------------------------------------------------
    // 2. Factories run on every resolution
    // -------------------------------------------------------------------------
    println!("\n2. Registering a factory...");

    container.factory(|host: String, port: u16| Arc::new(format!("http://{host}:{port}")))?;

    let first: Arc<String> = container.resolve()?;
    let second: Arc<String> = container.resolve()?;
    println!("   url = {first}");
    println!("   fresh instance per resolve: {}", !Arc::ptr_eq(&first, &second));

    // -------------------------------------------------------------------------
    // 3. Named bindings
    // -------------------------------------------------------------------------
    println!("\n3. Named bindings...");

    container.singleton_with(|| 9090u16, with_name("admin"))?;
    let admin: u16 = container.resolve_with(with_name("admin"))?;
    let public: u16 = container.resolve()?;
    println!("   admin port = {admin}, public port = {public}");

    // -------------------------------------------------------------------------
    // 4. contains()
    // -------------------------------------------------------------------------
    println!("\n4. Checking registration status with contains()...");

    println!("   contains::<AppConfig>() = {}", container.contains::<AppConfig>()?);
    println!("   contains::<Vec<u8>>()   = {}", container.contains::<Vec<u8>>()?);

    // -------------------------------------------------------------------------
    // 5. call() injects every parameter
    // -------------------------------------------------------------------------
    println!("\n5. Calling a function with injected arguments...");

    let banner = container.call(|config: AppConfig, url: Arc<String>| {
        format!(
            "{} v{} at {url} (debug: {})",
            config.name, config.version, config.debug_mode
        )
    })?;
    println!("   {banner}");

    // -------------------------------------------------------------------------
    // 6. Errors
    // -------------------------------------------------------------------------
    println!("\n6. Errors...");

    if let Err(err) = container.factory(|| (1u8, 2u8)) {
        println!("   factory with two values: {err}");
    }
    if let Err(err) = container.resolve::<f64>() {
        println!("   missing binding: {err}");
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
