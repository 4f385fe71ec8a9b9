//! # Binding Registry
//!
//! A thread-safe binding registry and dependency resolver.
//!
//! Constructors are registered under the type they produce (plus an optional
//! name). The container can then produce a value of a requested type, or call
//! any function whose parameters it resolves from the registered bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use binding_registry::{Container, ContainerApi};
//! use std::sync::Arc;
//!
//! struct Config {
//!     url: String,
//! }
//!
//! let container = Container::new();
//!
//! // Built once, shared by every resolution
//! container.singleton(|| Arc::new(Config { url: "postgres://localhost".into() })).unwrap();
//!
//! // Built on every resolution, from the registered config
//! container.factory(|config: Arc<Config>| format!("connecting to {}", config.url)).unwrap();
//!
//! let greeting: String = container.resolve().unwrap();
//! assert_eq!(greeting, "connecting to postgres://localhost");
//! ```
//!
//! ## Features
//!
//! - **Two lifetimes**: singletons are built at registration, factories on every resolution
//! - **Multi-value singletons**: a constructor returning a tuple binds every element
//! - **Named bindings**: several bindings of one type, told apart by name
//! - **Fallible constructors**: a returned `Err` is reported verbatim and binds nothing
//! - **Tracing support**: `tracing` logs plus an optional event callback
//!
//! ## Main Operations
//!
//! - [`ContainerApi::singleton`] - Run a constructor now and bind its values
//! - [`ContainerApi::factory`] - Bind a constructor that runs on every resolution
//! - [`ContainerApi::resolve`] - Produce a value of a bound type
//! - [`ContainerApi::call`] - Invoke a function with resolved arguments
//! - [`with_name`] - Select a named binding
//! - [`define_container!`] - Declare a process-wide container

mod binding_key;
mod container;
mod container_error;
mod container_event;
mod container_trait;
mod macros;
mod reflect;
mod registry;
mod resolution;

pub use binding_key::{with_name, BindOptions, BindingKey};
pub use container::Container;
pub use container_error::{BoxError, ContainerError};
pub use container_event::ContainerEvent;
pub use container_trait::{ContainerApi, TraceCallback, TraceSlot};
pub use reflect::{Bundle, Callable, Constructor, Dependency, Outcome, TypeInfo, Value};
pub use registry::{Binding, Lifetime, Registry};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{with_name, BindOptions, Container, ContainerApi, ContainerError, Dependency};
}
