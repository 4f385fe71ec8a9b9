use std::fmt;

use crate::{ContainerApi, Registry, TraceSlot};

/// A container instance: a registry of bindings plus an optional trace callback.
///
/// All operations come from [`ContainerApi`]. The container is `Send + Sync`;
/// share it by reference or behind an `Arc`. Its bindings live exactly as long
/// as the container does.
///
/// # Examples
///
/// ```rust
/// use binding_registry::{with_name, Container, ContainerApi};
/// use std::sync::Arc;
///
/// let container = Container::new();
/// container.singleton_with(|| Arc::new("primary".to_string()), with_name("db")).unwrap();
///
/// let db: Arc<String> = container.resolve_with(with_name("db")).unwrap();
/// assert_eq!(db.as_str(), "primary");
/// assert!(container.resolve::<Arc<String>>().is_err());
/// ```
#[derive(Default)]
pub struct Container {
    registry: Registry,
    trace: TraceSlot,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerApi for Container {
    fn trace(&self) -> &TraceSlot {
        &self.trace
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
