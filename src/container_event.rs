use crate::Lifetime;

/// Events emitted by a container during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use binding_registry::{ContainerEvent, Lifetime};
///
/// let event = ContainerEvent::Bind {
///     type_name: "i32",
///     name: String::new(),
///     lifetime: Lifetime::Singleton,
/// };
/// assert_eq!(event.to_string(), "bind { type_name: i32, lifetime: singleton }");
/// ```
#[derive(Debug, Clone)]
pub enum ContainerEvent {
    /// A binding was stored.
    Bind {
        /// The bound type (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
        /// Binding name, empty when unnamed
        name: String,
        lifetime: Lifetime,
    },

    /// A binding was looked up to produce a value.
    Resolve {
        type_name: &'static str,
        name: String,
        /// Whether a binding existed for the key
        found: bool,
    },

    /// A presence check was performed.
    Contains {
        type_name: &'static str,
        name: String,
        found: bool,
    },

    /// A function was invoked with resolved arguments.
    Call {
        /// Parameter type names, in declaration order
        parameters: Vec<&'static str>,
    },

    /// The container was cleared.
    Clear,
}

fn write_name(f: &mut std::fmt::Formatter<'_>, name: &str) -> std::fmt::Result {
    if name.is_empty() {
        Ok(())
    } else {
        write!(f, ", name: {}", name)
    }
}

impl std::fmt::Display for ContainerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerEvent::Bind {
                type_name,
                name,
                lifetime,
            } => {
                write!(f, "bind {{ type_name: {}", type_name)?;
                write_name(f, name)?;
                write!(f, ", lifetime: {} }}", lifetime)
            }
            ContainerEvent::Resolve {
                type_name,
                name,
                found,
            } => {
                write!(f, "resolve {{ type_name: {}", type_name)?;
                write_name(f, name)?;
                write!(f, ", found: {} }}", found)
            }
            ContainerEvent::Contains {
                type_name,
                name,
                found,
            } => {
                write!(f, "contains {{ type_name: {}", type_name)?;
                write_name(f, name)?;
                write!(f, ", found: {} }}", found)
            }
            ContainerEvent::Call { parameters } => {
                write!(f, "call {{ parameters: [{}] }}", parameters.join(", "))
            }
            ContainerEvent::Clear => write!(f, "Clearing the Container"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_event_display() {
        let event = ContainerEvent::Bind {
            type_name: "i32",
            name: String::new(),
            lifetime: Lifetime::Factory,
        };
        assert_eq!(event.to_string(), "bind { type_name: i32, lifetime: factory }");

        let event = ContainerEvent::Resolve {
            type_name: "String",
            name: "greeting".to_string(),
            found: true,
        };
        assert_eq!(
            event.to_string(),
            "resolve { type_name: String, name: greeting, found: true }"
        );

        let event = ContainerEvent::Contains {
            type_name: "u8",
            name: String::new(),
            found: false,
        };
        assert_eq!(
            event.to_string(),
            "contains { type_name: u8, found: false }"
        );

        let event = ContainerEvent::Call {
            parameters: vec!["u8", "i32"],
        };
        assert_eq!(event.to_string(), "call { parameters: [u8, i32] }");

        assert_eq!(ContainerEvent::Clear.to_string(), "Clearing the Container");
    }

    #[test]
    fn test_container_event_clone() {
        let event = ContainerEvent::Call {
            parameters: vec!["i32"],
        };
        let cloned = event.clone();
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
