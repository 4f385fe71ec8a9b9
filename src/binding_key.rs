//! Binding keys and per-call options.
//!
//! A binding is identified by the type it produces plus an optional name.
//! The empty name is the "unnamed" binding.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::reflect::{Dependency, TypeInfo};

/// Identity of a registered or requested dependency: `(type, name)`.
///
/// Equality and hashing use the `TypeId` and the name only; the type name
/// is carried for diagnostics.
#[derive(Debug, Clone)]
pub struct BindingKey {
    type_info: TypeInfo,
    name: String,
}

impl BindingKey {
    pub fn new(type_info: TypeInfo, name: impl Into<String>) -> Self {
        Self {
            type_info,
            name: name.into(),
        }
    }

    /// Key for the unnamed binding of `T`.
    pub fn of<T: Dependency>() -> Self {
        Self::new(TypeInfo::of::<T>(), "")
    }

    /// Key for `T` under the name carried by `options`.
    pub fn with_options<T: Dependency>(options: &BindOptions) -> Self {
        Self::new(TypeInfo::of::<T>(), options.name())
    }

    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    pub fn type_name(&self) -> &'static str {
        self.type_info.name()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

impl PartialEq for BindingKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_info.id() == other.type_info.id() && self.name == other.name
    }
}

impl Eq for BindingKey {}

impl Hash for BindingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_info.id().hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_named() {
            write!(f, "{}#{}", self.type_name(), self.name)
        } else {
            write!(f, "{}", self.type_name())
        }
    }
}

/// Options accepted by every registration and resolution call.
///
/// # Examples
///
/// ```rust
/// use binding_registry::{with_name, BindOptions};
///
/// assert_eq!(BindOptions::default().name(), "");
/// assert_eq!(with_name("primary").name(), "primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindOptions {
    name: String,
}

impl BindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name component of every key the call produces or looks up.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shorthand for `BindOptions::new().with_name(name)`.
pub fn with_name(name: impl Into<String>) -> BindOptions {
    BindOptions::new().with_name(name)
}
