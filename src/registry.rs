//! Binding storage.
//!
//! The registry maps a [`BindingKey`] to a [`Binding`] record. Records are
//! immutable once stored; a later registration under the same key replaces
//! the earlier record. All access goes through one `RwLock`.

use std::{
    collections::HashMap,
    fmt,
    sync::RwLock,
};

use tracing::{debug, trace};

use crate::{BindingKey, Constructor, ContainerError, Value};

/// How a binding produces its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Constructed once at registration, shared by every resolution.
    Singleton,
    /// Constructed anew on every resolution.
    Factory,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Singleton => write!(f, "singleton"),
            Lifetime::Factory => write!(f, "factory"),
        }
    }
}

/// One registry record.
#[derive(Debug, Clone)]
pub enum Binding {
    /// The materialized value.
    Singleton(Value),
    /// The constructor, kept unexecuted.
    Factory(Constructor),
}

impl Binding {
    pub fn lifetime(&self) -> Lifetime {
        match self {
            Binding::Singleton(_) => Lifetime::Singleton,
            Binding::Factory(_) => Lifetime::Factory,
        }
    }
}

/// Thread-safe map of bindings.
///
/// # Lock Poisoning Recovery
///
/// Writes recover a poisoned lock by extracting the inner map, since every
/// insert leaves the map consistent. Reads report `RegistryLock` instead.
#[derive(Default)]
pub struct Registry {
    bindings: RwLock<HashMap<BindingKey, Binding>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for `key`.
    pub fn put(&self, key: BindingKey, binding: Binding) {
        debug!(key = %key, lifetime = %binding.lifetime(), "binding stored");

        self.bindings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, binding);
    }

    /// Inserts several records under a single write lock.
    ///
    /// Readers observe either none or all of them.
    pub fn put_all(&self, entries: Vec<(BindingKey, Binding)>) {
        let mut map = self
            .bindings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        for (key, binding) in entries {
            debug!(key = %key, lifetime = %binding.lifetime(), "binding stored");
            map.insert(key, binding);
        }
    }

    /// Exact-match lookup. The record is cloned so the lock is released
    /// before the caller runs any constructor.
    pub fn get(&self, key: &BindingKey) -> Result<Option<Binding>, ContainerError> {
        let map = self
            .bindings
            .read()
            .map_err(|_| ContainerError::RegistryLock)?;

        let binding = map.get(key).cloned();

        trace!(key = %key, found = binding.is_some(), "binding lookup");

        Ok(binding)
    }

    pub fn contains(&self, key: &BindingKey) -> Result<bool, ContainerError> {
        self.bindings
            .read()
            .map(|m| m.contains_key(key))
            .map_err(|_| ContainerError::RegistryLock)
    }

    pub fn len(&self) -> usize {
        self.bindings
            .read()
            .map(|m| m.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the registered keys, in no particular order.
    pub fn keys(&self) -> Vec<BindingKey> {
        self.bindings
            .read()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_else(|poisoned| poisoned.into_inner().keys().cloned().collect())
    }

    /// Removes every binding. Values already handed out stay valid.
    #[doc(hidden)]
    pub fn clear(&self) {
        self.bindings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bindings", &self.len())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
