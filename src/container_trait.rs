//! Core trait defining container behavior.
//!
//! This module provides the `ContainerApi` trait with default implementations for
//! registering constructors, resolving values, and calling functions with
//! injected arguments.
//!
//! Bindings are keyed by the produced type (`TypeId`) plus an optional name.
//! Registering under an existing key replaces the previous binding.

use std::any::Any;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::reflect::extract;
use crate::resolution::Resolution;
use crate::{
    BindOptions, Binding, BindingKey, Callable, Constructor, ContainerError, ContainerEvent,
    Dependency, Lifetime, Outcome, Registry,
};

/// Type alias for the user-supplied tracing callback.
pub type TraceCallback = dyn Fn(&ContainerEvent) + Send + Sync + 'static;

/// Storage for an optional tracing callback.
pub type TraceSlot = Mutex<Option<Arc<TraceCallback>>>;

/// Core trait defining container behavior.
///
/// Provides default implementations for all operations, requiring only
/// two accessor methods (`registry` and `trace`) to be implemented by the implementor.
pub trait ContainerApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback slot.
    fn trace(&self) -> &TraceSlot;

    /// Set a tracing callback for container operations.
    ///
    /// The callback is invoked for every bind, resolve, contains, call and clear.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned (due to a panic while holding the lock),
    /// this method automatically recovers by extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&ContainerEvent) + Send + Sync + 'static) {
        let mut guard = self.trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = self.trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit an event to the current callback, if any.
    ///
    /// The trace lock is released before the callback runs, so a callback may
    /// use the container itself.
    fn emit_event(&self, event: &ContainerEvent) {
        let callback = self
            .trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------------------------------

    /// Access the binding registry.
    fn registry(&self) -> &Registry;

    /// Register a constructor whose results are built once and shared.
    ///
    /// The constructor's parameters are resolved from the container and the
    /// constructor runs immediately. Every leading value it returns becomes its
    /// own binding; a trailing `Err` is returned verbatim and nothing is bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binding_registry::{Container, ContainerApi};
    ///
    /// let container = Container::new();
    /// container.singleton(|| (8080u16, "localhost".to_string())).unwrap();
    ///
    /// assert_eq!(container.resolve::<u16>().unwrap(), 8080);
    /// assert_eq!(container.resolve::<String>().unwrap(), "localhost");
    /// ```
    fn singleton<Args, F>(&self, f: F) -> Result<(), ContainerError>
    where
        Args: 'static,
        F: Callable<Args> + Send + Sync + 'static,
        F::Output: Outcome,
    {
        self.singleton_with(f, BindOptions::default())
    }

    /// [`ContainerApi::singleton`] with options, e.g. a binding name.
    fn singleton_with<Args, F>(&self, f: F, options: BindOptions) -> Result<(), ContainerError>
    where
        Args: 'static,
        F: Callable<Args> + Send + Sync + 'static,
        F::Output: Outcome,
    {
        self.bind_singleton(Constructor::new(f), &options)
    }

    /// Register a singleton from a dynamically typed value.
    ///
    /// # Errors
    ///
    /// `InvalidResolver` unless `resolver` holds a [`Constructor`].
    fn singleton_any(
        &self,
        resolver: Box<dyn Any + Send + Sync>,
        options: BindOptions,
    ) -> Result<(), ContainerError> {
        let constructor = resolver
            .downcast::<Constructor>()
            .map_err(|_| ContainerError::InvalidResolver)?;
        self.bind_singleton(*constructor, &options)
    }

    /// Run `constructor` now and bind each of its values.
    ///
    /// Nothing is stored unless every step succeeds.
    fn bind_singleton(
        &self,
        constructor: Constructor,
        options: &BindOptions,
    ) -> Result<(), ContainerError> {
        let emit = |event: &ContainerEvent| self.emit_event(event);
        let values = Resolution::new(self.registry(), &emit)
            .construct(&constructor)
            .inspect_err(|err| debug!(error = %err, "singleton registration failed"))?;

        let entries: Vec<(BindingKey, Binding)> = constructor
            .returns()
            .iter()
            .zip(values)
            .map(|(type_info, value)| {
                (
                    BindingKey::new(*type_info, options.name()),
                    Binding::Singleton(value),
                )
            })
            .collect();

        let events: Vec<ContainerEvent> = entries
            .iter()
            .map(|(key, binding)| ContainerEvent::Bind {
                type_name: key.type_name(),
                name: key.name().to_string(),
                lifetime: binding.lifetime(),
            })
            .collect();

        self.registry().put_all(entries);

        for event in &events {
            self.emit_event(event);
        }

        Ok(())
    }

    /// Register a constructor that runs on every resolution of its type.
    ///
    /// The constructor must return exactly one value, optionally inside a
    /// `Result`. Its parameters must already be bound, but it is not run
    /// until resolved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binding_registry::{Container, ContainerApi, ContainerError};
    ///
    /// let container = Container::new();
    /// container.factory(|| vec![1u8, 2, 3]).unwrap();
    ///
    /// let err = container.factory(|| (1u8, 2u16)).unwrap_err();
    /// assert!(matches!(err, ContainerError::InvalidArity));
    /// ```
    fn factory<Args, F>(&self, f: F) -> Result<(), ContainerError>
    where
        Args: 'static,
        F: Callable<Args> + Send + Sync + 'static,
        F::Output: Outcome,
    {
        self.factory_with(f, BindOptions::default())
    }

    /// [`ContainerApi::factory`] with options, e.g. a binding name.
    fn factory_with<Args, F>(&self, f: F, options: BindOptions) -> Result<(), ContainerError>
    where
        Args: 'static,
        F: Callable<Args> + Send + Sync + 'static,
        F::Output: Outcome,
    {
        self.bind_factory(Constructor::new(f), &options)
    }

    /// Register a factory from a dynamically typed value.
    ///
    /// # Errors
    ///
    /// `InvalidResolver` unless `resolver` holds a [`Constructor`].
    fn factory_any(
        &self,
        resolver: Box<dyn Any + Send + Sync>,
        options: BindOptions,
    ) -> Result<(), ContainerError> {
        let constructor = resolver
            .downcast::<Constructor>()
            .map_err(|_| ContainerError::InvalidResolver)?;
        self.bind_factory(*constructor, &options)
    }

    /// Validate `constructor` and store it unexecuted.
    fn bind_factory(
        &self,
        constructor: Constructor,
        options: &BindOptions,
    ) -> Result<(), ContainerError> {
        let &[output] = constructor.returns() else {
            debug!(
                returns = constructor.returns().len(),
                fallible = constructor.is_fallible(),
                "factory rejected"
            );
            return Err(ContainerError::InvalidArity);
        };

        let emit = |event: &ContainerEvent| self.emit_event(event);
        Resolution::new(self.registry(), &emit)
            .check_parameters(&constructor)
            .inspect_err(|err| debug!(error = %err, "factory registration failed"))?;

        let key = BindingKey::new(output, options.name());
        let event = ContainerEvent::Bind {
            type_name: key.type_name(),
            name: key.name().to_string(),
            lifetime: Lifetime::Factory,
        };

        self.registry().put(key, Binding::Factory(constructor));
        self.emit_event(&event);

        Ok(())
    }

    // -------------------------------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------------------------------

    /// Resolve a value of type `T` from its unnamed binding.
    ///
    /// Singletons yield a clone of the stored value; factories construct a new one.
    ///
    /// # Errors
    ///
    /// - `UnresolvedDependency` if `T` (or a factory's parameter) is not bound
    /// - `ConstructorFailure` if a factory returned an error
    /// - `CyclicDependency` if factories depend on each other in a loop
    fn resolve<T: Dependency>(&self) -> Result<T, ContainerError> {
        self.resolve_with(BindOptions::default())
    }

    /// [`ContainerApi::resolve`] with options, e.g. a binding name.
    fn resolve_with<T: Dependency>(&self, options: BindOptions) -> Result<T, ContainerError> {
        let key = BindingKey::with_options::<T>(&options);
        let emit = |event: &ContainerEvent| self.emit_event(event);
        let value = Resolution::new(self.registry(), &emit).resolve_key(&key)?;
        extract(Some(&value))
    }

    /// Resolve into an existing place. `target` is untouched on failure.
    fn resolve_into<T: Dependency>(&self, target: &mut T) -> Result<(), ContainerError> {
        self.resolve_into_with(target, BindOptions::default())
    }

    /// [`ContainerApi::resolve_into`] with options, e.g. a binding name.
    fn resolve_into_with<T: Dependency>(
        &self,
        target: &mut T,
        options: BindOptions,
    ) -> Result<(), ContainerError> {
        *target = self.resolve_with(options)?;
        Ok(())
    }

    /// Call `f` with every parameter resolved from the container.
    ///
    /// The return value is handed back to the caller and never bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binding_registry::{Container, ContainerApi};
    ///
    /// let container = Container::new();
    /// container.singleton(|| 21i64).unwrap();
    ///
    /// let doubled = container.call(|n: i64| n * 2).unwrap();
    /// assert_eq!(doubled, 42);
    /// ```
    fn call<Args, F>(&self, f: F) -> Result<F::Output, ContainerError>
    where
        F: Callable<Args>,
    {
        self.call_with(f, BindOptions::default())
    }

    /// [`ContainerApi::call`] with options. The name applies to every parameter.
    fn call_with<Args, F>(&self, f: F, options: BindOptions) -> Result<F::Output, ContainerError>
    where
        F: Callable<Args>,
    {
        let parameters = F::parameters();
        let emit = |event: &ContainerEvent| self.emit_event(event);
        let args = Resolution::new(self.registry(), &emit)
            .arguments(&parameters, options.name())?;

        self.emit_event(&ContainerEvent::Call {
            parameters: parameters.iter().map(|p| p.name()).collect(),
        });

        f.invoke(args)
    }

    // -------------------------------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------------------------------

    /// Check if `T` has an unnamed binding.
    fn contains<T: Dependency>(&self) -> Result<bool, ContainerError> {
        self.contains_with::<T>(BindOptions::default())
    }

    /// [`ContainerApi::contains`] with options, e.g. a binding name.
    fn contains_with<T: Dependency>(&self, options: BindOptions) -> Result<bool, ContainerError> {
        let key = BindingKey::with_options::<T>(&options);
        let found = self.registry().contains(&key)?;

        self.emit_event(&ContainerEvent::Contains {
            type_name: key.type_name(),
            name: key.name().to_string(),
            found,
        });

        Ok(found)
    }

    /// Number of bindings.
    fn len(&self) -> usize {
        self.registry().len()
    }

    fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    /// Remove all bindings.
    ///
    /// This method is primarily intended for testing. It does NOT affect:
    /// - Values already resolved (they remain valid)
    /// - The tracing callback (use `clear_trace_callback()` for that)
    #[doc(hidden)]
    fn clear(&self) {
        self.emit_event(&ContainerEvent::Clear);
        self.registry().clear();
    }
}
