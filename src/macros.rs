//! Macros for declaring process-wide containers.

/// Creates a process-wide container with a single macro invocation.
///
/// The macro generates a module containing:
/// - A lazily initialized static [`Container`](crate::Container) (hidden)
/// - A `container()` accessor for trait-based usage
/// - Free functions delegating to [`ContainerApi`](crate::ContainerApi)
///
/// # Examples
///
/// ```rust
/// use binding_registry::define_container;
/// use std::sync::Arc;
///
/// define_container!(app);
///
/// app::singleton(|| Arc::new("db://primary".to_string())).unwrap();
/// app::factory(|url: Arc<String>| url.len()).unwrap();
///
/// let len: usize = app::resolve().unwrap();
/// assert_eq!(len, 12);
/// ```
///
/// # Multiple Containers
///
/// Each invocation creates an isolated container:
///
/// ```rust
/// use binding_registry::define_container;
///
/// define_container!(primary);
/// define_container!(replica);
///
/// primary::singleton(|| 1u8).unwrap();
///
/// assert!(primary::resolve::<u8>().is_ok());
/// assert!(replica::resolve::<u8>().is_err());
/// ```
#[macro_export]
macro_rules! define_container {
    ($name:ident) => {
        pub mod $name {
            use std::sync::LazyLock;

            use $crate::ContainerApi;

            // The container itself (module-private)
            static CONTAINER: LazyLock<$crate::Container> = LazyLock::new($crate::Container::new);

            /// Access the underlying container for trait-based usage.
            pub fn container() -> &'static $crate::Container {
                &CONTAINER
            }

            /// Register a singleton constructor.
            pub fn singleton<Args, F>(f: F) -> Result<(), $crate::ContainerError>
            where
                Args: 'static,
                F: $crate::Callable<Args> + Send + Sync + 'static,
                F::Output: $crate::Outcome,
            {
                CONTAINER.singleton(f)
            }

            /// Register a singleton constructor with options.
            pub fn singleton_with<Args, F>(
                f: F,
                options: $crate::BindOptions,
            ) -> Result<(), $crate::ContainerError>
            where
                Args: 'static,
                F: $crate::Callable<Args> + Send + Sync + 'static,
                F::Output: $crate::Outcome,
            {
                CONTAINER.singleton_with(f, options)
            }

            /// Register a factory constructor.
            pub fn factory<Args, F>(f: F) -> Result<(), $crate::ContainerError>
            where
                Args: 'static,
                F: $crate::Callable<Args> + Send + Sync + 'static,
                F::Output: $crate::Outcome,
            {
                CONTAINER.factory(f)
            }

            /// Register a factory constructor with options.
            pub fn factory_with<Args, F>(
                f: F,
                options: $crate::BindOptions,
            ) -> Result<(), $crate::ContainerError>
            where
                Args: 'static,
                F: $crate::Callable<Args> + Send + Sync + 'static,
                F::Output: $crate::Outcome,
            {
                CONTAINER.factory_with(f, options)
            }

            /// Resolve a value of type `T`.
            pub fn resolve<T: $crate::Dependency>() -> Result<T, $crate::ContainerError> {
                CONTAINER.resolve()
            }

            /// Resolve a value of type `T` with options.
            pub fn resolve_with<T: $crate::Dependency>(
                options: $crate::BindOptions,
            ) -> Result<T, $crate::ContainerError> {
                CONTAINER.resolve_with(options)
            }

            /// Call a function with resolved arguments.
            pub fn call<Args, F>(f: F) -> Result<F::Output, $crate::ContainerError>
            where
                F: $crate::Callable<Args>,
            {
                CONTAINER.call(f)
            }

            /// Call a function with resolved arguments, using options.
            pub fn call_with<Args, F>(
                f: F,
                options: $crate::BindOptions,
            ) -> Result<F::Output, $crate::ContainerError>
            where
                F: $crate::Callable<Args>,
            {
                CONTAINER.call_with(f, options)
            }

            /// Check if `T` has an unnamed binding.
            pub fn contains<T: $crate::Dependency>() -> Result<bool, $crate::ContainerError> {
                CONTAINER.contains::<T>()
            }

            /// Set a tracing callback for container operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::ContainerEvent) + Send + Sync + 'static,
            ) {
                CONTAINER.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                CONTAINER.clear_trace_callback()
            }

            /// Remove all bindings.
            #[doc(hidden)]
            pub fn clear() {
                CONTAINER.clear()
            }
        }
    };
}
