use thiserror::Error;

/// Boxed error returned by a failing constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by registration and resolution calls.
///
/// Every failure is returned to the immediate caller. The message texts of
/// the first three variants are stable and safe to match on.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The registration target is not a callable constructor.
    #[error("container: the resolver must be a function")]
    InvalidResolver,

    /// A factory declared anything but one value (plus an optional error).
    #[error("container: transient value resolvers must return exactly one value and optionally one error")]
    InvalidArity,

    /// No binding exists for the requested key.
    #[error("container: no binding found for: {type_name}")]
    UnresolvedDependency { type_name: &'static str },

    /// The key is already being constructed further up the call stack.
    #[error("container: circular dependency detected for: {type_name}")]
    CyclicDependency { type_name: &'static str },

    /// The constructor itself returned an error. Displayed verbatim.
    #[error("{0}")]
    ConstructorFailure(BoxError),

    /// A stored value did not downcast to the type of its key.
    #[error("container: type mismatch for: {type_name}")]
    TypeMismatch { type_name: &'static str },

    #[error("container: failed to acquire registry lock")]
    RegistryLock,
}

impl ContainerError {
    /// Returns the constructor's own error, if this is a constructor failure.
    pub fn constructor_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            ContainerError::ConstructorFailure(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_invalid_resolver_display() {
        let err = ContainerError::InvalidResolver;
        assert_eq!(err.to_string(), "container: the resolver must be a function");
    }

    #[test]
    fn test_invalid_arity_display() {
        let err = ContainerError::InvalidArity;
        assert_eq!(
            err.to_string(),
            "container: transient value resolvers must return exactly one value and optionally one error"
        );
    }

    #[test]
    fn test_unresolved_dependency_display() {
        let err = ContainerError::UnresolvedDependency { type_name: "u32" };
        assert_eq!(err.to_string(), "container: no binding found for: u32");
    }

    #[test]
    fn test_constructor_failure_is_verbatim() {
        let err = ContainerError::ConstructorFailure("binding error".into());
        assert_eq!(err.to_string(), "binding error");
    }

    #[test]
    fn test_constructor_error_downcast() {
        let err = ContainerError::ConstructorFailure(Box::new(Boom));
        let inner = err.constructor_error().unwrap();
        assert!(inner.downcast_ref::<Boom>().is_some());
        assert!(ContainerError::RegistryLock.constructor_error().is_none());
    }

    #[test]
    fn test_debug_format() {
        let err = ContainerError::InvalidArity;
        assert_eq!(format!("{:?}", err), "InvalidArity");
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &ContainerError::CyclicDependency { type_name: "i8" };
        assert_eq!(
            err.to_string(),
            "container: circular dependency detected for: i8"
        );
    }
}
