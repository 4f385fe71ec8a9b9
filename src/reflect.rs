//! Runtime introspection of constructors and bindable values.
//!
//! Rust has no reflection over arbitrary callables, so constructors go through
//! a uniform calling convention instead: any `Fn(A1, .., An) -> R` whose
//! parameters are [`Dependency`] types implements [`Callable`], which can list
//! its parameter types and be invoked with an ordered, type-erased argument
//! list. The return type is classified by [`Outcome`] into the leading values
//! (a [`Bundle`]) and an optional trailing error.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{BoxError, ContainerError};

/// A type-erased value held by the registry or passed as an argument.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Canonical identity of a type plus its display name.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -------------------------------------------------------------------------------------------------
// Bindable values
// -------------------------------------------------------------------------------------------------

/// Marker for types that can be bound and resolved.
///
/// Resolution hands out clones of the stored value, so shared services are
/// usually bound as `Arc<T>` or `Arc<dyn Trait>`: every clone points at the
/// same instance. Own types opt in with an empty impl:
///
/// ```rust
/// use binding_registry::Dependency;
///
/// #[derive(Clone)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// impl Dependency for Settings {}
/// ```
pub trait Dependency: Clone + Send + Sync + 'static {}

impl<T: ?Sized + Send + Sync + 'static> Dependency for Arc<T> {}
impl<T: Dependency> Dependency for Option<T> {}
impl<T: Dependency> Dependency for Vec<T> {}

macro_rules! impl_dependency {
    ($($ty:ty),* $(,)?) => {
        $(impl Dependency for $ty {})*
    };
}

impl_dependency!(
    String, &'static str, bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128,
    isize, f32, f64,
);

/// Clones a `T` out of a type-erased argument slot.
pub(crate) fn extract<T: Dependency>(value: Option<&Value>) -> Result<T, ContainerError> {
    value
        .and_then(|v| v.downcast_ref::<T>())
        .cloned()
        .ok_or(ContainerError::TypeMismatch {
            type_name: type_name::<T>(),
        })
}

// -------------------------------------------------------------------------------------------------
// Return values
// -------------------------------------------------------------------------------------------------

/// The leading (non-error) values a constructor returns.
///
/// A single [`Dependency`], `()` for none, or a tuple of two to six.
pub trait Bundle: Sized {
    fn types() -> Vec<TypeInfo>;

    fn into_values(self) -> Vec<Value>;
}

impl<T: Dependency> Bundle for T {
    fn types() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<T>()]
    }

    fn into_values(self) -> Vec<Value> {
        vec![Arc::new(self) as Value]
    }
}

impl Bundle for () {
    fn types() -> Vec<TypeInfo> {
        Vec::new()
    }

    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_bundle {
    ($($ty:ident),+) => {
        impl<$($ty: Dependency),+> Bundle for ($($ty,)+) {
            fn types() -> Vec<TypeInfo> {
                vec![$(TypeInfo::of::<$ty>()),+]
            }

            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($ty,)+) = self;
                vec![$(Arc::new($ty) as Value),+]
            }
        }
    };
}

impl_bundle!(A, B);
impl_bundle!(A, B, C);
impl_bundle!(A, B, C, D);
impl_bundle!(A, B, C, D, E);
impl_bundle!(A, B, C, D, E, F);

/// Classifies a constructor's return type.
///
/// `Result<B, E>` marks the trailing error as the constructor's own success
/// signal; it is never bound as a value.
pub trait Outcome {
    fn returns() -> Vec<TypeInfo>;

    fn fallible() -> bool;

    fn into_outputs(self) -> Result<Vec<Value>, BoxError>;
}

impl<B: Bundle> Outcome for B {
    fn returns() -> Vec<TypeInfo> {
        B::types()
    }

    fn fallible() -> bool {
        false
    }

    fn into_outputs(self) -> Result<Vec<Value>, BoxError> {
        Ok(Bundle::into_values(self))
    }
}

impl<B: Bundle, E: Into<BoxError>> Outcome for Result<B, E> {
    fn returns() -> Vec<TypeInfo> {
        B::types()
    }

    fn fallible() -> bool {
        true
    }

    fn into_outputs(self) -> Result<Vec<Value>, BoxError> {
        self.map(Bundle::into_values).map_err(Into::into)
    }
}

// -------------------------------------------------------------------------------------------------
// Callables
// -------------------------------------------------------------------------------------------------

/// A function whose parameter list can be inspected and satisfied at runtime.
///
/// Implemented for every `Fn` of up to eight [`Dependency`] parameters.
/// `Args` is the parameter tuple and only serves to tell the impls apart.
pub trait Callable<Args> {
    type Output;

    /// Declared parameter types, in order.
    fn parameters() -> Vec<TypeInfo>;

    /// Calls the function with arguments matching [`Callable::parameters`].
    fn invoke(&self, args: Vec<Value>) -> Result<Self::Output, ContainerError>;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Callable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
            $($arg: Dependency,)*
        {
            type Output = Ret;

            fn parameters() -> Vec<TypeInfo> {
                vec![$(TypeInfo::of::<$arg>()),*]
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn invoke(&self, args: Vec<Value>) -> Result<Ret, ContainerError> {
                let mut slots = args.iter();
                $(let $arg = extract::<$arg>(slots.next())?;)*
                Ok((self)($($arg),*))
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);

type Invoker = dyn Fn(Vec<Value>) -> Result<Vec<Value>, ContainerError> + Send + Sync;

/// A type-erased constructor: what a `singleton`/`factory` registration holds.
///
/// Build one with [`Constructor::new`] to pass constructors around as values,
/// e.g. through the `*_any` registration methods.
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<TypeInfo>,
    returns: Vec<TypeInfo>,
    fallible: bool,
    invoker: Arc<Invoker>,
}

impl Constructor {
    pub fn new<Args, F>(f: F) -> Self
    where
        Args: 'static,
        F: Callable<Args> + Send + Sync + 'static,
        F::Output: Outcome,
    {
        Self {
            parameters: F::parameters(),
            returns: <F::Output as Outcome>::returns(),
            fallible: <F::Output as Outcome>::fallible(),
            invoker: Arc::new(move |args| {
                f.invoke(args)?
                    .into_outputs()
                    .map_err(ContainerError::ConstructorFailure)
            }),
        }
    }

    pub fn parameters(&self) -> &[TypeInfo] {
        &self.parameters
    }

    /// Declared leading return types, excluding a trailing error.
    pub fn returns(&self) -> &[TypeInfo] {
        &self.returns
    }

    pub fn is_fallible(&self) -> bool {
        self.fallible
    }

    /// Runs the constructor. A returned error becomes `ConstructorFailure`.
    pub fn invoke(&self, args: Vec<Value>) -> Result<Vec<Value>, ContainerError> {
        (self.invoker)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .field("fallible", &self.fallible)
            .finish()
    }
}
