//! Recursive dependency resolution.
//!
//! A [`Resolution`] lives for one top-level call. It remembers which factory
//! keys are being constructed on the current call stack, so a cyclic chain of
//! factories fails with `CyclicDependency` instead of recursing forever.

use tracing::debug;

use crate::{
    Binding, BindingKey, Constructor, ContainerError, ContainerEvent, Registry, TypeInfo, Value,
};

pub(crate) struct Resolution<'a> {
    registry: &'a Registry,
    emit: &'a dyn Fn(&ContainerEvent),
    stack: Vec<BindingKey>,
}

impl<'a> Resolution<'a> {
    pub(crate) fn new(registry: &'a Registry, emit: &'a dyn Fn(&ContainerEvent)) -> Self {
        Self {
            registry,
            emit,
            stack: Vec::new(),
        }
    }

    /// Produces a value for `key`: the cached value of a singleton, or a
    /// freshly constructed one for a factory.
    pub(crate) fn resolve_key(&mut self, key: &BindingKey) -> Result<Value, ContainerError> {
        let binding = self.registry.get(key)?;

        (self.emit)(&ContainerEvent::Resolve {
            type_name: key.type_name(),
            name: key.name().to_string(),
            found: binding.is_some(),
        });

        match binding {
            None => {
                debug!(key = %key, "no binding found");
                Err(ContainerError::UnresolvedDependency {
                    type_name: key.type_name(),
                })
            }
            Some(Binding::Singleton(value)) => Ok(value),
            Some(Binding::Factory(constructor)) => {
                if self.stack.contains(key) {
                    debug!(key = %key, "circular dependency");
                    return Err(ContainerError::CyclicDependency {
                        type_name: key.type_name(),
                    });
                }

                self.stack.push(key.clone());
                let produced = self.construct(&constructor);
                self.stack.pop();

                produced?
                    .into_iter()
                    .next()
                    .ok_or(ContainerError::TypeMismatch {
                        type_name: key.type_name(),
                    })
            }
        }
    }

    /// Resolves one argument per parameter, in order, all under `name`.
    /// Stops at the first failure.
    pub(crate) fn arguments(
        &mut self,
        parameters: &[TypeInfo],
        name: &str,
    ) -> Result<Vec<Value>, ContainerError> {
        parameters
            .iter()
            .map(|parameter| self.resolve_key(&BindingKey::new(*parameter, name)))
            .collect()
    }

    /// Resolves the constructor's parameters from unnamed bindings and runs it.
    pub(crate) fn construct(&mut self, constructor: &Constructor) -> Result<Vec<Value>, ContainerError> {
        let args = self.arguments(constructor.parameters(), "")?;
        constructor.invoke(args)
    }

    /// Checks that every parameter of `constructor` has a binding, without
    /// constructing anything.
    pub(crate) fn check_parameters(&self, constructor: &Constructor) -> Result<(), ContainerError> {
        for parameter in constructor.parameters() {
            if !self.registry.contains(&BindingKey::new(*parameter, ""))? {
                debug!(parameter = %parameter, "no binding found");
                return Err(ContainerError::UnresolvedDependency {
                    type_name: parameter.name(),
                });
            }
        }

        Ok(())
    }
}
