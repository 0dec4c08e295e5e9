use kvparams_core::{AccessorError, BindableValues, ParametersAccessor, Role, Value};

use crate::parameters::{MethodParameters, ParameterDef};

/// Accessor over the arguments of one method invocation.
///
/// Roles reported here are the explicit annotations only.
#[derive(Debug, Clone)]
pub struct DefaultParametersAccessor {
    parameters: MethodParameters,
    arguments: Vec<Value>,
    /// Bindable index → declaration position.
    bindable: Vec<usize>,
}

impl DefaultParametersAccessor {
    /// Bind `arguments` to `parameters` positionally.
    ///
    /// Returns `Err` unless there is exactly one argument per declared
    /// parameter, bindable or not.
    pub fn new(
        parameters: impl Into<MethodParameters>,
        arguments: Vec<Value>,
    ) -> Result<Self, AccessorError> {
        let parameters = parameters.into();
        if parameters.len() != arguments.len() {
            return Err(AccessorError::ArgumentCountMismatch {
                expected: parameters.len(),
                actual: arguments.len(),
            });
        }

        let bindable = parameters.bindable_positions();
        Ok(Self {
            parameters,
            arguments,
            bindable,
        })
    }

    /// Declared parameter behind bindable `index`.
    pub fn parameter(&self, index: usize) -> Result<&ParameterDef, AccessorError> {
        Ok(&self.parameters[self.position(index)?])
    }

    fn position(&self, index: usize) -> Result<usize, AccessorError> {
        self.bindable
            .get(index)
            .copied()
            .ok_or(AccessorError::IndexOutOfBounds {
                index,
                count: self.bindable.len(),
            })
    }
}

impl ParametersAccessor for DefaultParametersAccessor {
    fn parameter_count(&self) -> usize {
        self.bindable.len()
    }

    fn bindable_value(&self, index: usize) -> Result<&Value, AccessorError> {
        Ok(&self.arguments[self.position(index)?])
    }

    fn is_key(&self, index: usize) -> Result<bool, AccessorError> {
        Ok(self.parameter(index)?.annotation == Some(Role::Key))
    }

    fn is_value(&self, index: usize) -> Result<bool, AccessorError> {
        Ok(self.parameter(index)?.annotation == Some(Role::Value))
    }

    fn is_bindable_null_value(&self, index: usize) -> Result<bool, AccessorError> {
        let parameter = self.parameter(index)?;
        // Composite arguments expand into several command arguments.
        if parameter.declared_type.is_composite() {
            return Ok(false);
        }
        Ok(self.bindable_value(index)?.is_null())
    }

    fn resolve_parameter_index(&self, name: &str) -> Result<usize, AccessorError> {
        self.bindable
            .iter()
            .position(|&pos| self.parameters[pos].name.as_deref() == Some(name))
            .ok_or_else(|| AccessorError::UnknownParameter {
                name: name.to_string(),
            })
    }

    fn bindable_values(&self) -> BindableValues<'_> {
        Box::new(self.bindable.iter().map(|&pos| &self.arguments[pos]))
    }
}
