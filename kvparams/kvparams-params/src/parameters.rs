use std::ops::Deref;

use kvparams_core::{Role, TypeDef};

/// Declared parameter of a command method.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDef {
    pub name: Option<String>,
    pub declared_type: TypeDef,
    /// Explicit role annotation, if any.
    pub annotation: Option<Role>,
    /// Non-bindable parameters (timeouts, output handlers, ...) are not
    /// command arguments and are skipped by the accessor.
    pub bindable: bool,
}

impl ParameterDef {
    pub fn new(name: impl Into<String>, declared_type: TypeDef) -> Self {
        Self {
            name: Some(name.into()),
            declared_type,
            annotation: None,
            bindable: true,
        }
    }

    pub fn unnamed(declared_type: TypeDef) -> Self {
        Self {
            name: None,
            declared_type,
            annotation: None,
            bindable: true,
        }
    }

    /// Annotate as an explicit key.
    pub fn key(mut self) -> Self {
        self.annotation = Some(Role::Key);
        self
    }

    /// Annotate as an explicit value.
    pub fn value(mut self) -> Self {
        self.annotation = Some(Role::Value);
        self
    }

    pub fn non_bindable(mut self) -> Self {
        self.bindable = false;
        self
    }
}

/// Ordered declared parameters of one command method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodParameters(pub Vec<ParameterDef>);

impl MethodParameters {
    pub fn new(parameters: Vec<ParameterDef>) -> Self {
        Self(parameters)
    }

    pub fn as_slice(&self) -> &[ParameterDef] {
        &self.0
    }

    /// Positions (in declaration order) of the bindable parameters.
    pub fn bindable_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| p.bindable)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<ParameterDef>> for MethodParameters {
    fn from(value: Vec<ParameterDef>) -> Self {
        Self(value)
    }
}

impl FromIterator<ParameterDef> for MethodParameters {
    fn from_iter<T: IntoIterator<Item = ParameterDef>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for MethodParameters {
    type Target = [ParameterDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
