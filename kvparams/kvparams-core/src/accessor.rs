//! Parameter accessor contract consumed by command builders.

use std::{fmt, sync::Arc};

use crate::{error::AccessorError, value::Value};

/// Role a bindable parameter plays in a key/value command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Key,
    Value,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Key => "key",
            Role::Value => "value",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy, single-pass iterator over bindable values in parameter order.
pub type BindableValues<'a> = Box<dyn Iterator<Item = &'a Value> + 'a>;

/// Read access to the bindable parameters of one command method invocation.
///
/// Indices are bindable indices in `0..parameter_count()`. Implementations
/// report out-of-range indices as [`AccessorError::IndexOutOfBounds`].
pub trait ParametersAccessor {
    /// Number of bindable parameters.
    fn parameter_count(&self) -> usize;

    /// Runtime argument bound at `index`.
    fn bindable_value(&self, index: usize) -> Result<&Value, AccessorError>;

    /// Whether the parameter at `index` is to be treated as a key.
    fn is_key(&self, index: usize) -> Result<bool, AccessorError>;

    /// Whether the parameter at `index` is to be treated as a value.
    fn is_value(&self, index: usize) -> Result<bool, AccessorError>;

    /// Whether the parameter at `index` should be bound as a single null argument.
    fn is_bindable_null_value(&self, index: usize) -> Result<bool, AccessorError>;

    /// Bindable index of the parameter declared as `name`.
    fn resolve_parameter_index(&self, name: &str) -> Result<usize, AccessorError>;

    /// Iterate bindable values in parameter order.
    fn bindable_values(&self) -> BindableValues<'_>;
}

macro_rules! forward_accessor {
    ($($ty:ty),*) => {$(
        impl<A: ParametersAccessor + ?Sized> ParametersAccessor for $ty {
            fn parameter_count(&self) -> usize {
                (**self).parameter_count()
            }

            fn bindable_value(&self, index: usize) -> Result<&Value, AccessorError> {
                (**self).bindable_value(index)
            }

            fn is_key(&self, index: usize) -> Result<bool, AccessorError> {
                (**self).is_key(index)
            }

            fn is_value(&self, index: usize) -> Result<bool, AccessorError> {
                (**self).is_value(index)
            }

            fn is_bindable_null_value(&self, index: usize) -> Result<bool, AccessorError> {
                (**self).is_bindable_null_value(index)
            }

            fn resolve_parameter_index(&self, name: &str) -> Result<usize, AccessorError> {
                (**self).resolve_parameter_index(name)
            }

            fn bindable_values(&self) -> BindableValues<'_> {
                (**self).bindable_values()
            }
        }
    )*};
}

forward_accessor!(&A, Box<A>, Arc<A>);
