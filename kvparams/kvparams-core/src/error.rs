//! Error types shared by accessors and codecs.

/// Error returned by [`ParametersAccessor`](crate::ParametersAccessor) implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessorError {
    /// A bindable parameter index outside `0..count` was requested.
    #[error("parameter index {index} out of bounds (parameter count {count})")]
    IndexOutOfBounds { index: usize, count: usize },

    /// No bindable parameter is declared with the given name.
    #[error("no parameter named '{name}'")]
    UnknownParameter { name: String },

    /// The number of supplied arguments does not match the declared parameters.
    #[error("expected {expected} arguments, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },
}

/// Error returned by [`Codec`](crate::Codec) implementations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The value handed to the codec is not of the type it encodes.
    #[error(transparent)]
    TypeMismatch(#[from] ValueTypeError),

    /// Encoded bytes were expected to be UTF-8.
    #[error("invalid UTF-8 payload: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A [`Value`](crate::Value) was not of the expected variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
