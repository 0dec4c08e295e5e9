//! Error types for the classifier.

/// Errors produced while building a
/// [`CodecAwareParametersAccessor`](crate::CodecAwareParametersAccessor).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// A required collaborator was not supplied.
    #[error("{argument} must not be missing")]
    InvalidArgument { argument: &'static str },
}
