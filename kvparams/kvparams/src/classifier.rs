//! Codec-aware key/value classification of command parameters.

use kvparams_codec::DeclaredTypeResolver;
use kvparams_core::{
    AccessorError, BindableValues, Codec, ParametersAccessor, Role, RoleTypes, TypeResolver,
    Value,
};

use crate::error::ClassifierError;

/// [`ParametersAccessor`] that infers key/value roles from the codec's
/// declared types when the wrapped accessor has no explicit annotation.
///
/// Explicit annotations always win. Type-based inference only applies to
/// non-null values. Every query other than [`is_key`](Self::is_key) and
/// [`is_value`](Self::is_value) is forwarded to the delegate unchanged.
pub struct CodecAwareParametersAccessor<D> {
    delegate: D,
    role_types: RoleTypes,
}

/// Builder for [`CodecAwareParametersAccessor`].
pub struct CodecAwareParametersAccessorBuilder<'c, D> {
    delegate: Option<D>,
    codec: Option<&'c dyn Codec>,
    resolver: Option<&'c dyn TypeResolver>,
}

impl<D: ParametersAccessor> CodecAwareParametersAccessor<D> {
    /// Create a builder for [`CodecAwareParametersAccessor`].
    pub fn builder<'c>() -> CodecAwareParametersAccessorBuilder<'c, D> {
        CodecAwareParametersAccessorBuilder {
            delegate: None,
            codec: None,
            resolver: None,
        }
    }

    /// Wrap `delegate`, resolving role types from `codec`'s declared type arguments.
    pub fn new(delegate: D, codec: &dyn Codec) -> Self {
        Self::with_resolver(delegate, codec, &DeclaredTypeResolver)
    }

    /// Wrap `delegate`, resolving role types from `codec` with `resolver`.
    pub fn with_resolver(delegate: D, codec: &dyn Codec, resolver: &dyn TypeResolver) -> Self {
        let role_types = resolver.resolve(codec);
        tracing::debug!(
            key_type = %role_types.key,
            value_type = %role_types.value,
            parameter_count = delegate.parameter_count(),
            "resolved codec role types"
        );
        Self {
            delegate,
            role_types,
        }
    }

    /// Key and value types resolved from the codec at construction.
    pub fn role_types(&self) -> RoleTypes {
        self.role_types
    }

    /// The wrapped accessor.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Unwrap, returning the wrapped accessor.
    pub fn into_inner(self) -> D {
        self.delegate
    }

    /// Classified role at `index`, `None` when neither key nor value.
    pub fn role(&self, index: usize) -> Result<Option<Role>, AccessorError> {
        if self.is_key(index)? {
            Ok(Some(Role::Key))
        } else if self.is_value(index)? {
            Ok(Some(Role::Value))
        } else {
            Ok(None)
        }
    }
}

impl<D: ParametersAccessor> ParametersAccessor for CodecAwareParametersAccessor<D> {
    fn parameter_count(&self) -> usize {
        self.delegate.parameter_count()
    }

    fn bindable_value(&self, index: usize) -> Result<&Value, AccessorError> {
        self.delegate.bindable_value(index)
    }

    fn is_key(&self, index: usize) -> Result<bool, AccessorError> {
        if self.delegate.is_value(index)? {
            return Ok(false);
        }

        if self.delegate.is_key(index)? {
            return Ok(true);
        }

        let value = self.bindable_value(index)?;
        let matched = self.role_types.key.is_instance(value);
        tracing::trace!(index, key_type = %self.role_types.key, matched, "inferring key role");
        Ok(matched)
    }

    fn is_value(&self, index: usize) -> Result<bool, AccessorError> {
        if self.delegate.is_key(index)? {
            return Ok(false);
        }

        if self.delegate.is_value(index)? {
            return Ok(true);
        }

        let value = self.bindable_value(index)?;
        // A value matching both role types is inferred as a key.
        let matched =
            !self.role_types.key.is_instance(value) && self.role_types.value.is_instance(value);
        tracing::trace!(index, value_type = %self.role_types.value, matched, "inferring value role");
        Ok(matched)
    }

    fn is_bindable_null_value(&self, index: usize) -> Result<bool, AccessorError> {
        self.delegate.is_bindable_null_value(index)
    }

    fn resolve_parameter_index(&self, name: &str) -> Result<usize, AccessorError> {
        self.delegate.resolve_parameter_index(name)
    }

    fn bindable_values(&self) -> BindableValues<'_> {
        self.delegate.bindable_values()
    }
}

impl<'c, D: ParametersAccessor> CodecAwareParametersAccessorBuilder<'c, D> {
    /// Accessor supplying explicit annotations and argument values.
    pub fn delegate(mut self, delegate: D) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Codec whose declared types drive role inference.
    pub fn codec(mut self, codec: &'c dyn Codec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Override the default [`DeclaredTypeResolver`].
    pub fn resolver(mut self, resolver: &'c dyn TypeResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Returns `Err(InvalidArgument)` if the delegate or codec was not supplied.
    pub fn build(self) -> Result<CodecAwareParametersAccessor<D>, ClassifierError> {
        let delegate = self.delegate.ok_or(ClassifierError::InvalidArgument {
            argument: "parameters accessor",
        })?;
        let codec = self
            .codec
            .ok_or(ClassifierError::InvalidArgument { argument: "codec" })?;
        let resolver = self.resolver.unwrap_or(&DeclaredTypeResolver);

        Ok(CodecAwareParametersAccessor::with_resolver(delegate, codec, resolver))
    }
}
