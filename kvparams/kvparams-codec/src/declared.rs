use kvparams_core::{Codec, RoleTypes, TypeResolver};

/// Resolves role types from [`Codec::type_arguments`].
///
/// Codecs that declare no type arguments resolve to
/// [`RoleTypes::unresolved`], which disables type-based role inference.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredTypeResolver;

impl TypeResolver for DeclaredTypeResolver {
    fn resolve(&self, codec: &dyn Codec) -> RoleTypes {
        match codec.type_arguments() {
            Some(types) => types,
            None => {
                tracing::debug!("codec declares no type arguments, role types unresolved");
                RoleTypes::unresolved()
            }
        }
    }
}
