//! Role type resolution from codecs.

use crate::{codec::Codec, types::TypeDef};

/// Key and value types declared by a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTypes {
    pub key: TypeDef,
    pub value: TypeDef,
}

impl RoleTypes {
    pub fn new(key: TypeDef, value: TypeDef) -> Self {
        Self { key, value }
    }

    /// Role types of a codec that declares none. Neither matches any value.
    pub fn unresolved() -> Self {
        Self::new(TypeDef::Unresolved, TypeDef::Unresolved)
    }

    pub fn is_resolved(&self) -> bool {
        self.key.is_resolved() || self.value.is_resolved()
    }
}

impl Default for RoleTypes {
    fn default() -> Self {
        Self::unresolved()
    }
}

/// Extracts the key and value types declared by a codec.
pub trait TypeResolver {
    fn resolve(&self, codec: &dyn Codec) -> RoleTypes;
}
