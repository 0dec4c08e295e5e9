use std::fmt::{Display, Formatter, Result};

use crate::value::Value;

/// Semantic type handle used for declared parameter types and codec role types.
///
/// Concrete variant names mirror [`Value`] (values ↔ types). In addition:
/// - [`TypeDef::Any`] is assignable from every type.
/// - [`TypeDef::Number`] is assignable from every numeric type.
/// - [`TypeDef::Unresolved`] is the bottom type: it is never assignable from
///   anything, so it never matches a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDef {
    Unresolved,
    Any,
    Null,
    Bool,
    Number,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    List,
    Map,
}

impl TypeDef {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeDef::Number
                | TypeDef::I8
                | TypeDef::I16
                | TypeDef::I32
                | TypeDef::I64
                | TypeDef::U8
                | TypeDef::U16
                | TypeDef::U32
                | TypeDef::U64
                | TypeDef::F32
                | TypeDef::F64
        )
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, TypeDef::List | TypeDef::Map)
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, TypeDef::Unresolved)
    }

    /// Whether a value of type `other` can be used where `self` is expected.
    pub fn is_assignable_from(&self, other: &TypeDef) -> bool {
        match (self, other) {
            (TypeDef::Unresolved, _) | (_, TypeDef::Unresolved) => false,
            (TypeDef::Any, _) => true,
            (TypeDef::Number, other) => other.is_numeric(),
            (this, other) => this == other,
        }
    }

    /// Whether `value` is a non-null instance of this type.
    pub fn is_instance(&self, value: &Value) -> bool {
        !value.is_null() && self.is_assignable_from(&value.type_def())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TypeDef::Unresolved => "unresolved",
            TypeDef::Any => "any",
            TypeDef::Null => "null",
            TypeDef::Bool => "bool",
            TypeDef::Number => "number",
            TypeDef::I8 => "i8",
            TypeDef::I16 => "i16",
            TypeDef::I32 => "i32",
            TypeDef::I64 => "i64",
            TypeDef::U8 => "u8",
            TypeDef::U16 => "u16",
            TypeDef::U32 => "u32",
            TypeDef::U64 => "u64",
            TypeDef::F32 => "f32",
            TypeDef::F64 => "f64",
            TypeDef::String => "string",
            TypeDef::Bytes => "bytes",
            TypeDef::List => "list",
            TypeDef::Map => "map",
        }
    }
}

impl Display for TypeDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}
