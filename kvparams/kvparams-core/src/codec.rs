//! Codec contract: how keys and values travel to and from the store.

use bytes::Bytes;

use crate::{error::CodecError, resolver::RoleTypes, value::Value};

/// Encodes and decodes keys and values for a key/value store.
///
/// A codec is generic over its key and value types; [`Codec::type_arguments`]
/// exposes those type arguments so they can be used for role inference.
pub trait Codec: Send + Sync {
    fn encode_key(&self, key: &Value) -> Result<Bytes, CodecError>;

    fn encode_value(&self, value: &Value) -> Result<Bytes, CodecError>;

    fn decode_key(&self, bytes: &[u8]) -> Result<Value, CodecError>;

    fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError>;

    /// Declared key and value types, or `None` if the codec does not
    /// parameterize them (e.g. a type-erased adapter).
    fn type_arguments(&self) -> Option<RoleTypes> {
        None
    }
}
