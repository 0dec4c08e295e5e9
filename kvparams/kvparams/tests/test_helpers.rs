//! Shared codecs and accessors for classifier tests.

use bytes::Bytes;
use kvparams::{
    codec::StringCodec,
    core::{Codec, CodecError, RoleTypes, TypeDef, Value},
    params::{DefaultParametersAccessor, ParameterDef},
};

/// Codec declaring the given role types; encoding delegates to [`StringCodec`].
pub struct DeclaringCodec(pub RoleTypes);

impl DeclaringCodec {
    pub fn new(key: TypeDef, value: TypeDef) -> Self {
        Self(RoleTypes::new(key, value))
    }
}

impl Codec for DeclaringCodec {
    fn encode_key(&self, key: &Value) -> Result<Bytes, CodecError> {
        StringCodec.encode_key(key)
    }

    fn encode_value(&self, value: &Value) -> Result<Bytes, CodecError> {
        StringCodec.encode_value(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        StringCodec.decode_key(bytes)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        StringCodec.decode_value(bytes)
    }

    fn type_arguments(&self) -> Option<RoleTypes> {
        Some(self.0)
    }
}

/// Accessor with one unannotated `Any` parameter per argument.
pub fn unannotated(arguments: Vec<Value>) -> DefaultParametersAccessor {
    let parameters = (0..arguments.len())
        .map(|i| ParameterDef::new(format!("arg{i}"), TypeDef::Any))
        .collect::<Vec<_>>();
    DefaultParametersAccessor::new(parameters, arguments).unwrap()
}

/// Accessor binding a single argument to `parameter`.
pub fn single(parameter: ParameterDef, argument: Value) -> DefaultParametersAccessor {
    DefaultParametersAccessor::new(vec![parameter], vec![argument]).unwrap()
}
