use bytes::Bytes;
use kvparams_core::{Codec, CodecError, RoleTypes, TypeDef, Value};

/// Codec for UTF-8 string keys and values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl StringCodec {
    pub fn new() -> Self {
        Self
    }

    fn encode(value: &Value) -> Result<Bytes, CodecError> {
        match value.try_str()? {
            Some(s) => Ok(Bytes::copy_from_slice(s.as_bytes())),
            None => Ok(Bytes::new()),
        }
    }

    fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(Value::string(std::str::from_utf8(bytes)?))
    }
}

impl Codec for StringCodec {
    fn encode_key(&self, key: &Value) -> Result<Bytes, CodecError> {
        Self::encode(key)
    }

    fn encode_value(&self, value: &Value) -> Result<Bytes, CodecError> {
        Self::encode(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        Self::decode(bytes)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        Self::decode(bytes)
    }

    fn type_arguments(&self) -> Option<RoleTypes> {
        Some(RoleTypes::new(TypeDef::String, TypeDef::String))
    }
}
