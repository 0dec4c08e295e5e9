use bytes::Bytes;
use kvparams_core::{Codec, CodecError, RoleTypes, TypeDef, Value};

/// Codec passing raw bytes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayCodec;

impl ByteArrayCodec {
    pub fn new() -> Self {
        Self
    }

    fn encode(value: &Value) -> Result<Bytes, CodecError> {
        Ok(value
            .try_bytes()?
            .map(Bytes::copy_from_slice)
            .unwrap_or_default())
    }
}

impl Codec for ByteArrayCodec {
    fn encode_key(&self, key: &Value) -> Result<Bytes, CodecError> {
        Self::encode(key)
    }

    fn encode_value(&self, value: &Value) -> Result<Bytes, CodecError> {
        Self::encode(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(Value::bytes(bytes))
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(Value::bytes(bytes))
    }

    fn type_arguments(&self) -> Option<RoleTypes> {
        Some(RoleTypes::new(TypeDef::Bytes, TypeDef::Bytes))
    }
}
