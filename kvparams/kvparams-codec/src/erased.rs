use bytes::Bytes;
use kvparams_core::{Codec, CodecError, Value};

/// Wraps a codec and hides its declared type arguments.
///
/// Encoding and decoding are forwarded unchanged; role types resolved from an
/// `Erased` codec are always unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Erased<C>(pub C);

impl<C: Codec> Codec for Erased<C> {
    fn encode_key(&self, key: &Value) -> Result<Bytes, CodecError> {
        self.0.encode_key(key)
    }

    fn encode_value(&self, value: &Value) -> Result<Bytes, CodecError> {
        self.0.encode_value(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.0.decode_key(bytes)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.0.decode_value(bytes)
    }
}
