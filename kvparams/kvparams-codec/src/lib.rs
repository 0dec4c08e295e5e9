//! Stock [`Codec`](kvparams_core::Codec) implementations and the default
//! [`TypeResolver`](kvparams_core::TypeResolver).
//!
//! - [`StringCodec`] — UTF-8 string keys and values
//! - [`ByteArrayCodec`] — raw byte keys and values
//! - [`Erased`] — adapter hiding a codec's type arguments
//! - [`DeclaredTypeResolver`] — reads the type arguments a codec declares

mod byte_array;
mod declared;
mod erased;
mod string;

pub use byte_array::ByteArrayCodec;
pub use declared::DeclaredTypeResolver;
pub use erased::Erased;
pub use string::StringCodec;
