//! Core types and contracts for `kvparams`.
//!
//! This crate defines the runtime argument representation ([`Value`]), the
//! type descriptors used for role inference ([`TypeDef`]), and the seams the
//! classifier is built on: [`ParametersAccessor`], [`Codec`] and
//! [`TypeResolver`].

mod accessor;
mod codec;
mod error;
mod resolver;
mod types;
mod value;

pub use accessor::{BindableValues, ParametersAccessor, Role};
pub use codec::Codec;
pub use error::{AccessorError, CodecError, ValueTypeError};
pub use resolver::{RoleTypes, TypeResolver};
pub use types::TypeDef;
pub use value::Value;
