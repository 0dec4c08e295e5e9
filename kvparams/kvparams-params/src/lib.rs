//! Declared command method parameters and the default
//! [`ParametersAccessor`](kvparams_core::ParametersAccessor) over them.
//!
//! Explicit roles come from [`ParameterDef`] annotations; no type-based
//! inference happens here.

mod accessor;
mod parameters;

pub use accessor::DefaultParametersAccessor;
pub use parameters::{MethodParameters, ParameterDef};
