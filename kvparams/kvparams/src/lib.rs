mod classifier;
mod error;

pub use classifier::{CodecAwareParametersAccessor, CodecAwareParametersAccessorBuilder};
pub use error::ClassifierError;
pub use kvparams_codec as codec;
pub use kvparams_core as core;
pub use kvparams_params as params;
