use clap::ValueEnum;
use kvparams::{
    codec::{ByteArrayCodec, Erased, StringCodec},
    core::Codec,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CodecKind {
    /// UTF-8 string keys and values
    String,
    /// Raw byte keys and values
    Bytes,
    /// String codec with its type arguments hidden
    Erased,
}

impl CodecKind {
    pub fn codec(&self) -> Box<dyn Codec> {
        match self {
            CodecKind::String => Box::new(StringCodec),
            CodecKind::Bytes => Box::new(ByteArrayCodec),
            CodecKind::Erased => Box::new(Erased(StringCodec)),
        }
    }
}
