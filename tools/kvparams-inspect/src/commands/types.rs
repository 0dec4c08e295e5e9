use anyhow::Result;
use clap::Args;
use kvparams::{codec::DeclaredTypeResolver, core::TypeResolver};

use crate::format::CodecKind;

#[derive(Args)]
pub struct TypesArgs {
    /// Codec whose declared types are resolved
    #[arg(short, long, value_enum, default_value_t = CodecKind::String)]
    codec: CodecKind,
}

impl TypesArgs {
    pub fn run(self) -> Result<()> {
        let codec = self.codec.codec();
        let types = DeclaredTypeResolver.resolve(codec.as_ref());
        println!("key: {}", types.key);
        println!("value: {}", types.value);
        Ok(())
    }
}
