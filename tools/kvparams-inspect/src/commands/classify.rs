use anyhow::{Context, Result};
use clap::Args;
use kvparams::{
    CodecAwareParametersAccessor,
    core::{ParametersAccessor, Role, TypeDef},
    params::DefaultParametersAccessor,
};

use crate::{format::CodecKind, param::ParamSpec};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Codec whose declared types drive role inference
    #[arg(short, long, value_enum, default_value_t = CodecKind::String)]
    codec: CodecKind,

    /// Parameters as `[@key:|@value:][name=]<type>:<literal>`,
    /// e.g. `@key:id=string:user:1`, `i64:7`, `bytes:00ff`, `null:`
    #[arg(required = true, value_parser = parse_param)]
    params: Vec<ParamSpec>,
}

/// Classification of one bindable parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub name: Option<String>,
    pub runtime_type: TypeDef,
    pub role: Option<Role>,
}

impl ClassifyArgs {
    pub fn run(self) -> Result<()> {
        for row in self.rows()? {
            println!(
                "{}\t{}\t{}\t{}",
                row.index,
                row.name.as_deref().unwrap_or("-"),
                row.runtime_type,
                row.role.as_ref().map(Role::as_str).unwrap_or("-"),
            );
        }
        Ok(())
    }

    pub fn rows(&self) -> Result<Vec<Row>> {
        let codec = self.codec.codec();
        let (parameters, arguments): (Vec<_>, Vec<_>) = self
            .params
            .iter()
            .cloned()
            .map(|spec| (spec.parameter, spec.argument))
            .unzip();

        let delegate = DefaultParametersAccessor::new(parameters, arguments)?;
        let classifier = CodecAwareParametersAccessor::builder()
            .delegate(delegate)
            .codec(codec.as_ref())
            .build()?;

        (0..classifier.parameter_count())
            .map(|index| -> Result<Row> {
                let parameter = classifier.delegate().parameter(index)?;
                let role = classifier
                    .role(index)
                    .with_context(|| format!("failed to classify parameter {index}"))?;
                Ok(Row {
                    index,
                    name: parameter.name.clone(),
                    runtime_type: classifier.bindable_value(index)?.type_def(),
                    role,
                })
            })
            .collect()
    }
}

fn parse_param(raw: &str) -> Result<ParamSpec, String> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: ClassifyArgs,
    }

    fn rows(argv: &[&str]) -> Vec<Row> {
        let argv = std::iter::once("classify").chain(argv.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        cli.args.rows().unwrap()
    }

    fn roles(rows: &[Row]) -> Vec<Option<Role>> {
        rows.iter().map(|row| row.role).collect()
    }

    #[test]
    fn string_codec_rows() {
        let rows = rows(&["id=string:user:1", "@value:ttl=string:60", "null:", "i64:7"]);

        assert_eq!(
            rows[0],
            Row {
                index: 0,
                name: Some("id".to_string()),
                runtime_type: TypeDef::String,
                role: Some(Role::Key),
            }
        );
        assert_eq!(rows[1].name.as_deref(), Some("ttl"));
        assert_eq!(rows[2].runtime_type, TypeDef::Null);
        assert_eq!(rows[2].name, None);
        assert_eq!(roles(&rows), vec![Some(Role::Key), Some(Role::Value), None, None]);
    }

    #[test]
    fn erased_codec_uses_annotations_only() {
        let rows = rows(&[
            "--codec",
            "erased",
            "string:a",
            "@key:string:b",
            "@value:string:c",
        ]);

        assert_eq!(roles(&rows), vec![None, Some(Role::Key), Some(Role::Value)]);
    }

    #[test]
    fn bytes_codec_infers_byte_keys() {
        let rows = rows(&["--codec", "bytes", "bytes:00ff", "string:x"]);

        assert_eq!(rows[0].runtime_type, TypeDef::Bytes);
        assert_eq!(roles(&rows), vec![Some(Role::Key), None]);
    }

    #[test]
    fn malformed_parameter_fails_to_parse() {
        assert!(Cli::try_parse_from(["classify", "i64:seven"]).is_err());
        assert!(Cli::try_parse_from(["classify", "null:x"]).is_err());
        assert!(Cli::try_parse_from(["classify"]).is_err());
    }
}
