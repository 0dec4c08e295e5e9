//! Command-line parameter syntax: `[@key:|@value:][name=]<type>:<literal>`.

use std::str::FromStr;

use kvparams::{
    core::{TypeDef, Value},
    params::ParameterDef,
};

/// One declared parameter together with its argument.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub parameter: ParameterDef,
    pub argument: Value,
}

impl FromStr for ParamSpec {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (annotation, rest) = if let Some(rest) = raw.strip_prefix("@key:") {
            (Some(true), rest)
        } else if let Some(rest) = raw.strip_prefix("@value:") {
            (Some(false), rest)
        } else {
            (None, raw)
        };

        let (type_name, literal) = rest
            .split_once(':')
            .ok_or_else(|| format!("missing ':' between type and literal in '{raw}'"))?;

        // The name is only looked for before the type, so literals may contain '='.
        let (name, type_name) = match type_name.split_once('=') {
            Some((name, type_name)) if !name.is_empty() => (Some(name), type_name),
            Some(_) => return Err(format!("empty parameter name in '{raw}'")),
            None => (None, type_name),
        };

        let (declared_type, argument) = parse_literal(type_name, literal)?;
        let mut parameter = match name {
            Some(name) => ParameterDef::new(name, declared_type),
            None => ParameterDef::unnamed(declared_type),
        };
        parameter = match annotation {
            Some(true) => parameter.key(),
            Some(false) => parameter.value(),
            None => parameter,
        };

        Ok(Self {
            parameter,
            argument,
        })
    }
}

fn parse_literal(type_name: &str, literal: &str) -> Result<(TypeDef, Value), String> {
    let value = match type_name {
        "null" if literal.is_empty() => return Ok((TypeDef::Any, Value::Null)),
        "null" => return Err(format!("null takes no literal, got '{literal}'")),
        "bool" => Value::from(
            literal
                .parse::<bool>()
                .map_err(|e| format!("invalid bool '{literal}': {e}"))?,
        ),
        "i64" => Value::from(
            literal
                .parse::<i64>()
                .map_err(|e| format!("invalid i64 '{literal}': {e}"))?,
        ),
        "f64" => Value::F64(
            literal
                .parse()
                .map_err(|e| format!("invalid f64 '{literal}': {e}"))?,
        ),
        "string" => Value::from(literal),
        "bytes" => Value::from(
            hex::decode(literal).map_err(|e| format!("invalid hex '{literal}': {e}"))?,
        ),
        other => {
            return Err(format!(
                "unknown type '{other}' (expected null, bool, i64, f64, string, bytes)"
            ));
        }
    };
    Ok((value.type_def(), value))
}

#[cfg(test)]
mod tests {
    use kvparams::core::Role;

    use super::*;

    #[test]
    fn parses_plain_literal() {
        let spec: ParamSpec = "i64:7".parse().unwrap();
        assert_eq!(spec.argument, Value::I64(7));
        assert_eq!(spec.parameter.declared_type, TypeDef::I64);
        assert_eq!(spec.parameter.name, None);
        assert_eq!(spec.parameter.annotation, None);
    }

    #[test]
    fn parses_annotation_and_name() {
        let spec: ParamSpec = "@key:id=string:user:1".parse().unwrap();
        assert_eq!(spec.parameter.name.as_deref(), Some("id"));
        assert_eq!(spec.parameter.annotation, Some(Role::Key));
        assert_eq!(spec.argument, Value::string("user:1"));

        let spec: ParamSpec = "@value:string:a=b".parse().unwrap();
        assert_eq!(spec.parameter.annotation, Some(Role::Value));
        assert_eq!(spec.parameter.name, None);
        assert_eq!(spec.argument, Value::string("a=b"));
    }

    #[test]
    fn parses_bytes_and_null() {
        let spec: ParamSpec = "bytes:00ff".parse().unwrap();
        assert_eq!(spec.argument, Value::bytes([0x00, 0xff]));

        let spec: ParamSpec = "null:".parse().unwrap();
        assert_eq!(spec.argument, Value::Null);
        assert_eq!(spec.parameter.declared_type, TypeDef::Any);

        let spec: ParamSpec = "flag=bool:true".parse().unwrap();
        assert_eq!(spec.argument, Value::Bool(true));
    }

    #[test]
    fn null_rejects_literal() {
        let err = "null:abc".parse::<ParamSpec>().unwrap_err();
        assert!(err.contains("null takes no literal"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("i64".parse::<ParamSpec>().is_err());
        assert!("i64:seven".parse::<ParamSpec>().is_err());
        assert!("=string:x".parse::<ParamSpec>().is_err());
        assert!("float:1.0".parse::<ParamSpec>().unwrap_err().contains("unknown type"));
    }
}
