use kvparams_core::{AccessorError, ParametersAccessor, TypeDef, Value};
use kvparams_params::{DefaultParametersAccessor, MethodParameters, ParameterDef};

/// `set(key, value, timeout)` with the timeout excluded from binding.
fn set_with_timeout() -> DefaultParametersAccessor {
    let parameters = vec![
        ParameterDef::new("key", TypeDef::String).key(),
        ParameterDef::new("value", TypeDef::Any).value(),
        ParameterDef::new("timeout", TypeDef::I64).non_bindable(),
    ];
    DefaultParametersAccessor::new(
        parameters,
        vec![Value::string("k"), Value::I64(1), Value::I64(500)],
    )
    .unwrap()
}

#[test]
fn non_bindable_parameters_are_skipped() {
    let accessor = set_with_timeout();
    assert_eq!(accessor.parameter_count(), 2);
    assert_eq!(accessor.bindable_value(1).unwrap(), &Value::I64(1));

    let values: Vec<_> = accessor.bindable_values().cloned().collect();
    assert_eq!(values, vec![Value::string("k"), Value::I64(1)]);
}

#[test]
fn explicit_annotations_are_reported() {
    let accessor = set_with_timeout();
    assert!(accessor.is_key(0).unwrap());
    assert!(!accessor.is_value(0).unwrap());
    assert!(accessor.is_value(1).unwrap());
    assert!(!accessor.is_key(1).unwrap());
}

#[test]
fn unannotated_parameter_has_no_explicit_role() {
    let accessor = DefaultParametersAccessor::new(
        vec![ParameterDef::unnamed(TypeDef::String)],
        vec![Value::string("abc")],
    )
    .unwrap();
    assert!(!accessor.is_key(0).unwrap());
    assert!(!accessor.is_value(0).unwrap());
}

#[test]
fn index_past_bindable_count_is_out_of_bounds() {
    let accessor = set_with_timeout();
    assert_eq!(
        accessor.bindable_value(2).unwrap_err(),
        AccessorError::IndexOutOfBounds { index: 2, count: 2 }
    );
    assert!(matches!(
        accessor.is_key(5),
        Err(AccessorError::IndexOutOfBounds { index: 5, count: 2 })
    ));
}

#[test]
fn resolves_names_to_bindable_indices() {
    let parameters = vec![
        ParameterDef::new("timeout", TypeDef::I64).non_bindable(),
        ParameterDef::new("key", TypeDef::String),
        ParameterDef::unnamed(TypeDef::String),
        ParameterDef::new("field", TypeDef::String),
    ];
    let accessor = DefaultParametersAccessor::new(
        parameters,
        vec![Value::I64(1), Value::string("k"), Value::Null, Value::string("f")],
    )
    .unwrap();

    assert_eq!(accessor.resolve_parameter_index("key").unwrap(), 0);
    assert_eq!(accessor.resolve_parameter_index("field").unwrap(), 2);
    assert_eq!(
        accessor.resolve_parameter_index("timeout").unwrap_err(),
        AccessorError::UnknownParameter {
            name: "timeout".to_string()
        }
    );
}

#[test]
fn null_scalar_is_bindable_null() {
    let parameters = vec![
        ParameterDef::new("member", TypeDef::String),
        ParameterDef::new("members", TypeDef::List),
        ParameterDef::new("present", TypeDef::String),
    ];
    let accessor = DefaultParametersAccessor::new(
        parameters,
        vec![Value::Null, Value::Null, Value::string("x")],
    )
    .unwrap();

    assert!(accessor.is_bindable_null_value(0).unwrap());
    assert!(!accessor.is_bindable_null_value(1).unwrap());
    assert!(!accessor.is_bindable_null_value(2).unwrap());
}

#[test]
fn argument_count_must_match_declaration() {
    let err = DefaultParametersAccessor::new(
        vec![ParameterDef::new("key", TypeDef::String)],
        vec![Value::string("a"), Value::string("b")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        AccessorError::ArgumentCountMismatch {
            expected: 1,
            actual: 2
        }
    );
    assert_eq!(err.to_string(), "expected 1 arguments, got 2");
}

#[test]
fn method_parameters_collects_and_derefs() {
    let parameters: MethodParameters = [
        ParameterDef::new("a", TypeDef::String),
        ParameterDef::new("b", TypeDef::I64).non_bindable(),
    ]
    .into_iter()
    .collect();

    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters.bindable_positions(), vec![0]);
    assert_eq!(parameters[1].name.as_deref(), Some("b"));
}
