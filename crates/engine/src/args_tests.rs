// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::registry::{CommandSpec, ParamType};

fn tail() -> Signature {
    CommandSpec::new("tail", "")
        .arg("data", ParamType::Str)
        .opt("line_count", ParamType::Int, 10i64)
        .signature
}

fn grep() -> Signature {
    CommandSpec::new("grep", "")
        .arg("data", ParamType::Str)
        .arg("patterns", ParamType::Str)
        .rest("opts", ParamType::Str)
        .signature
}

#[test]
fn binds_positionally_with_defaults() {
    let args = Args::bind(&tail(), vec![Value::from("a\nb")]).unwrap();
    assert_eq!(args.str("data").unwrap(), "a\nb");
    assert_eq!(args.int("line_count").unwrap(), 10);
    assert!(args.rest().is_empty());
}

#[test]
fn coerces_literal_strings() {
    let args = Args::bind(&tail(), vec![Value::from("x"), Value::from("3")]).unwrap();
    assert_eq!(args.int("line_count").unwrap(), 3);
}

#[test]
fn int_argument_renders_into_string_param() {
    let args = Args::bind(&tail(), vec![Value::Int(5)]).unwrap();
    assert_eq!(args.str("data").unwrap(), "5");
}

#[test]
fn missing_required_names_parameter() {
    let err = Args::bind(&grep(), vec![Value::from("data")]).unwrap_err();
    assert_eq!(
        err,
        ArgumentError::Missing {
            param: "patterns".to_string(),
            expected: "string"
        }
    );
    assert_eq!(err.to_string(), "missing required argument `patterns` (string)");
}

#[test]
fn too_many_without_variadic() {
    let err = Args::bind(
        &tail(),
        vec![Value::from("a"), Value::Int(1), Value::Int(2)],
    )
    .unwrap_err();
    assert_eq!(err, ArgumentError::TooMany { max: 2, got: 3 });
}

#[test]
fn surplus_goes_to_variadic() {
    let args = Args::bind(
        &grep(),
        vec![
            Value::from("data"),
            Value::from("eval"),
            Value::from("-i"),
            Value::Int(3),
        ],
    )
    .unwrap();
    assert_eq!(args.rest_text(), vec!["-i", "3"]);
}

#[test]
fn type_mismatch_describes_value() {
    let err = Args::bind(&tail(), vec![Value::from("x"), Value::from("ten")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "argument `line_count` expects integer, got string \"ten\""
    );
}

#[test]
fn long_values_are_truncated_in_errors() {
    let long = "y".repeat(100);
    let err = Args::bind(&tail(), vec![Value::from("x"), Value::Str(long)]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(&format!("\"{}...\"", "y".repeat(32))), "{message}");
}

#[test]
fn unit_never_satisfies_required() {
    let err = Args::bind(&tail(), vec![Value::Unit]).unwrap_err();
    assert_eq!(
        err,
        ArgumentError::Type {
            param: "data".to_string(),
            expected: "string",
            found: "nothing".to_string(),
        }
    );
}

#[test]
fn unit_falls_back_to_default_and_leaves_variadic() {
    let args = Args::bind(&tail(), vec![Value::from("x"), Value::Unit]).unwrap();
    assert_eq!(args.int("line_count").unwrap(), 10);

    let args = Args::bind(
        &grep(),
        vec![Value::from("d"), Value::from("p"), Value::Unit, Value::from("-v")],
    )
    .unwrap();
    assert_eq!(args.rest_text(), vec!["-v"]);
}

#[test]
fn accessor_type_mismatch_is_an_error() {
    let args = Args::bind(&tail(), vec![Value::from("x")]).unwrap();
    assert!(args.bool("line_count").is_err());
    assert!(args.str("unknown").is_err());
    assert_eq!(args.get("line_count"), Some(&Value::Int(10)));
}

#[test]
fn positive_rejects_zero_and_negative() {
    for n in [0, -3] {
        let args = Args::bind(&tail(), vec![Value::from("x"), Value::Int(n)]).unwrap();
        let err = args.positive("line_count").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("argument `line_count` must be positive, got {n}")
        );
    }
    let args = Args::bind(&tail(), vec![Value::from("x"), Value::Int(4)]).unwrap();
    assert_eq!(args.positive("line_count").unwrap(), 4);
}
