#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! End-to-end runs through the public entry points.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wl_diagnostic::ErrorCode;
use wl_eval::{ArithmeticError, EvalError};
use wlc::{run, run_with, try_run, Error, RunOptions};

fn env(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), *value))
        .collect()
}

#[test]
fn counting_loop() {
    let result = try_run("x := 0 ; y := 5 ; while x < y do { x := x + 1 }").unwrap();
    assert_eq!(result, env(&[("x", 5), ("y", 5)]));
}

#[test]
fn minimum_of_two() {
    let result =
        try_run("a := 3 ; b := 7 ; if a < b then { m := a } else { m := b }").unwrap();
    assert_eq!(result, env(&[("a", 3), ("b", 7), ("m", 3)]));
}

#[test]
fn division_by_zero_is_reported() {
    let err = try_run("x := 1 / 0").unwrap_err();
    assert!(matches!(
        err,
        Error::Eval(EvalError::Arithmetic(ArithmeticError::DivisionByZero { .. }))
    ));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E2001);

    let output = run("x := 1 / 0");
    assert!(!output.is_ok());
    assert!(output.environment.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::E2001);
}

#[test]
fn if_without_else_is_a_syntax_error() {
    let err = try_run("if ( a < b ) then { x := 1 }").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1001);
}

#[test]
fn undefined_variables_read_as_zero() {
    let result = try_run("x := undefined_var + 5").unwrap();
    assert_eq!(result, env(&[("x", 5)]));
}

#[test]
fn lex_errors_produce_no_state() {
    let output = run("x := 1 ; y := 12ab");
    assert!(output.environment.is_empty());
    assert_eq!(output.diagnostics[0].code, ErrorCode::E0001);

    let err = try_run("x := @").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0004);
}

#[test]
fn runtime_error_keeps_earlier_assignments() {
    let output = run("a := 7 ; b := a - 7 ; c := a / b ; d := 1");
    assert_eq!(output.environment, env(&[("a", 7), ("b", 0)]));
    assert_eq!(output.diagnostics[0].code, ErrorCode::E2001);
}

#[test]
fn overflow_is_reported() {
    let output = run("x := 9223372036854775807 ; y := x + 1");
    assert_eq!(output.environment, env(&[("x", i64::MAX)]));
    assert_eq!(output.diagnostics[0].code, ErrorCode::E2002);
}

#[test]
fn step_limit_stops_infinite_loop() {
    let options = RunOptions {
        max_steps: Some(100),
    };
    let output = run_with("x := 0 ; while 1 do { x := x + 1 }", options);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::E3002);
    assert!(output.environment["x"] > 0);
}

#[test]
fn step_limit_does_not_affect_short_programs() {
    let options = RunOptions {
        max_steps: Some(1_000),
    };
    let output = run_with("x := 0 ; y := 5 ; while x < y do { x := x + 1 }", options);
    assert!(output.is_ok());
    assert_eq!(output.environment, env(&[("x", 5), ("y", 5)]));
}

#[test]
fn newlines_and_semicolons_are_interchangeable() {
    let inline = try_run("x := 0 ; while x < 3 do { x := x + 1 } ; y := x * 2").unwrap();
    let multiline = try_run("x := 0\nwhile x < 3 do\n{\n  x := x + 1\n}\ny := x * 2\n").unwrap();
    assert_eq!(inline, multiline);
    assert_eq!(inline, env(&[("x", 3), ("y", 6)]));
}

#[test]
fn empty_program_succeeds() {
    let output = run("");
    assert!(output.is_ok());
    assert!(output.environment.is_empty());
}

proptest! {
    #[test]
    fn runs_are_deterministic(a in 0i64..1_000, b in 1i64..1_000, n in 0i64..20) {
        let source = format!(
            "a := {a} ; b := {b} ; i := 0 ; while i < {n} do {{ a := a + b ; i := i + 1 }} ; r := a / b"
        );
        let first = run(&source);
        let second = run(&source);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first.environment["a"], a + b * n);
    }
}
