#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::collections::BTreeMap;

use super::*;
use crate::{ArithmeticError, EvalError, Executor, NeverInterrupt};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wl_ir::Span;
use wl_lexer::lex;
use wl_parse::{parse, SyntaxErrorKind};

fn program(source: &str) -> Program {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner).unwrap();
    let tree = parse(&tokens).unwrap();
    Program::new(source, interner, tokens, tree)
}

fn run(source: &str) -> (EvalResult<()>, BTreeMap<String, i64>) {
    let mut interp = Interpreter::new(program(source));
    let result = interp.run();
    (result, interp.snapshot())
}

fn vars(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn test_while_loop() {
    let (result, env) = run("x := 0 ; y := 5 ; while ( x < y ) do { x := x + 1 }");
    assert_eq!(result, Ok(()));
    assert_eq!(env, vars(&[("x", 5), ("y", 5)]));
}

#[test]
fn test_if_takes_consequence() {
    let (result, env) = run("a := 3 ; b := 7 ; if ( a < b ) then { m := a } else { m := b }");
    assert_eq!(result, Ok(()));
    assert_eq!(env, vars(&[("a", 3), ("b", 7), ("m", 3)]));
}

#[test]
fn test_if_takes_alternative() {
    let (_, env) = run("a := 9 ; b := 7 ; if ( a < b ) then { m := a } else { m := b }");
    assert_eq!(env["m"], 7);
}

#[test]
fn test_empty_alternative() {
    let (result, env) = run("if false then { x := 1 } else { }");
    assert_eq!(result, Ok(()));
    assert!(env.is_empty());
}

#[test]
fn test_nested_loops() {
    let source = "\
i := 0
total := 0
while i < 4 do
{
  j := 0
  while j < 3 do
  {
    total := total + 1
    j := j + 1
  }
  i := i + 1
}
";
    let (result, env) = run(source);
    assert_eq!(result, Ok(()));
    assert_eq!(env, vars(&[("i", 4), ("j", 3), ("total", 12)]));
}

#[test]
fn test_factorial() {
    let (_, env) = run("n := 5 ; f := 1 ; while n > 0 do { f := f * n ; n := n - 1 }");
    assert_eq!(env, vars(&[("f", 120), ("n", 0)]));
}

#[test]
fn test_error_keeps_prior_assignments() {
    let (result, env) = run("x := 4 ; y := x / ( 0 ) ; z := 1");
    assert_eq!(
        result,
        Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero {
            span: Span::new(16, 17)
        }))
    );
    assert_eq!(env, vars(&[("x", 4)]));
}

#[test]
fn test_empty_rvalue_fails_at_runtime() {
    let (result, env) = run("a := 1 ; x := ;");
    match result {
        Err(EvalError::Syntax(err)) => assert_eq!(err.kind, SyntaxErrorKind::EmptyExpression),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(env, vars(&[("a", 1)]));
}

#[test]
fn test_step_limit() {
    let mut interp = Interpreter::builder(program("while true do { x := x + 1 }"))
        .max_steps(Some(10))
        .build();
    let err = interp.run().unwrap_err();
    assert!(matches!(err, EvalError::StepLimitExceeded { limit: 10, .. }));
    assert_eq!(err.to_diagnostic().code, wl_diagnostic::ErrorCode::E3002);
    // `while` + (assign + iteration) * 4 + assign = 10 steps, x = 5.
    assert_eq!(interp.snapshot(), vars(&[("x", 5)]));
    assert_eq!(interp.steps(), 11);
}

#[test]
fn test_generous_step_limit_is_invisible() {
    let mut interp = Interpreter::builder(program("x := 1 ; y := 2"))
        .max_steps(Some(100))
        .build();
    assert_eq!(interp.run(), Ok(()));
    assert_eq!(interp.steps(), 2);
}

#[test]
fn test_interrupt() {
    let mut polls = 0;
    let mut interp = Interpreter::builder(program("while true do { x := x + 1 }"))
        .interrupt(move || {
            polls += 1;
            polls > 3
        })
        .build();
    let err = interp.run().unwrap_err();
    assert!(matches!(err, EvalError::Interrupted { .. }));
    assert_eq!(interp.snapshot(), vars(&[("x", 1)]));
}

#[test]
fn test_seeded_environment() {
    let program = program("y := x + 1");
    let mut env = Environment::new();
    env.set(program.interner().intern("x"), 10);

    let mut interp = Interpreter::builder(program).env(env).build();
    interp.run().unwrap();
    assert_eq!(interp.snapshot(), vars(&[("x", 10), ("y", 11)]));
    assert_eq!(interp.into_environment().len(), 2);
}

#[test]
fn test_executor_runs_a_sub_chain() {
    let program = program("while false do { a := 1 ; b := 2 }");
    let arena = &program.tree().arena;
    let body = match program.tree().body().map(|id| arena.get(id).kind) {
        Some(wl_ir::StmtKind::While { body, .. }) => body,
        other => panic!("unexpected {other:?}"),
    };

    let mut env = Environment::new();
    let mut interrupt = NeverInterrupt;
    let mut executor = Executor::new(arena, program.tokens(), &mut env, &mut interrupt);
    executor.execute(body).unwrap();
    assert_eq!(executor.steps(), 2);
    assert_eq!(env.snapshot(program.interner()), vars(&[("a", 1), ("b", 2)]));
}

#[test]
fn test_deep_nesting() {
    let depth = 2_000;
    let source = format!(
        "{}x := 1 {}",
        "if true then { ".repeat(depth),
        "} else { } ".repeat(depth)
    );
    let (result, env) = run(&source);
    assert_eq!(result, Ok(()));
    assert_eq!(env, vars(&[("x", 1)]));
}

#[test]
fn test_program_keeps_source() {
    let interp = Interpreter::new(program("x := 1"));
    assert_eq!(interp.program().source(), "x := 1");
    assert!(interp.environment().is_empty());
}

proptest! {
    #[test]
    fn fresh_interpreters_agree(a in 0i64..50, b in 0i64..1000) {
        let source = format!("a := {a} ; b := {b} ; while a > 0 do {{ a := a - 1 ; b := b + 2 }}");
        let (first, env1) = run(&source);
        let (second, env2) = run(&source);
        prop_assert_eq!(first, Ok(()));
        prop_assert_eq!(second, Ok(()));
        prop_assert_eq!(env1["b"], b + 2 * a);
        prop_assert_eq!(env1, env2);
    }

    #[test]
    fn loop_free_programs_terminate(
        steps in prop::collection::vec((0usize..4, 0usize..4, any::<bool>(), 0i64..100), 0..24)
    ) {
        let mut source = String::new();
        for (target, operand, add, k) in steps {
            let op = if add { "+" } else { "-" };
            source.push_str(&format!(
                "if v{operand} < {k} then {{ v{target} := v{operand} {op} {k} }} else {{ v{target} := {k} }}\n"
            ));
        }
        let (result, _) = run(&source);
        prop_assert_eq!(result, Ok(()));
    }
}
