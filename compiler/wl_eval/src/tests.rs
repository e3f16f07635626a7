#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wl_ir::{Op, Span, StringInterner, TokenKind, TokenList, TokenRange};
use wl_lexer::lex;
use wl_parse::{SyntaxError, SyntaxErrorKind};

/// Whole token stream of `source` minus its closing `End`.
fn expr_range(tokens: &TokenList) -> TokenRange {
    TokenRange::new(0, tokens.len().saturating_sub(1))
}

fn eval_with(source: &str, setup: impl FnOnce(&StringInterner, &mut Environment)) -> EvalResult {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner).unwrap();
    let mut env = Environment::new();
    setup(&interner, &mut env);
    evaluate(&tokens, expr_range(&tokens), &env)
}

fn eval_str(source: &str) -> EvalResult {
    eval_with(source, |_, _| {})
}

fn syntax_kind(source: &str) -> SyntaxErrorKind {
    match eval_str(source) {
        Err(EvalError::Syntax(SyntaxError { kind, .. })) => kind,
        other => panic!("expected a syntax error for {source:?}, got {other:?}"),
    }
}

#[test]
fn test_precedence() {
    assert_eq!(eval_str("2 + 3 * 4").unwrap(), 14);
    assert_eq!(eval_str("( 2 + 3 ) * 4").unwrap(), 20);
    assert_eq!(eval_str("1 < 2 and 3 > 4").unwrap(), 0);
    assert_eq!(eval_str("2 + 2 > 3").unwrap(), 1);
}

#[test]
fn test_left_associative() {
    assert_eq!(eval_str("10 - 3 - 2").unwrap(), 5);
    assert_eq!(eval_str("100 / 10 / 5").unwrap(), 2);
}

#[test]
fn test_and_binds_looser_than_or() {
    // Parsed as `( true or false ) and false`.
    assert_eq!(eval_str("true or false and false").unwrap(), 0);
    assert_eq!(eval_str("true or ( false and false )").unwrap(), 1);
}

#[test]
fn test_truthiness() {
    assert_eq!(eval_str("5 and 7").unwrap(), 1);
    assert_eq!(eval_str("0 or 0").unwrap(), 0);
    assert_eq!(eval_str("0 or 3").unwrap(), 1);
    assert_eq!(eval_str("true + true").unwrap(), 2);
}

#[test]
fn test_variables() {
    assert_eq!(eval_str("undefined_var + 5").unwrap(), 5);
    let squared = eval_with("x * x", |interner, env| env.set(interner.intern("x"), 7));
    assert_eq!(squared.unwrap(), 49);
}

#[test]
fn test_missing_left_operand_is_zero() {
    assert_eq!(eval_str("- 5").unwrap(), -5);
    assert_eq!(eval_str("( - 5 ) + 8").unwrap(), 3);
}

#[test]
fn test_division_truncates() {
    assert_eq!(eval_str("7 / 2").unwrap(), 3);
    assert_eq!(eval_str("0 - 7 / 2").unwrap(), -3);
}

#[test]
fn test_division_by_zero() {
    let err = eval_str("1 / 0").unwrap_err();
    assert_eq!(
        err,
        EvalError::Arithmetic(ArithmeticError::DivisionByZero {
            span: Span::new(2, 3)
        })
    );
    assert_eq!(err.code(), wl_diagnostic::ErrorCode::E2001);
}

#[test]
fn test_overflow() {
    let err = eval_str("9223372036854775807 + 1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::Arithmetic(ArithmeticError::Overflow { op: Op::Plus, .. })
    ));

    assert_eq!(
        eval_str("0 - 9223372036854775807 - 1").unwrap(),
        i64::MIN
    );
    let err = eval_str("( 0 - 9223372036854775807 - 1 ) / ( 0 - 1 )").unwrap_err();
    assert!(matches!(
        err,
        EvalError::Arithmetic(ArithmeticError::Overflow { op: Op::Slash, .. })
    ));
}

#[test]
fn test_unbalanced_parens() {
    assert_eq!(syntax_kind("( 1 + 2"), SyntaxErrorKind::UnbalancedParen(Op::LParen));
    assert_eq!(syntax_kind("1 + 2 )"), SyntaxErrorKind::UnbalancedParen(Op::RParen));
}

#[test]
fn test_malformed_shapes() {
    assert_eq!(syntax_kind("( )"), SyntaxErrorKind::EmptyExpression);
    assert_eq!(syntax_kind("1 2"), SyntaxErrorKind::DanglingOperand);
    assert_eq!(syntax_kind("+"), SyntaxErrorKind::MissingOperand(Op::Plus));
    assert_eq!(
        syntax_kind("1 + then 2"),
        SyntaxErrorKind::UnexpectedToken {
            found: "`then`".to_string()
        }
    );
}

#[test]
fn test_empty_range() {
    let tokens = TokenList::new();
    let err = evaluate(&tokens, TokenRange::new(0, 0), &Environment::new()).unwrap_err();
    match err {
        EvalError::Syntax(err) => {
            assert_eq!(err.kind, SyntaxErrorKind::EmptyExpression);
            assert_eq!(err.to_diagnostic().code, wl_diagnostic::ErrorCode::E1002);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_postfix_order() {
    let interner = StringInterner::new();
    let tokens = lex("1 + 2 * 3 - 4", &interner).unwrap();
    let postfix = to_postfix(&tokens, expr_range(&tokens)).unwrap();
    let kinds: Vec<_> = postfix.iter().map(|(_, t)| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(1),
            TokenKind::Number(2),
            TokenKind::Number(3),
            TokenKind::Operator(Op::Star),
            TokenKind::Operator(Op::Plus),
            TokenKind::Number(4),
            TokenKind::Operator(Op::Minus),
        ]
    );
    let indices: Vec<_> = postfix.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 2, 4, 3, 1, 6, 5]);
}

#[test]
fn test_apply_binary() {
    let span = Span::DUMMY;
    assert_eq!(apply_binary(Op::Lt, 1, 2, span), Ok(1));
    assert_eq!(apply_binary(Op::Gt, 1, 2, span), Ok(0));
    assert_eq!(
        apply_binary(Op::Star, i64::MAX, 2, span),
        Err(ArithmeticError::Overflow { op: Op::Star, span })
    );
    assert_eq!(
        apply_binary(Op::Slash, 1, 0, span),
        Err(ArithmeticError::DivisionByZero { span })
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let interner = StringInterner::new();
    let tokens = lex("( a + 3 ) * b - a / 2", &interner).unwrap();
    let mut env = Environment::new();
    env.set(interner.intern("a"), 9);
    env.set(interner.intern("b"), -4);
    let range = expr_range(&tokens);

    let first = evaluate(&tokens, range, &env).unwrap();
    let second = evaluate(&tokens, range, &env).unwrap();
    assert_eq!(first, -52);
    assert_eq!(first, second);
}

fn checked(op: Op, a: i64, b: i64) -> Option<i64> {
    match op {
        Op::Plus => a.checked_add(b),
        Op::Minus => a.checked_sub(b),
        Op::Star => a.checked_mul(b),
        Op::Slash => a.checked_div(b),
        _ => None,
    }
}

proptest! {
    #[test]
    fn arithmetic_matches_checked_i64(
        a in 0..=i64::MAX,
        b in 0..=i64::MAX,
        op in prop::sample::select(vec![Op::Plus, Op::Minus, Op::Star, Op::Slash])
    ) {
        let result = eval_str(&format!("{a} {op} {b}"));
        match checked(op, a, b) {
            Some(expected) => {
                prop_assert_eq!(result, Ok(expected));
            }
            None if op == Op::Slash && b == 0 => {
                let is_expected = matches!(
                    result,
                    Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero { .. }))
                );
                prop_assert!(is_expected);
            }
            None => {
                let is_expected = matches!(
                    result,
                    Err(EvalError::Arithmetic(ArithmeticError::Overflow { .. }))
                );
                prop_assert!(is_expected);
            }
        }
    }

    #[test]
    fn small_values_never_fail(a in 0i64..1000, b in 1i64..1000) {
        let source = format!("( {a} + {b} ) * {b} / {b} - {a} < {a} or {b} > {a}");
        prop_assert!(eval_str(&source).is_ok());
    }
}
