//! Binary operator implementations.
//!
//! Every value is an `i64`; booleans are `0`/`1` and truthiness is
//! "nonzero". Arithmetic is checked: no operation wraps or panics.

use wl_ir::{Op, Span};

use crate::ArithmeticError;

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: Op, span: Span) -> Result<i64, ArithmeticError> {
    result.ok_or(ArithmeticError::Overflow { op, span })
}

/// Checked division with zero guard.
///
/// `i64::MIN / -1` is the one overflowing quotient.
#[inline]
fn checked_div(left: i64, right: i64, span: Span) -> Result<i64, ArithmeticError> {
    if right == 0 {
        Err(ArithmeticError::DivisionByZero { span })
    } else {
        checked_arith(left.checked_div(right), Op::Slash, span)
    }
}

#[inline]
fn truthy(value: i64) -> bool {
    value != 0
}

/// Apply a binary operator. `span` locates the operator for error reporting.
///
/// Non-binary operators never reach here (the postfix pass rejects them);
/// they evaluate to `0`.
pub fn apply_binary(op: Op, left: i64, right: i64, span: Span) -> Result<i64, ArithmeticError> {
    match op {
        Op::And => Ok(i64::from(truthy(left) && truthy(right))),
        Op::Or => Ok(i64::from(truthy(left) || truthy(right))),
        Op::Lt => Ok(i64::from(left < right)),
        Op::Gt => Ok(i64::from(left > right)),
        Op::Plus => checked_arith(left.checked_add(right), op, span),
        Op::Minus => checked_arith(left.checked_sub(right), op, span),
        Op::Star => checked_arith(left.checked_mul(right), op, span),
        Op::Slash => checked_div(left, right, span),
        _ => Ok(0),
    }
}
