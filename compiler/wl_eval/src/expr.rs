//! Expression evaluation over a token range.
//!
//! Two passes: shunting-yard to postfix, then a single operand-stack
//! reduction. Neither pass allocates for typical expressions (both stacks
//! are inline `SmallVec`s).

use smallvec::SmallVec;
use wl_ir::{Op, Token, TokenKind, TokenList, TokenRange};
use wl_parse::{ErrorContext, SyntaxError, SyntaxErrorKind};

use crate::operators::apply_binary;
use crate::{Environment, EvalResult};

/// Postfix form of an expression: each token with its index in the stream.
pub type Postfix = SmallVec<[(usize, Token); 16]>;

/// Reorder the tokens of `range` into postfix.
///
/// `(` sits on the operator stack with the lowest precedence, so only the
/// matching `)` removes it. Operators of equal precedence associate left.
pub fn to_postfix(tokens: &TokenList, range: TokenRange) -> Result<Postfix, SyntaxError> {
    let mut output = Postfix::new();
    let mut ops: SmallVec<[(usize, Token); 8]> = SmallVec::new();

    for (offset, &token) in tokens.slice(range).iter().enumerate() {
        let index = range.start as usize + offset;
        match token.kind {
            TokenKind::Number(_) | TokenKind::Bool(_) | TokenKind::Variable(_) => {
                output.push((index, token));
            }
            TokenKind::Operator(Op::LParen) => ops.push((index, token)),
            TokenKind::Operator(Op::RParen) => loop {
                match ops.pop() {
                    Some((_, top)) if top.kind.is_op(Op::LParen) => break,
                    Some(entry) => output.push(entry),
                    None => {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::UnbalancedParen(Op::RParen),
                            index,
                            token.span,
                        )
                        .in_context(ErrorContext::Expression));
                    }
                }
            },
            TokenKind::Operator(op) if op.is_binary() => {
                let prec = precedence_of(token);
                while let Some(&(_, top)) = ops.last() {
                    if precedence_of(top) < prec {
                        break;
                    }
                    if let Some(entry) = ops.pop() {
                        output.push(entry);
                    }
                }
                ops.push((index, token));
            }
            TokenKind::Operator(_) | TokenKind::End => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken {
                        found: token.kind.describe(),
                    },
                    index,
                    token.span,
                )
                .in_context(ErrorContext::Expression));
            }
        }
    }

    while let Some((index, top)) = ops.pop() {
        if top.kind.is_op(Op::LParen) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnbalancedParen(Op::LParen),
                index,
                top.span,
            )
            .in_context(ErrorContext::Expression));
        }
        output.push((index, top));
    }

    Ok(output)
}

/// Precedence of an operator token on the stack; anything without one
/// (never pushed in practice) ranks with `(`.
fn precedence_of(token: Token) -> i8 {
    match token.kind {
        TokenKind::Operator(op) => op.precedence().unwrap_or(-1),
        _ => -1,
    }
}

/// Evaluate the expression in `range` against `env`.
///
/// Booleans are `0`/`1`. An operator with a single operand available treats
/// its missing left side as `0`.
#[tracing::instrument(level = "trace", skip(tokens, env))]
pub fn evaluate(tokens: &TokenList, range: TokenRange, env: &Environment) -> EvalResult {
    let postfix = to_postfix(tokens, range)?;
    let mut stack: SmallVec<[i64; 16]> = SmallVec::new();

    for &(index, token) in &postfix {
        match token.kind {
            TokenKind::Number(n) => stack.push(n),
            TokenKind::Bool(b) => stack.push(i64::from(b)),
            TokenKind::Variable(name) => stack.push(env.lookup_or_zero(name)),
            TokenKind::Operator(op) => {
                let right = stack.pop().ok_or_else(|| {
                    SyntaxError::new(SyntaxErrorKind::MissingOperand(op), index, token.span)
                        .in_context(ErrorContext::Expression)
                })?;
                let left = stack.pop().unwrap_or(0);
                stack.push(apply_binary(op, left, right, token.span)?);
            }
            TokenKind::End => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken {
                        found: token.kind.describe(),
                    },
                    index,
                    token.span,
                )
                .into());
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(SyntaxError::new(
            SyntaxErrorKind::EmptyExpression,
            range.start as usize,
            tokens.span_of(range),
        )
        .in_context(ErrorContext::Expression)
        .into()),
        _ => Err(SyntaxError::new(
            SyntaxErrorKind::DanglingOperand,
            range.start as usize,
            tokens.span_of(range),
        )
        .in_context(ErrorContext::Expression)
        .into()),
    }
}
