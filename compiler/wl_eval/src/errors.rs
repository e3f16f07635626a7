//! Runtime error types.

use thiserror::Error;
use wl_diagnostic::{Diagnostic, ErrorCode};
use wl_ir::{Op, Span};
use wl_parse::SyntaxError;

/// Checked integer arithmetic failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero { span: Span },
    #[error("integer overflow in `{op}`")]
    Overflow { op: Op, span: Span },
}

impl ArithmeticError {
    /// Span of the operator that failed.
    pub fn span(&self) -> Span {
        match self {
            ArithmeticError::DivisionByZero { span } | ArithmeticError::Overflow { span, .. } => {
                *span
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ArithmeticError::DivisionByZero { .. } => ErrorCode::E2001,
            ArithmeticError::Overflow { .. } => ErrorCode::E2002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ArithmeticError::DivisionByZero { span } => {
                diag.with_label(*span, "divisor evaluated to zero")
            }
            ArithmeticError::Overflow { span, .. } => diag
                .with_label(*span, "result does not fit in 64 bits")
                .with_note(format!(
                    "integers range from {} to {}",
                    i64::MIN,
                    i64::MAX
                )),
        }
    }
}

/// Any failure while executing a program.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError {
    /// A malformed expression, found when its range was evaluated.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// The host's interrupt check asked execution to stop.
    #[error("execution interrupted")]
    Interrupted { span: Span },
    /// The configured step budget ran out.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64, span: Span },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Syntax(err) => err.code(),
            EvalError::Arithmetic(err) => err.code(),
            EvalError::Interrupted { .. } => ErrorCode::E3001,
            EvalError::StepLimitExceeded { .. } => ErrorCode::E3002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            EvalError::Syntax(err) => err.to_diagnostic(),
            EvalError::Arithmetic(err) => err.to_diagnostic(),
            EvalError::Interrupted { span } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(*span, "stopped before this statement"),
            EvalError::StepLimitExceeded { limit, span } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(*span, "stopped before this statement")
                .with_note(format!(
                    "each statement and each loop iteration counts as one step; {limit} were allowed"
                )),
        }
    }
}

pub type EvalResult<T = i64> = Result<T, EvalError>;
