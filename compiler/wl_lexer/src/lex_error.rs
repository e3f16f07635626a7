//! Lexer error types.

use thiserror::Error;
use wl_diagnostic::{Diagnostic, ErrorCode};
use wl_ir::Span;

/// A lexeme that could not be classified.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}: `{lexeme}`")]
pub struct LexError {
    /// Where the lexeme sits in the source.
    pub span: Span,
    /// The offending text.
    pub lexeme: String,
    pub kind: LexErrorKind,
}

/// What was wrong with the lexeme.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Starts with a digit but has non-digit characters (`12ab`).
    #[error("invalid number literal")]
    InvalidNumber,
    /// All digits, but larger than `i64::MAX`.
    #[error("integer literal out of range")]
    IntOverflow,
    /// Starts with an operator symbol but is not an operator (`(x`, `-5`).
    #[error("unknown operator")]
    UnknownOperator,
    /// Starts with a letter but has other symbols in it (`x+1`).
    #[error("invalid identifier")]
    InvalidIdentifier,
    /// Cannot start any token (`@`, `=`, stray `\`).
    #[error("invalid character")]
    InvalidCharacter,
    /// Source longer than `u32::MAX` bytes.
    #[error("source text too large")]
    SourceTooLarge,
}

impl LexError {
    #[cold]
    pub(crate) fn new(kind: LexErrorKind, lexeme: &str, span: Span) -> Self {
        LexError {
            span,
            lexeme: lexeme.to_string(),
            kind,
        }
    }

    /// Error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidNumber => ErrorCode::E0001,
            LexErrorKind::IntOverflow => ErrorCode::E0002,
            LexErrorKind::UnknownOperator => ErrorCode::E0003,
            LexErrorKind::InvalidCharacter => ErrorCode::E0004,
            LexErrorKind::SourceTooLarge => ErrorCode::E0005,
            LexErrorKind::InvalidIdentifier => ErrorCode::E0006,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, "cannot be tokenized");

        match self.kind {
            LexErrorKind::InvalidNumber => {
                diag.with_note("number literals are runs of decimal digits")
            }
            LexErrorKind::IntOverflow => {
                diag.with_note(format!("the largest integer literal is {}", i64::MAX))
            }
            LexErrorKind::UnknownOperator => {
                diag.with_note("operators and parentheses must be separated by whitespace")
            }
            LexErrorKind::InvalidIdentifier => {
                diag.with_note("variable names contain only letters, digits, and `_`")
            }
            LexErrorKind::InvalidCharacter | LexErrorKind::SourceTooLarge => diag,
        }
    }
}
