//! Syntax error types.
//!
//! Shared by the structural parser and the expression evaluator: a malformed
//! expression is only discovered when its token range is evaluated, and it
//! is reported with the same error type as a malformed statement.

use thiserror::Error;
use wl_diagnostic::{Diagnostic, ErrorCode};
use wl_ir::{Op, Span};

/// What was being parsed when an error occurred.
///
/// Used for "while parsing X" notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Assignment,
    IfStatement,
    WhileLoop,
    Block,
    Expression,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Assignment => "an assignment",
            Self::IfStatement => "an if statement",
            Self::WhileLoop => "a while loop",
            Self::Block => "a block",
            Self::Expression => "an expression",
        }
    }
}

/// Structural or expression-shape error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Source location of the offending token (or a point where one is missing).
    pub span: Span,
    /// Token index the error was detected at.
    pub index: usize,
    pub context: Option<ErrorContext>,
    /// Where the unclosed block began.
    pub opened_at: Option<Span>,
}

/// The specific syntax failure.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyntaxErrorKind {
    /// A required keyword or brace was not found.
    #[error("expected `{expected}`, found {found}")]
    Expected { expected: Op, found: String },
    /// An assignment ran into the end of its block without a terminator.
    #[error("unterminated statement, found {found}")]
    Unterminated { found: String },
    /// An expression range with no tokens.
    #[error("empty expression")]
    EmptyExpression,
    /// `:=` not preceded by a variable.
    #[error("assignment has no target variable")]
    MissingAssignTarget,
    /// A token that cannot appear where it was found.
    #[error("unexpected {found}")]
    UnexpectedToken { found: String },
    /// `(` without `)` or the reverse.
    #[error("unbalanced `{0}`")]
    UnbalancedParen(Op),
    /// A binary operator with nothing to apply to.
    #[error("operator `{0}` is missing its operands")]
    MissingOperand(Op),
    /// More than one value left after reduction.
    #[error("operand is not connected to the rest of the expression")]
    DanglingOperand,
    /// `}` with no open block.
    #[error("`}}` does not close any block")]
    UnmatchedClose,
}

impl SyntaxError {
    #[cold]
    pub fn new(kind: SyntaxErrorKind, index: usize, span: Span) -> Self {
        SyntaxError {
            kind,
            span,
            index,
            context: None,
            opened_at: None,
        }
    }

    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_opened_at(mut self, span: Span) -> Self {
        self.opened_at = Some(span);
        self
    }

    /// Error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SyntaxErrorKind::Expected { .. } | SyntaxErrorKind::Unterminated { .. } => {
                ErrorCode::E1001
            }
            SyntaxErrorKind::EmptyExpression => ErrorCode::E1002,
            SyntaxErrorKind::MissingAssignTarget => ErrorCode::E1003,
            SyntaxErrorKind::UnexpectedToken { .. } => ErrorCode::E1004,
            SyntaxErrorKind::UnbalancedParen(_) => ErrorCode::E1005,
            SyntaxErrorKind::MissingOperand(_) => ErrorCode::E1006,
            SyntaxErrorKind::DanglingOperand => ErrorCode::E1007,
            SyntaxErrorKind::UnmatchedClose => ErrorCode::E1008,
        }
    }

    fn label_text(&self) -> String {
        match &self.kind {
            SyntaxErrorKind::Expected { expected, .. } => format!("expected `{expected}` here"),
            SyntaxErrorKind::Unterminated { .. } => "statement does not end".to_string(),
            SyntaxErrorKind::EmptyExpression => "expression expected here".to_string(),
            SyntaxErrorKind::MissingAssignTarget => "nothing to assign to".to_string(),
            SyntaxErrorKind::UnexpectedToken { .. } => "not allowed here".to_string(),
            SyntaxErrorKind::UnbalancedParen(_) => "no matching parenthesis".to_string(),
            SyntaxErrorKind::MissingOperand(_) => "operand missing".to_string(),
            SyntaxErrorKind::DanglingOperand => "extra operand".to_string(),
            SyntaxErrorKind::UnmatchedClose => "unmatched `}`".to_string(),
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, self.label_text());

        if let Some(opened) = self.opened_at {
            diag = diag.with_secondary_label(opened, "block opened here");
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        match self.kind {
            SyntaxErrorKind::Expected {
                expected: Op::Else, ..
            } => diag.with_note("every `if` needs an `else` block; write `else { }` if it is empty"),
            SyntaxErrorKind::Expected {
                expected: Op::LBrace,
                ..
            } => diag.with_note("statement bodies are always wrapped in `{ }`"),
            _ => diag,
        }
    }
}
