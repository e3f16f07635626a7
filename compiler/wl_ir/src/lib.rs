//! Shared data types for the While interpreter.
//!
//! Everything downstream of the lexer speaks in these types:
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] / [`StringInterner`]: interned variable names
//! - [`Token`] / [`TokenKind`] / [`TokenList`]: the flat token stream
//! - [`TokenRange`]: half-open index interval into a [`TokenList`]
//! - [`StmtArena`] / [`StmtId`]: the control-flow tree, stored flat
//!
//! Tree nodes never copy tokens. An assignment's right-hand side or a loop
//! predicate is a [`TokenRange`] that the evaluator walks directly.

mod interner;
mod name;
mod span;
mod stmt;
mod token;

pub use interner::StringInterner;
pub use name::Name;
pub use span::{Span, SpanError};
pub use stmt::{Chain, ChainIter, Stmt, StmtArena, StmtId, StmtKind};
pub use token::{Op, Token, TokenKind, TokenList, TokenRange};

#[cfg(test)]
mod tests;
