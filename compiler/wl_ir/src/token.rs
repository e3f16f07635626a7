//! Token types for the While lexer.
//!
//! The guest vocabulary is closed: every keyword and symbol is an [`Op`]
//! variant, and [`Op::text`] is its exact surface spelling. Keeping the
//! spelling table here (rather than in the lexer) lets diagnostics and the
//! `lex` debug command print tokens without depending on the lexer.

use super::{Name, Span};
use std::fmt;
use std::ops::Index;

/// Keyword or symbol in the guest language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    /// `:=`
    Assign,
    /// `and`
    And,
    /// `or`
    Or,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `while`
    While,
    /// `do`
    Do,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl Op {
    /// Every operator, in declaration order.
    pub const ALL: [Op; 18] = [
        Op::Assign,
        Op::And,
        Op::Or,
        Op::If,
        Op::Then,
        Op::Else,
        Op::While,
        Op::Do,
        Op::LBrace,
        Op::RBrace,
        Op::LParen,
        Op::RParen,
        Op::Plus,
        Op::Minus,
        Op::Star,
        Op::Slash,
        Op::Lt,
        Op::Gt,
    ];

    /// Exact source spelling.
    pub const fn text(self) -> &'static str {
        match self {
            Op::Assign => ":=",
            Op::And => "and",
            Op::Or => "or",
            Op::If => "if",
            Op::Then => "then",
            Op::Else => "else",
            Op::While => "while",
            Op::Do => "do",
            Op::LBrace => "{",
            Op::RBrace => "}",
            Op::LParen => "(",
            Op::RParen => ")",
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Lt => "<",
            Op::Gt => ">",
        }
    }

    /// Reverse of [`Op::text`].
    pub fn from_text(text: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.text() == text)
    }

    /// Binding strength inside an expression (higher binds tighter).
    ///
    /// `(` is the sentinel: lower than everything, so it is never popped by
    /// a precedence comparison. Statement-level keywords have no precedence.
    pub const fn precedence(self) -> Option<i8> {
        match self {
            Op::LParen => Some(-1),
            Op::And => Some(0),
            Op::Or => Some(1),
            Op::Lt | Op::Gt => Some(2),
            Op::Plus | Op::Minus => Some(3),
            Op::Star | Op::Slash => Some(4),
            _ => None,
        }
    }

    /// Check if this operator takes two operands in an expression.
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Op::And | Op::Or | Op::Lt | Op::Gt | Op::Plus | Op::Minus | Op::Star | Op::Slash
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Token kinds for the While language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Keyword or symbol.
    Operator(Op),
    /// Identifier beginning with a letter.
    Variable(Name),
    /// Integer literal.
    Number(i64),
    /// `true` / `false`.
    Bool(bool),
    /// Synthetic statement terminator; never spelled in source.
    End,
}

impl TokenKind {
    /// Check if this is the given operator.
    #[inline]
    pub fn is_op(self, op: Op) -> bool {
        self == TokenKind::Operator(op)
    }

    /// Short description for diagnostics: `` `while` ``, `variable`, ...
    pub fn describe(self) -> String {
        match self {
            TokenKind::Operator(op) => format!("`{op}`"),
            TokenKind::Variable(_) => "variable".to_string(),
            TokenKind::Number(n) => format!("number `{n}`"),
            TokenKind::Bool(b) => format!("`{b}`"),
            TokenKind::End => "end of statement".to_string(),
        }
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Half-open index interval `[start, end)` into a [`TokenList`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    /// Create a range from token indices.
    ///
    /// Indices are bounded by `TokenList::len`, which the lexer keeps below
    /// `u32::MAX` (every token spans at least one source byte, and spans are
    /// `u32`).
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        TokenRange {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

/// The complete token stream for one source text.
///
/// Random access by index is the only way the parser and evaluator read it,
/// so it is materialised up front rather than produced lazily.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Append a statement terminator at `span`, unless the stream is empty
    /// or already ends in one.
    pub fn push_end(&mut self, span: Span) {
        match self.tokens.last() {
            None
            | Some(Token {
                kind: TokenKind::End,
                ..
            }) => {}
            Some(_) => self.tokens.push(Token::new(TokenKind::End, span)),
        }
    }

    /// Get token at index, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind of token at index, if in bounds.
    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens inside `range`, clamped to the stream.
    pub fn slice(&self, range: TokenRange) -> &[Token] {
        let end = (range.end as usize).min(self.tokens.len());
        let start = (range.start as usize).min(end);
        &self.tokens[start..end]
    }

    /// Source span covering `range`, or a point span after the previous
    /// token when the range is empty.
    pub fn span_of(&self, range: TokenRange) -> Span {
        match self.slice(range) {
            [] => {
                let before = (range.start as usize).checked_sub(1);
                let anchor = before.and_then(|i| self.tokens.get(i)).map_or(0, |t| t.span.end);
                Span::point(anchor)
            }
            [first, .., last] => first.span.merge(last.span),
            [only] => only.span,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
