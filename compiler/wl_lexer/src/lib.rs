//! Lexer for the While language.
//!
//! Two layers:
//! - a `logos` raw scanner that only knows where lexemes and statement
//!   terminators are (whitespace and line continuations are skipped)
//! - [`lex`], which classifies each lexeme and inserts the synthetic
//!   [`TokenKind::End`] markers the structural parser relies on
//!
//! # Terminator placement
//!
//! `;` and newline end a statement. On top of that:
//! - `then`, `do` and `else` are followed by an `End`, so a block-open `{`
//!   is always preceded by one
//! - `}` gets an `End` right before it (bounding the block's last
//!   statement) and right after it (bounding the enclosing `if`/`while`)
//!
//! Consecutive terminators collapse into a single `End`, and a non-empty
//! stream always ends with one.

mod lex_error;

use logos::Logos;
use wl_ir::{Op, Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"([ \t\r\f]+|\\[ \t]*\r?\n)")] // Whitespace and line continuations
enum RawToken {
    #[token(";")]
    Semicolon,

    #[token("\n")]
    Newline,

    /// Maximal run of non-whitespace, non-terminator characters.
    #[regex(r"[^ \t\r\f\n;\\]+")]
    Lexeme,
}

/// Characters that make a lexeme an operator.
const OPERATOR_LEADS: &[char] = &['+', '-', '*', '/', '<', '>', '(', ')', '{', '}'];

/// Tokenize `source`, interning variable names into `interner`.
///
/// Runs to the end of the input and returns the whole stream; stops at the
/// first lexeme that cannot be classified.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = Span::try_from_range(raw.span()).map_err(|_| {
            LexError::new(LexErrorKind::SourceTooLarge, "", Span::point(u32::MAX))
        })?;

        match result {
            Ok(RawToken::Semicolon | RawToken::Newline) => tokens.push_end(span),
            Ok(RawToken::Lexeme) => {
                let kind = classify(raw.slice(), span, interner)?;
                push_classified(&mut tokens, Token::new(kind, span));
            }
            Err(()) => {
                return Err(LexError::new(
                    LexErrorKind::InvalidCharacter,
                    raw.slice(),
                    span,
                ))
            }
        }
    }

    // The last statement is bounded even without a trailing terminator.
    tokens.push_end(Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX)));
    Ok(tokens)
}

/// Classify one lexeme, in priority order: operator, bool, variable, number.
fn classify(text: &str, span: Span, interner: &StringInterner) -> Result<TokenKind, LexError> {
    if let Some(op) = Op::from_text(text) {
        return Ok(TokenKind::Operator(op));
    }

    let Some(first) = text.chars().next() else {
        return Err(LexError::new(LexErrorKind::InvalidCharacter, text, span));
    };

    if OPERATOR_LEADS.contains(&first) {
        return Err(LexError::new(LexErrorKind::UnknownOperator, text, span));
    }

    match text {
        "true" => return Ok(TokenKind::Bool(true)),
        "false" => return Ok(TokenKind::Bool(false)),
        _ => {}
    }

    if first.is_ascii_alphabetic() {
        if text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Ok(TokenKind::Variable(interner.intern(text)));
        }
        return Err(LexError::new(LexErrorKind::InvalidIdentifier, text, span));
    }

    if first.is_ascii_digit() {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LexError::new(LexErrorKind::InvalidNumber, text, span));
        }
        return text
            .parse::<i64>()
            .map(TokenKind::Number)
            .map_err(|_| LexError::new(LexErrorKind::IntOverflow, text, span));
    }

    Err(LexError::new(LexErrorKind::InvalidCharacter, text, span))
}

/// Append a classified token, adding the implicit terminators around it.
fn push_classified(tokens: &mut TokenList, token: Token) {
    match token.kind {
        TokenKind::Operator(Op::RBrace) => {
            tokens.push_end(Span::point(token.span.start));
            tokens.push(token);
            tokens.push_end(Span::point(token.span.end));
        }
        TokenKind::Operator(Op::Then | Op::Do | Op::Else) => {
            tokens.push(token);
            tokens.push_end(Span::point(token.span.end));
        }
        _ => tokens.push(token),
    }
}
