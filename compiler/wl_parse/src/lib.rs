//! Structural parser for the While language.
//!
//! Builds the control-flow tree from a flat [`TokenList`]. Only statement
//! structure is recognised here: assignments, `if`/`while` headers and their
//! blocks. Expressions stay in the token stream as [`TokenRange`]s and are
//! evaluated later.
//!
//! Every step is a forward scan for the next delimiter. The lexer bounds
//! each statement with an `End` token (including one before and after each
//! `}`), which is what lets a scan stop at the statement boundary.

mod dump;
mod error;

use wl_ir::{Chain, Name, Op, StmtArena, StmtId, StmtKind, TokenKind, TokenList, TokenRange};
use wl_stack::ensure_sufficient_stack;

pub use dump::{dump, render_tokens};
pub use error::{ErrorContext, SyntaxError, SyntaxErrorKind};

/// A parsed program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutput {
    pub arena: StmtArena,
    /// `Start` sentinel; its `next` is the first top-level statement.
    pub root: StmtId,
}

impl ParseOutput {
    /// Head of the top-level statement chain.
    pub fn body(&self) -> Chain {
        self.arena.get(self.root).next
    }
}

/// Parse a whole token stream into a control-flow tree.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<ParseOutput, SyntaxError> {
    let mut parser = Parser::new(tokens);
    let root = parser.arena.alloc(StmtKind::Start);
    let (body, _) = parser.build(0, tokens.len())?;
    if let Some(head) = body {
        parser.arena.set_next(root, head);
    }
    tracing::debug!(statements = parser.arena.len(), "built control-flow tree");
    Ok(ParseOutput {
        arena: parser.arena,
        root,
    })
}

/// Appends statements to a sibling chain.
#[derive(Default)]
struct ChainBuilder {
    head: Chain,
    tail: Chain,
}

impl ChainBuilder {
    fn push(&mut self, arena: &mut StmtArena, kind: StmtKind) {
        let id = arena.alloc(kind);
        match self.tail {
            Some(tail) => arena.set_next(tail, id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }
}

/// Structural parser over one token stream.
pub struct Parser<'a> {
    tokens: &'a TokenList,
    arena: StmtArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            tokens,
            arena: StmtArena::new(),
        }
    }

    /// Build the top-level chain for tokens in `[start, end)`.
    ///
    /// Returns the chain head and the index where parsing stopped. A `}`
    /// at this level is an error.
    pub fn build(&mut self, start: usize, end: usize) -> Result<(Chain, usize), SyntaxError> {
        self.build_chain(start, end, None)
    }

    /// Take the arena holding every statement built so far.
    pub fn into_arena(self) -> StmtArena {
        self.arena
    }

    /// Build one sibling chain.
    ///
    /// With `block` set (the index of the opening `{`), the chain ends at the
    /// matching `}` and the returned index is just past it; running out of
    /// tokens first is an error.
    fn build_chain(
        &mut self,
        start: usize,
        end: usize,
        block: Option<usize>,
    ) -> Result<(Chain, usize), SyntaxError> {
        let mut chain = ChainBuilder::default();
        let mut target: Option<Name> = None;
        let mut pos = start;

        while pos < end {
            let token = self.tokens[pos];
            match token.kind {
                TokenKind::Variable(name) => {
                    target = Some(name);
                    pos += 1;
                }
                TokenKind::Operator(Op::Assign) => {
                    let target = target.take().ok_or_else(|| {
                        SyntaxError::new(SyntaxErrorKind::MissingAssignTarget, pos, token.span)
                            .in_context(ErrorContext::Assignment)
                    })?;
                    let stop = self.find_end(pos + 1, end)?;
                    let rvalue = TokenRange::new(pos + 1, stop);
                    tracing::trace!(start = pos, end = stop, "assignment");
                    chain.push(&mut self.arena, StmtKind::Assign { target, rvalue });
                    pos = stop + 1;
                }
                TokenKind::Operator(Op::If) => {
                    target = None;
                    let (kind, next) = self.parse_if(pos, end)?;
                    chain.push(&mut self.arena, kind);
                    pos = next;
                }
                TokenKind::Operator(Op::While) => {
                    target = None;
                    let (kind, next) = self.parse_while(pos, end)?;
                    chain.push(&mut self.arena, kind);
                    pos = next;
                }
                TokenKind::Operator(Op::RBrace) => {
                    return match block {
                        Some(_) => Ok((chain.head, pos + 1)),
                        None => Err(SyntaxError::new(
                            SyntaxErrorKind::UnmatchedClose,
                            pos,
                            token.span,
                        )),
                    };
                }
                TokenKind::Operator(_) => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken {
                            found: token.kind.describe(),
                        },
                        pos,
                        token.span,
                    ));
                }
                TokenKind::Number(_) | TokenKind::Bool(_) | TokenKind::End => {
                    target = None;
                    pos += 1;
                }
            }
        }

        match block {
            None => Ok((chain.head, end)),
            Some(open) => Err(self
                .expected(Op::RBrace, end, end)
                .in_context(ErrorContext::Block)
                .with_opened_at(self.tokens[open].span)),
        }
    }

    /// `if <pred> then { ... } else { ... }`, starting at the `if`.
    fn parse_if(&mut self, pos: usize, end: usize) -> Result<(StmtKind, usize), SyntaxError> {
        let ctx = ErrorContext::IfStatement;
        let then = self.find_in_header(pos + 1, end, Op::Then, ctx)?;
        let open = self.expect_after_ends(then + 1, end, Op::LBrace, ctx)?;
        let (consequence, after) = self.nested_block(open, end)?;
        let else_at = self.expect_after_ends(after, end, Op::Else, ctx)?;
        let open = self.expect_after_ends(else_at + 1, end, Op::LBrace, ctx)?;
        let (alternative, after) = self.nested_block(open, end)?;

        let kind = StmtKind::If {
            predicate: TokenRange::new(pos + 1, then),
            consequence,
            alternative,
        };
        Ok((kind, after))
    }

    /// `while <pred> do { ... }`, starting at the `while`.
    fn parse_while(&mut self, pos: usize, end: usize) -> Result<(StmtKind, usize), SyntaxError> {
        let ctx = ErrorContext::WhileLoop;
        let do_at = self.find_in_header(pos + 1, end, Op::Do, ctx)?;
        let open = self.expect_after_ends(do_at + 1, end, Op::LBrace, ctx)?;
        let (body, after) = self.nested_block(open, end)?;

        let kind = StmtKind::While {
            predicate: TokenRange::new(pos + 1, do_at),
            body,
        };
        Ok((kind, after))
    }

    /// Recurse into the block opened at `open`.
    fn nested_block(&mut self, open: usize, end: usize) -> Result<(Chain, usize), SyntaxError> {
        ensure_sufficient_stack(|| self.build_chain(open + 1, end, Some(open)))
    }

    /// Index of the `End` closing the statement that starts at `from`.
    fn find_end(&self, from: usize, end: usize) -> Result<usize, SyntaxError> {
        (from..end)
            .find(|&i| self.tokens[i].kind == TokenKind::End)
            .ok_or_else(|| {
                SyntaxError::new(
                    SyntaxErrorKind::Unterminated {
                        found: self.found(end, end),
                    },
                    end,
                    self.span_at(end),
                )
                .in_context(ErrorContext::Assignment)
            })
    }

    /// Index of `op` within the header that starts at `from`.
    ///
    /// The header ends at the first `End` or `{`; reaching either first
    /// means `op` is missing.
    fn find_in_header(
        &self,
        from: usize,
        end: usize,
        op: Op,
        ctx: ErrorContext,
    ) -> Result<usize, SyntaxError> {
        for i in from..end {
            match self.tokens[i].kind {
                TokenKind::Operator(found) if found == op => return Ok(i),
                TokenKind::End | TokenKind::Operator(Op::LBrace) => {
                    return Err(self.expected(op, i, end).in_context(ctx));
                }
                _ => {}
            }
        }
        Err(self.expected(op, end, end).in_context(ctx))
    }

    /// Index of `op`, allowing only `End` tokens before it.
    fn expect_after_ends(
        &self,
        from: usize,
        end: usize,
        op: Op,
        ctx: ErrorContext,
    ) -> Result<usize, SyntaxError> {
        let at = (from..end)
            .find(|&i| self.tokens[i].kind != TokenKind::End)
            .unwrap_or(end);
        if at < end && self.tokens[at].kind.is_op(op) {
            Ok(at)
        } else {
            Err(self.expected(op, at, end).in_context(ctx))
        }
    }

    #[cold]
    fn expected(&self, expected: Op, at: usize, end: usize) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::Expected {
                expected,
                found: self.found(at, end),
            },
            at,
            self.span_at(at),
        )
    }

    fn found(&self, at: usize, end: usize) -> String {
        if at < end {
            self.tokens[at].kind.describe()
        } else {
            "end of input".to_string()
        }
    }

    /// Span of the token at `at`, or the point after the last token.
    fn span_at(&self, at: usize) -> wl_ir::Span {
        self.tokens
            .get(at)
            .map_or_else(|| self.tokens.span_of(TokenRange::new(at, at)), |t| t.span)
    }
}
