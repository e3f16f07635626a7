//! Indented text rendering of a control-flow tree, for the `parse` command.

use std::fmt::Write;

use wl_ir::{Chain, StmtKind, StringInterner, Token, TokenKind, TokenList};
use wl_stack::ensure_sufficient_stack;

use crate::ParseOutput;

/// Render tokens back to source-like text, `End` as `;`.
pub fn render_tokens(tokens: &[Token], interner: &StringInterner) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match token.kind {
            TokenKind::Operator(op) => out.push_str(op.text()),
            TokenKind::Variable(name) => out.push_str(&interner.lookup(name)),
            TokenKind::Number(n) => {
                let _ = write!(out, "{n}");
            }
            TokenKind::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            TokenKind::End => out.push(';'),
        }
    }
    out
}

/// Render the tree, one statement per line, blocks indented two spaces.
///
/// ```text
/// start
/// x := 0
/// while x < 3 do
///   x := x + 1
/// ```
pub fn dump(output: &ParseOutput, tokens: &TokenList, interner: &StringInterner) -> String {
    let mut out = String::from("start\n");
    let printer = Printer {
        output,
        tokens,
        interner,
    };
    printer.chain(&mut out, output.body(), 0);
    out
}

struct Printer<'a> {
    output: &'a ParseOutput,
    tokens: &'a TokenList,
    interner: &'a StringInterner,
}

impl Printer<'_> {
    fn chain(&self, out: &mut String, head: Chain, depth: usize) {
        let indent = "  ".repeat(depth);
        for id in self.output.arena.chain(head) {
            match self.output.arena.get(id).kind {
                StmtKind::Start => {
                    let _ = writeln!(out, "{indent}start");
                }
                StmtKind::Assign { target, rvalue } => {
                    let rhs = render_tokens(self.tokens.slice(rvalue), self.interner);
                    let _ = writeln!(out, "{indent}{} := {rhs}", self.interner.lookup(target));
                }
                StmtKind::If {
                    predicate,
                    consequence,
                    alternative,
                } => {
                    let pred = render_tokens(self.tokens.slice(predicate), self.interner);
                    let _ = writeln!(out, "{indent}if {pred} then");
                    ensure_sufficient_stack(|| self.chain(out, consequence, depth + 1));
                    let _ = writeln!(out, "{indent}else");
                    ensure_sufficient_stack(|| self.chain(out, alternative, depth + 1));
                }
                StmtKind::While { predicate, body } => {
                    let pred = render_tokens(self.tokens.slice(predicate), self.interner);
                    let _ = writeln!(out, "{indent}while {pred} do");
                    ensure_sufficient_stack(|| self.chain(out, body, depth + 1));
                }
            }
        }
    }
}
