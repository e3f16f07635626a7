//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use std::fmt::Write;

use wl_ir::{StringInterner, TokenList};
use wl_parse::{dump, render_tokens};

use super::{read_file, report};

/// One line per token: its text (`;` for a statement end) and byte span.
pub fn format_tokens(tokens: &TokenList, interner: &StringInterner) -> String {
    let mut out = String::new();
    for token in tokens {
        let text = render_tokens(std::slice::from_ref(token), interner);
        let _ = writeln!(out, "  {text:<12} @ {}", token.span);
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();

    match wl_lexer::lex(&content, &interner) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            print!("{}", format_tokens(&tokens, &interner));
        }
        Err(err) => {
            report(&[err.to_diagnostic()], &content, path);
            std::process::exit(1);
        }
    }
}

/// Parse a file and display its control-flow tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);

    match crate::compile(&content) {
        Ok(program) => {
            // The `Start` root is not a statement.
            let statements = program.tree().arena.len().saturating_sub(1);
            println!("Control-flow tree for '{path}' ({statements} statements):");
            print!(
                "{}",
                dump(program.tree(), program.tokens(), program.interner())
            );
        }
        Err(err) => {
            report(&[err.to_diagnostic()], &content, path);
            std::process::exit(1);
        }
    }
}
