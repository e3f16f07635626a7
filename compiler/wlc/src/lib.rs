//! While interpreter driver.
//!
//! ```text
//! source ──► wl_lexer::lex ──► TokenList
//!                                  │
//!                                  ▼
//!                      wl_parse::parse ──► ParseOutput (control-flow tree)
//!                                  │
//!                                  ▼
//!                      wl_eval::Interpreter ──► Environment
//! ```
//!
//! [`run`] collects failures as diagnostics; [`try_run`] returns them as a
//! typed [`Error`].

pub mod commands;

use std::collections::BTreeMap;
use std::sync::Once;

use thiserror::Error;
use wl_diagnostic::Diagnostic;
use wl_eval::{EvalError, Interpreter, Program};
use wl_ir::StringInterner;
use wl_lexer::LexError;
use wl_parse::SyntaxError;

/// Any failure from source text to final environment.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.to_diagnostic(),
            Error::Syntax(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }
}

/// Run configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many statements and loop iterations.
    pub max_steps: Option<u64>,
}

/// Final state of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutput {
    /// Every variable, sorted by name. After a runtime error this is the
    /// state reached before the failing statement.
    pub environment: BTreeMap<String, i64>,
    /// Empty on success; exactly one error otherwise.
    pub diagnostics: Vec<Diagnostic>,
}

impl RunOutput {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tokenize and parse `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<Program, Error> {
    let interner = StringInterner::new();
    let tokens = wl_lexer::lex(source, &interner)?;
    tracing::debug!(tokens = tokens.len(), "lexed");
    let tree = wl_parse::parse(&tokens)?;
    Ok(Program::new(source, interner, tokens, tree))
}

/// Run `source` with default options, reporting failure as a diagnostic.
pub fn run(source: &str) -> RunOutput {
    run_with(source, RunOptions::default())
}

/// Run `source`, reporting failure as a diagnostic.
pub fn run_with(source: &str, options: RunOptions) -> RunOutput {
    let program = match compile(source) {
        Ok(program) => program,
        Err(err) => {
            return RunOutput {
                environment: BTreeMap::new(),
                diagnostics: vec![err.to_diagnostic()],
            }
        }
    };

    let mut interp = Interpreter::builder(program)
        .max_steps(options.max_steps)
        .build();
    let diagnostics = match interp.run() {
        Ok(()) => Vec::new(),
        Err(err) => vec![err.to_diagnostic()],
    };
    RunOutput {
        environment: interp.snapshot(),
        diagnostics,
    }
}

/// Run `source` with default options, returning the final environment.
pub fn try_run(source: &str) -> Result<BTreeMap<String, i64>, Error> {
    let mut interp = Interpreter::new(compile(source)?);
    interp.run()?;
    Ok(interp.snapshot())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Set `RUST_LOG=wl_eval=trace` (or `debug`, `info`, ...) to see the
/// interpreter's spans and events as an indented tree on stderr. Does
/// nothing when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        }
    });
}
