//! Command handlers for the `wl` CLI.
//!
//! Each submodule implements one command. Shared utilities (`read_file`,
//! diagnostic reporting) live here in the module root.

use wl_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use wl_diagnostic::Diagnostic;

mod args;
mod debug;
mod explain;
mod run;

pub use args::{parse_run_args, ArgsError, RunArgs};
pub use debug::{format_tokens, lex_file, parse_file};
pub use explain::explain_error;
pub use run::{eval_source, format_environment, run_file};

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render diagnostics to stderr with source snippets.
pub(crate) fn report(diagnostics: &[Diagnostic], source: &str, path: &str) {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(diagnostics);
    emitter.flush();
}
