//! The `run` and `eval` commands: execute a program and print its variables.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::{run_with, RunOptions};

use super::{read_file, report};

/// `name = value`, one per line, in name order.
pub fn format_environment(environment: &BTreeMap<String, i64>) -> String {
    let mut out = String::new();
    for (name, value) in environment {
        let _ = writeln!(out, "{name} = {value}");
    }
    out
}

/// Run a source file and print its final environment.
pub fn run_file(path: &str, options: RunOptions) {
    let content = read_file(path);
    execute(&content, path, options);
}

/// Run inline source text and print its final environment.
pub fn eval_source(source: &str, options: RunOptions) {
    execute(source, "<eval>", options);
}

/// Print whatever state was reached even when the run fails, then report
/// the error and exit with status 1.
fn execute(source: &str, path: &str, options: RunOptions) {
    let output = run_with(source, options);
    print!("{}", format_environment(&output.environment));

    if !output.is_ok() {
        report(&output.diagnostics, source, path);
        std::process::exit(1);
    }
}
