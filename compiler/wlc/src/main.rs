//! While interpreter CLI.

use wlc::commands::{
    eval_source, explain_error, lex_file, parse_file, parse_run_args, run_file, RunArgs,
};
use wlc::RunOptions;

fn main() {
    wlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let usage = "Usage: wl run <file.wl> [--max-steps=N]";
            let RunArgs { options, input } = run_args(&args[2..], usage);
            let Some(path) = input else {
                eprintln!("error: missing file path");
                eprintln!("{usage}");
                std::process::exit(1);
            };
            run_file(path, options);
        }
        "eval" => {
            let usage = "Usage: wl eval \"<source>\" [--max-steps=N]";
            let RunArgs { options, input } = run_args(&args[2..], usage);
            let Some(source) = input else {
                eprintln!("error: missing source text");
                eprintln!("{usage}");
                std::process::exit(1);
            };
            eval_source(source, options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: wl lex <file.wl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: wl parse <file.wl>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: wl explain <ERROR_CODE>");
                eprintln!("Example: wl explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("While interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wl"))
            {
                run_file(command, RunOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Parse `run`/`eval` arguments, exiting with usage on a bad one.
fn run_args<'a>(args: &'a [String], usage: &str) -> RunArgs<'a> {
    match parse_run_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{usage}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("While interpreter");
    println!();
    println!("Usage: wl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.wl>        Run a program and print its variables");
    println!("  eval \"<source>\"      Run inline source text");
    println!("  lex <file.wl>        Tokenize and display tokens");
    println!("  parse <file.wl>      Parse and display the control-flow tree");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-steps=<N>      Stop after N statements and loop iterations");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Trace interpreter phases to stderr (e.g., wl_eval=trace)");
    println!();
    println!("Examples:");
    println!("  wl run loop.wl");
    println!("  wl run loop.wl --max-steps=10000");
    println!("  wl eval \"x := 2 + 3 * 4\"");
    println!("  wl explain E1001");
}
