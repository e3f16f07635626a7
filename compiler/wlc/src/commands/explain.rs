//! The `explain` command: display documentation for error codes.

use wl_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2001");
        std::process::exit(1);
    };

    match ErrorDocs::get(code) {
        Some(doc) => println!("{doc}"),
        None => {
            eprintln!("No documentation available for {code}");
            std::process::exit(1);
        }
    }
}
