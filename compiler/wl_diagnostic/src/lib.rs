//! Diagnostic system for error reporting.
//!
//! Every failure the interpreter can report (lexing, structural parsing,
//! evaluation, host interruption) is converted into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary label saying where
//! - optional notes saying why
//!
//! Rendering lives in [`emitter`]; long-form explanations of each code live
//! in [`ErrorDocs`].

mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
