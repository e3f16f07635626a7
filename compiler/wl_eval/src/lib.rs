//! Expression evaluator and executor for the While language.
//!
//! - [`evaluate`]: value of one expression range (shunting-yard, then a
//!   postfix reduction)
//! - [`Executor`]: walks the control-flow tree, applying assignments and
//!   branching on predicates
//! - [`Interpreter`]: owns a [`Program`] and its [`Environment`]; configured
//!   through [`InterpreterBuilder`]
//!
//! All values are `i64`. Booleans are `0`/`1`, and any nonzero value is true.

mod environment;
mod errors;
mod exec;
mod expr;
mod interpreter;
mod interrupt;
mod operators;

pub use environment::Environment;
pub use errors::{ArithmeticError, EvalError, EvalResult};
pub use exec::Executor;
pub use expr::{evaluate, to_postfix, Postfix};
pub use interpreter::{Interpreter, InterpreterBuilder, Program};
pub use interrupt::{Interrupt, NeverInterrupt};
pub use operators::apply_binary;

#[cfg(test)]
mod tests;
