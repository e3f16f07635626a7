//! Interpreter: one program, one environment.
//!
//! Everything a run needs is owned here: the source text, the interner that
//! names its variables, the token stream and the tree that indexes into it,
//! and the environment the run mutates. Nothing is shared between
//! interpreters.

mod builder;

use std::collections::BTreeMap;

use wl_ir::{StringInterner, TokenList};
use wl_parse::ParseOutput;

use crate::exec::Executor;
use crate::{Environment, EvalResult, Interrupt};

pub use builder::InterpreterBuilder;

/// A tokenized and parsed program.
///
/// The tree's token ranges index into `tokens`, so the two travel together.
pub struct Program {
    source: String,
    interner: StringInterner,
    tokens: TokenList,
    tree: ParseOutput,
}

impl Program {
    pub fn new(
        source: impl Into<String>,
        interner: StringInterner,
        tokens: TokenList,
        tree: ParseOutput,
    ) -> Self {
        Program {
            source: source.into(),
            interner,
            tokens,
            tree,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn tree(&self) -> &ParseOutput {
        &self.tree
    }
}

/// Executes a [`Program`].
pub struct Interpreter {
    program: Program,
    env: Environment,
    interrupt: Box<dyn Interrupt>,
    max_steps: Option<u64>,
    steps: u64,
}

impl Interpreter {
    /// Interpreter with default settings: empty environment, no step limit,
    /// never interrupted.
    pub fn new(program: Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    pub fn builder(program: Program) -> InterpreterBuilder {
        InterpreterBuilder::new(program)
    }

    /// Execute the program from its root.
    ///
    /// On error the environment keeps every assignment made before the
    /// failing statement.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> EvalResult<()> {
        let tree = &self.program.tree;
        let mut executor = Executor::new(
            &tree.arena,
            &self.program.tokens,
            &mut self.env,
            &mut *self.interrupt,
        )
        .with_max_steps(self.max_steps);

        let result = executor.execute(Some(tree.root));
        self.steps = executor.steps();

        match &result {
            Ok(()) => tracing::debug!(
                steps = self.steps,
                variables = self.env.len(),
                "program finished"
            ),
            Err(err) => tracing::debug!(steps = self.steps, error = %err, "program stopped"),
        }
        result
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    /// Every variable by name, sorted.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.env.snapshot(&self.program.interner)
    }

    /// Steps taken by the last [`run`](Self::run).
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests;
