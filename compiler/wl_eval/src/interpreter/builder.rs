//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{Interpreter, Program};
use crate::{Environment, Interrupt, NeverInterrupt};

/// Builder for creating Interpreter instances with various configurations.
pub struct InterpreterBuilder {
    program: Program,
    env: Option<Environment>,
    max_steps: Option<u64>,
    interrupt: Option<Box<dyn Interrupt>>,
}

impl InterpreterBuilder {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            env: None,
            max_steps: None,
            interrupt: None,
        }
    }

    /// Set the initial environment.
    ///
    /// Names in it must come from the program's interner.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Cap the number of executed steps. `None` (the default) is unbounded.
    #[must_use]
    pub fn max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    /// Install a hook polled before every statement and loop iteration.
    #[must_use]
    pub fn interrupt(mut self, hook: impl Interrupt + 'static) -> Self {
        self.interrupt = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            program: self.program,
            env: self.env.unwrap_or_default(),
            interrupt: self
                .interrupt
                .unwrap_or_else(|| Box::new(NeverInterrupt)),
            max_steps: self.max_steps,
            steps: 0,
        }
    }
}
