//! Tree-walking executor.
//!
//! Walks sibling chains depth-first, left to right. `if` and `while` bodies
//! recurse, so recursion depth follows block nesting and is stack-grown.

use wl_ir::{Chain, Span, StmtArena, StmtId, StmtKind, TokenList, TokenRange};
use wl_stack::ensure_sufficient_stack;

use crate::expr::evaluate;
use crate::{Environment, EvalError, EvalResult, Interrupt};

/// Executes statements against an environment.
pub struct Executor<'a> {
    arena: &'a StmtArena,
    tokens: &'a TokenList,
    env: &'a mut Environment,
    interrupt: &'a mut dyn Interrupt,
    max_steps: Option<u64>,
    steps: u64,
}

impl<'a> Executor<'a> {
    pub fn new(
        arena: &'a StmtArena,
        tokens: &'a TokenList,
        env: &'a mut Environment,
        interrupt: &'a mut dyn Interrupt,
    ) -> Self {
        Executor {
            arena,
            tokens,
            env,
            interrupt,
            max_steps: None,
            steps: 0,
        }
    }

    /// Stop with [`EvalError::StepLimitExceeded`] after `limit` steps.
    #[must_use]
    pub fn with_max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    /// Steps taken so far: one per statement plus one per loop iteration.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Run every statement of the chain starting at `head`.
    pub fn execute(&mut self, head: Chain) -> EvalResult<()> {
        let arena = self.arena;
        for id in arena.chain(head) {
            self.exec_stmt(id)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, id: StmtId) -> EvalResult<()> {
        let kind = self.arena.get(id).kind;
        match kind {
            StmtKind::Start => {}
            StmtKind::Assign { target, rvalue } => {
                self.tick(self.assign_span(rvalue))?;
                let value = evaluate(self.tokens, rvalue, self.env)?;
                tracing::trace!(name = target.raw(), value, "assign");
                self.env.set(target, value);
            }
            StmtKind::If {
                predicate,
                consequence,
                alternative,
            } => {
                self.tick(self.tokens.span_of(predicate))?;
                let taken = evaluate(self.tokens, predicate, self.env)? != 0;
                tracing::trace!(taken, "if");
                let branch = if taken { consequence } else { alternative };
                ensure_sufficient_stack(|| self.execute(branch))?;
            }
            StmtKind::While { predicate, body } => {
                let span = self.tokens.span_of(predicate);
                self.tick(span)?;
                while evaluate(self.tokens, predicate, self.env)? != 0 {
                    ensure_sufficient_stack(|| self.execute(body))?;
                    self.tick(span)?;
                }
            }
        }
        Ok(())
    }

    /// Count a step, then consult the budget and the interrupt hook.
    fn tick(&mut self, span: Span) -> EvalResult<()> {
        self.steps = self.steps.saturating_add(1);
        if let Some(limit) = self.max_steps {
            if self.steps > limit {
                return Err(EvalError::StepLimitExceeded { limit, span });
            }
        }
        if self.interrupt.should_stop() {
            return Err(EvalError::Interrupted { span });
        }
        Ok(())
    }

    /// Span of a whole assignment; the target and `:=` sit just before the
    /// right-hand side.
    fn assign_span(&self, rvalue: TokenRange) -> Span {
        let start = (rvalue.start as usize).saturating_sub(2);
        self.tokens.span_of(TokenRange::new(start, rvalue.end as usize))
    }
}
