//! Host-controlled cancellation.
//!
//! Guest `while` loops have no iteration bound, so an embedder that must
//! stay responsive installs an [`Interrupt`]. The executor polls it before
//! each statement and before each loop iteration.

/// Polled by the executor; returning `true` stops execution with
/// [`EvalError::Interrupted`](crate::EvalError::Interrupted).
pub trait Interrupt {
    fn should_stop(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Interrupt for F {
    #[inline]
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Never interrupts. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    #[inline]
    fn should_stop(&mut self) -> bool {
        false
    }
}
