//! Stack growth for recursion that follows guest block nesting.
//!
//! The structural parser recurses once per `{`, and the executor recurses
//! once per nested `if`/`while` body. Guest programs choose that depth, so
//! both wrap their recursive step in [`ensure_sufficient_stack`], which
//! grows the native stack on demand instead of overflowing.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each additional stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
