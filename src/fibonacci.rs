use num_bigint::BigUint;
use num_traits::CheckedAdd;
use tracing::trace;

use crate::term::Term;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("Fibonacci({index}) does not fit in a 64-bit unsigned integer")]
    Overflow { index: u64 },
}

/// Computes the `n`-th Fibonacci number, with `F(1) = F(2) = 1`.
///
/// Two accumulators hold `F(k-2)` and `F(k-1)` and are advanced from `k = 3` up to and
/// including `n`. Addition follows the rules of `T`: `u64` wraps silently on overflow,
/// `BigUint` is exact. `n = 0` yields `F(0) = 0`.
///
/// # Example
/// ```
/// use fibonacci_cli::fibonacci::compute;
/// use num_bigint::BigUint;
/// assert_eq!(compute::<u64>(10), 55);
/// assert_eq!(compute::<BigUint>(10), BigUint::from(55u32));
/// ```
pub fn compute<T: Term>(n: u64) -> T {
    // F(0) = 0 and F(1) = F(2) = 1 need no iteration
    match n {
        0 => return T::zero(),
        1 | 2 => return T::one(),
        _ => {}
    }

    // a = F(k-2), b = F(k-1) for k = 3
    let mut a = T::one();
    let mut b = T::one();

    for _ in 3..=n {
        // Advance the pair; the old `a` is dropped here
        let next = T::add_terms(&a, &b);
        a = b;
        b = next;
    }

    // The loop ran up to and including n, so b holds F(n)
    b
}

/// Fixed-width flavour of [`compute`]. Wraps modulo 2^64 for `n >= 94`.
pub fn compute_fixed(n: u64) -> u64 {
    compute(n)
}

/// Arbitrary-precision flavour of [`compute`].
///
/// # Example
/// ```
/// use fibonacci_cli::fibonacci::compute_big;
/// assert_eq!(compute_big(100).to_string(), "354224848179261915075");
/// ```
pub fn compute_big(n: u64) -> BigUint {
    compute(n)
}

/// Runs [`compute`] `repeat` times in sequence and returns the last result.
///
/// The repetition only exists so callers can time the computation. A `repeat` of zero
/// still computes once.
pub fn repeat_compute<T: Term>(n: u64, repeat: u64) -> T {
    // First run always happens, later runs overwrite it
    let mut result = compute(n);
    for run in 1..repeat {
        trace!(run, n, "repeating computation");
        result = compute(n);
    }
    result
}

/// Like [`compute_fixed`], but reports overflow instead of wrapping.
///
/// # Errors
/// Returns [`FibonacciError::Overflow`] when `F(n)` exceeds `u64::MAX`, which first
/// happens at `n = 94`.
pub fn checked_compute_fixed(n: u64) -> Result<u64, FibonacciError> {
    if n < 3 {
        return Ok(compute(n));
    }

    let mut a = 1u64;
    let mut b = 1u64;

    for _ in 3..=n {
        // Stop at the first sum that no longer fits
        let next =
            CheckedAdd::checked_add(&a, &b).ok_or(FibonacciError::Overflow { index: n })?;
        a = b;
        b = next;
    }

    Ok(b)
}

/// Lazy iterator over `F(1), F(2), F(3), ...`.
///
/// The fixed-width generator never ends; its values wrap once they pass `u64::MAX`.
///
/// # Example
/// ```
/// use fibonacci_cli::fibonacci::FibonacciGenerator;
/// let first: Vec<u64> = FibonacciGenerator::new().take(7).collect();
/// assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13]);
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciGenerator<T> {
    a: T,
    b: T,
}

impl<T: Term> FibonacciGenerator<T> {
    pub fn new() -> Self {
        // F(-1) = 1 and F(0) = 0, so the first step yields F(1)
        Self {
            a: T::one(),
            b: T::zero(),
        }
    }
}

impl<T: Term> Default for FibonacciGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Term> Iterator for FibonacciGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let next = T::add_terms(&self.a, &self.b);
        self.a = std::mem::replace(&mut self.b, next);
        Some(self.b.clone())
    }
}
