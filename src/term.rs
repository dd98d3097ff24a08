use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt::Display;

/// Numeric representation a Fibonacci term is computed in.
///
/// `u64` wraps modulo 2^64 on overflow, `BigUint` is exact for every index.
pub trait Term: Clone + Display + One + Zero {
    /// Sum of two consecutive terms, following the type's own overflow rules.
    fn add_terms(a: &Self, b: &Self) -> Self;
}

impl Term for u64 {
    fn add_terms(a: &Self, b: &Self) -> Self {
        a.wrapping_add(*b)
    }
}

impl Term for BigUint {
    fn add_terms(a: &Self, b: &Self) -> Self {
        a + b
    }
}
