//! # Fibonacci Command Library
//!
//! This library computes the n-th Fibonacci number, defined by `F(1) = F(2) = 1` and
//! `F(k) = F(k-1) + F(k-2)`, either in a fixed-width `u64` or in an arbitrary-precision
//! `BigUint`. It backs the `fib` and `fib-fixed` binaries, which take an optional index and
//! an optional repeat count so that the computation can be timed from outside.
//!
//! ## Key Features
//! - **Iterative Computation**: A single loop over two accumulators, O(n) additions.
//! - **Two Numeric Flavours**: `u64` wraps silently past `F(93)`; `BigUint` is exact for any
//!   index.
//! - **Lenient Input Handling**: Missing or malformed arguments fall back to their defaults
//!   instead of failing.
//!
//! ## Overview of Modules
//!
//! ### `term`
//! The `Term` trait, implemented for `u64` and `BigUint`, describes how two consecutive terms
//! are added in each representation.
//!
//! ### `fibonacci`
//! - `compute`, `compute_fixed`, `compute_big`: the n-th term in the chosen representation.
//! - `repeat_compute`: repeats the computation for benchmarking and keeps the last value.
//! - `checked_compute_fixed`: the `u64` computation reporting `FibonacciError::Overflow`
//!   rather than wrapping.
//! - `FibonacciGenerator`: an iterator over the sequence.
//!
//! ### `config`
//! `Config` resolves the positional index and repeat count, defaulting to 60 and 1.
//!
//! ### `driver`
//! Runs a `Config` and writes the result as one decimal line; also installs the `tracing`
//! subscriber used by the binaries.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_cli::fibonacci::{compute_big, compute_fixed};
//! use num_bigint::BigUint;
//! assert_eq!(compute_fixed(60), 1548008755920);
//! assert_eq!(compute_big(100), BigUint::parse_bytes(b"354224848179261915075", 10).unwrap());
//! ```

pub mod config;
pub mod driver;
pub mod fibonacci;
pub mod term;
