//! The [Engine] bundles a factorial strategy with the permutation decoder, and provides
//! helpers for permuting index sequences.
//!
//! An engine is not synchronised. To share one between threads, wrap it in a `Mutex`; every
//! operation may extend the factorial cache and must therefore run under the lock.

use std::borrow::Cow;

use num_bigint::BigInt;

use crate::factorial::{Factorial, Strategy};
use crate::permute::{nth_permutation, InvalidArgument};

pub type DynFactorial = Box<dyn Factorial + Send>;

#[derive(Debug, Clone)]
pub struct Engine<F: Factorial = DynFactorial> {
    factorial: F,
}

impl Engine {
    /// Creates an engine that either caches factorials or recomputes them on every call.
    pub fn new(caching_enabled: bool) -> Self {
        Self::from(Strategy::from(caching_enabled))
    }

    /// Creates an engine backed by a factorial cache. Able to permute sequences tens of
    /// thousands of elements long, at the cost of holding one big integer per size requested.
    pub fn caching() -> Self {
        Self::from(Strategy::Memoizing)
    }

    /// Creates an engine that retains no factorials between calls. Not recommended for long
    /// sequences.
    pub fn direct() -> Self {
        Self::from(Strategy::Direct)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::caching()
    }
}

impl From<Strategy> for Engine {
    fn from(strategy: Strategy) -> Self {
        Self::with_factorial(strategy.instantiate())
    }
}

impl<F: Factorial> Engine<F> {
    pub fn with_factorial(factorial: F) -> Self {
        Self { factorial }
    }

    pub fn factorial_strategy(&self) -> &F {
        &self.factorial
    }

    pub fn into_factorial(self) -> F {
        self.factorial
    }

    /// See [nth_permutation].
    pub fn nth_permutation<T: Clone>(
        &mut self,
        sequence: &[T],
        rank: &BigInt,
    ) -> Result<Vec<T>, InvalidArgument> {
        nth_permutation(&mut self.factorial, sequence, rank)
    }

    /// Permutes the indexes `0..size` into the ordering identified by `rank`, in the range
    /// `[1, size!]`.
    pub fn permutation_indexes_for_size(
        &mut self,
        size: usize,
        rank: &BigInt,
    ) -> Result<Vec<usize>, InvalidArgument> {
        let indexes = (0..size).collect::<Vec<_>>();
        self.nth_permutation(&indexes, rank)
    }

    /// As per [Self::permutation_indexes_for_size], with the rank capped by the 64-bit range.
    pub fn permutation_indexes_for_size_i64(
        &mut self,
        size: usize,
        rank: i64,
    ) -> Result<Vec<usize>, InvalidArgument> {
        self.permutation_indexes_for_size(size, &BigInt::from(rank))
    }

    /// The largest valid rank for a sequence of `size` elements, i.e., `size!`.
    ///
    /// # Panics
    /// If `size` exceeds `i64::MAX`.
    pub fn largest_rank_for_size(&mut self, size: usize) -> BigInt {
        match i64::try_from(size) {
            Ok(size) => self.factorial.get(size).into_owned(),
            Err(_) => panic!("size ({size}) exceeds the addressable range"),
        }
    }

    /// The largest valid rank for permuting `sequence`.
    pub fn largest_rank<T>(&mut self, sequence: &[T]) -> BigInt {
        self.largest_rank_for_size(sequence.len())
    }

    /// Obtains `n!` from the configured strategy, or zero if `n` is negative.
    pub fn factorial(&mut self, n: i64) -> Cow<'_, BigInt> {
        self.factorial.get(n)
    }
}
