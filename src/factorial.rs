//! Arbitrary-precision factorials.
//!
//! Two strategies are offered: [Calculator] recomputes `n!` on every call, while [Lookup]
//! memoizes every value from `0!` up to the largest `n` requested so far. Both return `0` for
//! negative `n`, which callers may rely upon as a sentinel.

use std::borrow::Cow;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::Serialize;
use strum_macros::{Display, EnumIter};
use tracing::trace;

pub trait Factorial {
    /// Obtains `n!`, or zero if `n` is negative.
    fn get(&mut self, n: i64) -> Cow<'_, BigInt>;
}

impl<F: Factorial + ?Sized> Factorial for Box<F> {
    #[inline]
    fn get(&mut self, n: i64) -> Cow<'_, BigInt> {
        (**self).get(n)
    }
}

impl<F: Factorial + ?Sized> Factorial for &mut F {
    #[inline]
    fn get(&mut self, n: i64) -> Cow<'_, BigInt> {
        (**self).get(n)
    }
}

/// Computes `n!` without retaining any state between calls.
pub fn factorial(n: i64) -> BigInt {
    if n < 0 {
        return BigInt::zero();
    }
    let mut product = BigInt::one();
    for i in 2..=n {
        product *= BigInt::from(i);
    }
    product
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&mut self, n: i64) -> Cow<'_, BigInt> {
        Cow::Owned(factorial(n))
    }
}

/// A lazily-extended table of factorials. Entries are never evicted or overwritten; a query
/// beyond the high-water mark extends the table with every intermediate value up to the
/// requested `n`.
///
/// The table is not synchronised. Share it between threads only behind a lock that spans
/// the entire check-then-extend sequence, e.g. `Mutex<Lookup>`.
#[derive(Debug, Clone)]
pub struct Lookup {
    entries: Vec<BigInt>,
}

impl Lookup {
    /// The largest `n` for which `n!` is currently held.
    pub fn high_water_mark(&self) -> usize {
        self.entries.len() - 1
    }

    /// Reads `n!` from the table without extending it.
    pub fn try_get(&self, n: usize) -> Option<&BigInt> {
        self.entries.get(n)
    }

    /// Extends the table so that it holds every factorial up to and including `n!`.
    pub fn ensure(&mut self, n: usize) {
        let len = self.entries.len();
        if n < len {
            return;
        }
        trace!("extending factorial table from {}! to {n}!", len - 1);
        self.entries.reserve(n + 1 - len);
        for i in len..=n {
            let next = &self.entries[i - 1] * BigInt::from(i);
            self.entries.push(next);
        }
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            entries: vec![BigInt::one(), BigInt::one()],
        }
    }
}

impl Factorial for Lookup {
    #[inline]
    fn get(&mut self, n: i64) -> Cow<'_, BigInt> {
        if n < 0 {
            return Cow::Owned(BigInt::zero());
        }
        let n = n as usize;
        self.ensure(n);
        Cow::Borrowed(&self.entries[n])
    }
}

/// The available factorial strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, Serialize)]
pub enum Strategy {
    /// Recompute on every call. Saves memory, but is markedly slower for long sequences.
    Direct,
    /// Cache every factorial computed so far.
    Memoizing,
}

impl Strategy {
    pub fn instantiate(self) -> Box<dyn Factorial + Send> {
        match self {
            Strategy::Direct => Box::new(Calculator),
            Strategy::Memoizing => Box::new(Lookup::default()),
        }
    }
}

impl From<bool> for Strategy {
    /// Maps a caching flag to its strategy.
    fn from(caching_enabled: bool) -> Self {
        if caching_enabled {
            Strategy::Memoizing
        } else {
            Strategy::Direct
        }
    }
}
