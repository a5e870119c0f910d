//! Direct, indexable access to the _N_th lexicographic permutation of a sequence, without
//! enumerating the permutations that precede it. Ranks are decoded through the factorial
//! number system (Lehmer code), using arbitrary-precision arithmetic throughout, so sequences
//! tens of thousands of elements long can be permuted.

pub mod engine;
pub mod factorial;
pub mod permute;

pub use engine::Engine;
pub use permute::{nth_permutation, InvalidArgument};

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
