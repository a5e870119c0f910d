//! Decoding of a permutation rank into a concrete ordering using the factorial number system
//! (Lehmer code).
//!
//! Ranks are 1-based: rank `1` reproduces the input order and rank `N!` yields the reverse of
//! it. Elements are treated as opaque; duplicates are permitted and distinguished by position.

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};
use thiserror::Error;
use tracing::debug;

use crate::factorial::Factorial;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("rank ({rank}) must be >= 1")]
    RankTooSmall { rank: BigInt },

    #[error("for size ({size}) rank ({rank}) is out of bounds")]
    RankOutOfBounds { size: usize, rank: BigInt },

    #[error("size ({size}) exceeds the addressable range")]
    SizeTooLarge { size: usize },
}

/// Rearranges `sequence` into the permutation identified by `rank`, in the range `[1, N!]`
/// where `N` is the length of `sequence`.
///
/// The rank is validated before any work is done; the input is never modified.
pub fn nth_permutation<T: Clone>(
    factorial: &mut impl Factorial,
    sequence: &[T],
    rank: &BigInt,
) -> Result<Vec<T>, InvalidArgument> {
    let size = sequence.len();
    let signed_size = i64::try_from(size).map_err(|_| InvalidArgument::SizeTooLarge { size })?;

    if rank < &BigInt::one() {
        return Err(InvalidArgument::RankTooSmall { rank: rank.clone() });
    }
    if rank > &*factorial.get(signed_size) {
        return Err(InvalidArgument::RankOutOfBounds {
            size,
            rank: rank.clone(),
        });
    }

    let mut permuted = Vec::with_capacity(size);
    let mut remaining_items = sequence.to_vec();
    let mut residual = rank - BigInt::one();

    for i in 1..=signed_size {
        let divisor = factorial.get(signed_size - i);
        let (quotient, remainder) = (&residual / &*divisor, &residual % &*divisor);
        residual = remainder;

        let index = quotient
            .to_usize()
            .filter(|&index| index < remaining_items.len())
            .unwrap_or_else(|| {
                panic!(
                    "index {quotient} out of range for {} remaining items",
                    remaining_items.len()
                )
            });
        permuted.push(remaining_items.remove(index));
    }

    assert!(
        remaining_items.is_empty(),
        "{} items left over after decoding",
        remaining_items.len()
    );
    debug!("decoded rank {rank} over {size} items");
    Ok(permuted)
}
