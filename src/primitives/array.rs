//! Eager array helpers.
//!
//! These sit outside the lazy core: `make` materializes a vector from an index
//! function and `shuffle_in_place` permutes a slice with a caller-supplied RNG.
//! Nothing in the combinator layers calls them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "random")]
use rand::{Rng, seq::SliceRandom};

/// Build a vector of `len` elements where element `i` is `fill(i)`.
pub fn make<T, F>(len: usize, fill: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..len).map(fill).collect()
}

/// Shuffle `xs` in place and hand it back for chaining.
///
/// Every permutation is equally likely for a uniform `rng`; pass a seeded RNG
/// for reproducible orders.
#[cfg(feature = "random")]
pub fn shuffle_in_place<'a, T, R>(rng: &mut R, xs: &'a mut [T]) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    xs.shuffle(rng);
    xs
}
