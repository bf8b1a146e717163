//! Norms and distances over numeric sequences.
//!
//! ## Purpose
//!
//! This module drains vector combinator chains into scalars: the largest and
//! smallest component, the Euclidean norm, and the Euclidean, Manhattan and
//! max-norm distances between two vectors.
//!
//! ## Design notes
//!
//! * **Composed**: Distances are `sub` followed by a norm; they add no
//!   arithmetic of their own.
//! * **Single pass**: Each reduction drains its input exactly once.
//! * **Empty input**: Seedless reductions fail with
//!   [`SeqError::EmptySequence`]; sums of nothing are zero.
//!
//! ## Invariants
//!
//! * `manhattan_distance >= distance >= max_norm_distance` for real vectors.
//! * `distance(a, b) == distance(b, a)` and `distance(a, a) == 0`.
//!
//! ## Non-goals
//!
//! * Vectors of unequal length are not rejected; they are zip-truncated.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeqError;
use crate::primitives::operand::Operand;
use crate::primitives::sequence::{reduce, sum};
use crate::vector::ops::{abs, sub};

// ============================================================================
// Component Extremes
// ============================================================================

/// Largest component.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `seq` is empty.
pub fn max_comp<T: Float, S: IntoIterator<Item = T>>(seq: S) -> Result<T, SeqError> {
    reduce(seq, T::max)
}

/// Smallest component.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `seq` is empty.
pub fn min_comp<T: Float, S: IntoIterator<Item = T>>(seq: S) -> Result<T, SeqError> {
    reduce(seq, T::min)
}

// ============================================================================
// Magnitude
// ============================================================================

/// Sum of squared components, without the square root.
pub fn square_magnitude<T: Float, S: IntoIterator<Item = T>>(seq: S) -> T {
    let mut acc = T::zero();
    for x in seq {
        acc = acc + x * x;
    }
    acc
}

/// Euclidean norm.
pub fn magnitude<T: Float, S: IntoIterator<Item = T>>(seq: S) -> T {
    square_magnitude(seq).sqrt()
}

// ============================================================================
// Distances
// ============================================================================

/// Euclidean distance between `a` and `b`.
pub fn distance<T, A, B>(a: A, b: B) -> T
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    magnitude(sub(a, Operand::sequence(b)))
}

/// Squared Euclidean distance between `a` and `b`.
pub fn square_distance<T, A, B>(a: A, b: B) -> T
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    square_magnitude(sub(a, Operand::sequence(b)))
}

/// Manhattan (L1) distance: sum of absolute component differences.
pub fn manhattan_distance<T, A, B>(a: A, b: B) -> T
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    sum(abs(sub(a, Operand::sequence(b))))
}

/// Max-norm (L∞) distance: largest absolute component difference.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if either vector is empty.
pub fn max_norm_distance<T, A, B>(a: A, b: B) -> Result<T, SeqError>
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    max_comp(abs(sub(a, Operand::sequence(b))))
}
