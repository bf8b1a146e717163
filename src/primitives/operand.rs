//! Scalar-or-sequence operands and broadcasting.
//!
//! ## Purpose
//!
//! Binary and ternary vector combinators accept, for each non-primary
//! operand, either another sequence or a single scalar. This module models
//! that choice as an explicit two-variant type and turns it into a producer.
//!
//! ## Design notes
//!
//! * **Resolved once**: The variant is fixed when the operand is built; the
//!   combinator never inspects element types at runtime.
//! * **Broadcasting**: A scalar becomes an infinite [`repeat`] producer, so a
//!   zip against it is only ever shortened by the other operands.
//!
//! ## Invariants
//!
//! * A `Scalar` operand never ends a zip.
//! * A `Sequence` operand ends a zip as soon as it is exhausted.

// External dependencies
use core::iter::Empty;

// Internal dependencies
use crate::primitives::sequence::{Repeat, repeat};

// ============================================================================
// Operand
// ============================================================================

/// A combinator operand: a single broadcast value or a sequence to zip with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T, I> {
    /// Constant broadcast to every position.
    Scalar(T),

    /// Sequence zipped element by element.
    Sequence(I),
}

impl<T> Operand<T, Empty<T>> {
    /// Scalar operand with no sequence type to name.
    #[inline]
    pub fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<T, I: Iterator<Item = T>> Operand<T, I> {
    /// Sequence operand from anything iterable.
    #[inline]
    pub fn sequence<S: IntoIterator<IntoIter = I>>(seq: S) -> Self {
        Self::Sequence(seq.into_iter())
    }

    /// Whether this operand is broadcast.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl<T: Clone, I: Iterator<Item = T>> IntoIterator for Operand<T, I> {
    type Item = T;
    type IntoIter = Broadcast<T, I>;

    fn into_iter(self) -> Broadcast<T, I> {
        match self {
            Self::Scalar(value) => Broadcast::Constant(repeat(value)),
            Self::Sequence(iter) => Broadcast::Sequence(iter),
        }
    }
}

// ============================================================================
// Broadcast Producer
// ============================================================================

/// Producer behind an [`Operand`]: infinite constant or the wrapped sequence.
#[derive(Debug, Clone)]
pub enum Broadcast<T, I> {
    /// Broadcast scalar.
    Constant(Repeat<T>),

    /// Zipped sequence.
    Sequence(I),
}

impl<T: Clone, I: Iterator<Item = T>> Iterator for Broadcast<T, I> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self {
            Self::Constant(r) => r.next(),
            Self::Sequence(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Constant(r) => r.size_hint(),
            Self::Sequence(iter) => iter.size_hint(),
        }
    }
}
