//! # vecseq: Lazy Vector Combinators for Rust
//!
//! Element-wise arithmetic, interpolation and distance reductions over
//! numeric iterators of any length.
//!
//! ## What is a vector here?
//!
//! Any `IntoIterator` of floats. A 2D point, a 3D point, a 1000-dimensional
//! embedding and an infinite procedural stream all go through the same
//! combinators. Combinators are lazy: they return iterators, compute nothing
//! until pulled, and never materialize intermediate results.
//!
//! The price is single-pass consumption. A drained chain is gone; build a new
//! chain (or clone one before draining) for a second pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecseq::prelude::*;
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [4.0, 6.0, 3.0];
//!
//! // Element-wise with another sequence...
//! let diff: Vec<f64> = vector::sub(a, Operand::sequence(b)).collect();
//! assert_eq!(diff, vec![-3.0, -4.0, 0.0]);
//!
//! // ...or with a broadcast scalar.
//! let shifted: Vec<f64> = vector::add(a, Operand::scalar(10.0)).collect();
//! assert_eq!(shifted, vec![11.0, 12.0, 13.0]);
//!
//! // Reductions drain a chain into a scalar.
//! assert_eq!(distance(a, b), 5.0);
//! assert_eq!(manhattan_distance(a, b), 7.0);
//! assert_eq!(max_norm_distance(a, b)?, 4.0);
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Broadcasting
//!
//! The non-primary operands of binary and ternary combinators are
//! [`Operand`](prelude::Operand)s:
//!
//! | Variant            | Behavior                                          |
//! |--------------------|---------------------------------------------------|
//! | `Operand::scalar`  | Repeated forever; never shortens the result       |
//! | `Operand::sequence`| Zipped element by element; the shortest one wins  |
//!
//! ```rust
//! use vecseq::prelude::*;
//!
//! // Per-element lerp: endpoints are sequences, `t` is broadcast.
//! let mid: Vec<f64> = vector::lerp(
//!     [0.0, 10.0, 20.0],
//!     Operand::sequence([10.0, 20.0]),
//!     Operand::scalar(0.5),
//! )
//! .collect();
//! assert_eq!(mid, vec![5.0, 15.0]);
//! ```
//!
//! ## Sequence Primitives
//!
//! ```rust
//! use vecseq::prelude::*;
//!
//! let doubled = map(range(1.0, 5.0, 1.0)?, |x, _| x * 2.0);
//! assert_eq!(sum(doubled), 30.0);
//!
//! let letters: String = char_range('a', 'e', 1)?.collect();
//! assert_eq!(letters, "abcde");
//!
//! // Mixed endpoint kinds are rejected up front.
//! assert!(matches!(
//!     range_of(0.into(), 'x'.into(), 1.0),
//!     Err(SeqError::TypeMismatch { .. })
//! ));
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Scalar Interpolation
//!
//! ```rust
//! use vecseq::prelude::*;
//!
//! assert_eq!(lerp(0.0, 10.0, 1.5), 10.0);
//! assert_eq!(lerp_unclamped(0.0, 10.0, 1.5), 15.0);
//! assert_eq!(inverse_lerp(10.0, 0.0, 2.5), 0.75);
//! assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
//! ```
//!
//! ## Errors
//!
//! All fallible operations return `Result<_, SeqError>`:
//!
//! - **`TypeMismatch`**: `range_of` with one character and one numeric endpoint.
//! - **`InvalidStep`**: a zero or non-finite range step.
//! - **`EmptySequence`**: `reduce`, `max_comp`, `min_comp` and
//!   `max_norm_distance` on empty input.
//! - **`EmptyRange`**: random integer helpers given an empty range.
//!
//! Arithmetic edge cases are not errors: division by zero and NaN propagate
//! as IEEE-754 values.
//!
//! ## Cargo features
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `std`    | yes     | `std::error::Error` for `SeqError`, system libm |
//! | `random` | yes     | Shuffle and random scalar helpers over an explicit `rand::Rng` |
//!
//! Without `std` the crate is `no_std` and uses `num-traits`' `libm` backend.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Modules
// ============================================================================

// Layer 1: Primitives - errors, lazy sequences, operands.
//
// Contains the `SeqError` type, the range/repeat/take/map/filter producers,
// the folds, and the scalar-or-sequence `Operand`.
pub mod primitives;

// Layer 2: Math - pure scalar functions.
//
// Contains clamp, lerp, inverse lerp and remap, plus RNG-threaded helpers.
pub mod math;

// Layer 3: Vector - element-wise combinators and reductions.
//
// Contains unary/binary/ternary combinators with broadcasting, component
// extremes, norms and distances.
pub mod vector;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// Brings the sequence primitives, scalar interpolation, reductions and
/// operand types into scope, along with the [`vector`](crate::vector) module
/// for the element-wise combinators (whose names overlap the scalar ones):
///
/// ```
/// use vecseq::prelude::*;
///
/// let clamped: Vec<f64> =
///     vector::clamp([-1.0, 0.5, 2.0], Operand::scalar(0.0), Operand::scalar(1.0)).collect();
/// assert_eq!(clamped, vec![0.0, 0.5, 1.0]);
/// assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
/// ```
pub mod prelude {
    pub use crate::math::interpolation::{
        clamp, inverse_lerp, inverse_lerp_unclamped, lerp, lerp_unclamped, remap,
        remap_unclamped,
    };
    #[cfg(feature = "random")]
    pub use crate::math::random::{
        random_char, random_float, random_int_exclusive, random_int_inclusive,
    };
    pub use crate::primitives::array::make;
    #[cfg(feature = "random")]
    pub use crate::primitives::array::shuffle_in_place;
    pub use crate::primitives::errors::SeqError;
    pub use crate::primitives::operand::{Broadcast, Operand};
    pub use crate::primitives::sequence::{
        CharRange, Endpoint, Range, RangeOf, Repeat, char_range, filter, fold, map, range,
        range_of, reduce, repeat, sum, take,
    };
    pub use crate::vector;
    pub use crate::vector::reduce::{
        distance, magnitude, manhattan_distance, max_comp, max_norm_distance, min_comp,
        square_distance, square_magnitude,
    };
}
