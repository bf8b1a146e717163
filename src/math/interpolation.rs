//! Scalar clamping, linear interpolation and remapping.
//!
//! ## Purpose
//!
//! This module provides the pure scalar functions the vector layer lifts into
//! element-wise combinators: clamp, lerp, inverse lerp and remap, each in a
//! clamped and an unclamped form.
//!
//! ## Design notes
//!
//! * **Stateless**: Every function is a pure expression over its arguments.
//! * **IEEE-754**: Division by zero is not trapped; infinities and NaN
//!   propagate to the caller.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Lerp**: `(1 - t)·a + t·b`.
//! * **Inverse lerp**: `(c - a) / (b - a)`, the `t` that lerp maps to `c`.
//! * **Remap**: inverse lerp on the source interval, then lerp on the target.
//!
//! ## Invariants
//!
//! * `lerp` keeps its result within `[min(a, b), max(a, b)]`.
//! * `inverse_lerp` keeps its result within `[0, 1]` for either orientation
//!   of `a` and `b`.
//!
//! ## Non-goals
//!
//! * `clamp` does not check that `lo <= hi`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Clamp
// ============================================================================

/// Clamp `val` to `[lo, hi]` as `min(hi, max(lo, val))`.
#[inline]
pub fn clamp<T: Float>(val: T, lo: T, hi: T) -> T {
    hi.min(lo.max(val))
}

// ============================================================================
// Lerp
// ============================================================================

/// Linear interpolation without limiting `t`; overshoots outside `[0, 1]`.
#[inline]
pub fn lerp_unclamped<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    lerp_unclamped(a, b, clamp(t, T::zero(), T::one()))
}

// ============================================================================
// Inverse Lerp
// ============================================================================

/// Position of `c` along `a → b`, unbounded.
#[inline]
pub fn inverse_lerp_unclamped<T: Float>(a: T, b: T, c: T) -> T {
    (c - a) / (b - a)
}

/// Position of `c` along `a → b`, with `c` first clamped between `a` and `b`.
///
/// Works for descending intervals (`a > b`).
#[inline]
pub fn inverse_lerp<T: Float>(a: T, b: T, c: T) -> T {
    let c = if a < b { clamp(c, a, b) } else { clamp(c, b, a) };
    (c - a) / (b - a)
}

// ============================================================================
// Remap
// ============================================================================

/// Map `val` from `[from_a, from_b]` onto `[to_a, to_b]` without clamping.
#[inline]
pub fn remap_unclamped<T: Float>(val: T, from_a: T, from_b: T, to_a: T, to_b: T) -> T {
    let t = inverse_lerp_unclamped(from_a, from_b, val);
    lerp_unclamped(to_a, to_b, t)
}

/// Map `val` from `[from_a, from_b]` onto `[to_a, to_b]`, clamped to the target.
#[inline]
pub fn remap<T: Float>(val: T, from_a: T, from_b: T, to_a: T, to_b: T) -> T {
    let t = inverse_lerp(from_a, from_b, val);
    lerp(to_a, to_b, t)
}
