//! Element-wise vector combinators.
//!
//! ## Purpose
//!
//! This module lifts scalar functions over numeric sequences. A "vector" is
//! any iterable of floats, so the same combinators serve 2D and 3D points,
//! N-D points, and infinite procedural streams.
//!
//! ## Design notes
//!
//! * **Lazy**: Every combinator returns an iterator; nothing is computed until
//!   the caller pulls, and nothing is materialized.
//! * **Broadcasting**: Non-primary operands are [`Operand`]s. A scalar is
//!   repeated forever, a sequence is zipped.
//! * **Independent operands**: Each operand of a multi-way zip is advanced by
//!   its own iterator.
//! * **Built on primitives**: Every combinator is the indexed [`map`] over a
//!   zip of its operands.
//!
//! ## Key concepts
//!
//! * **Unary**: `abs`, `sign`, `sin`, `cos`, `floor`, `round`, `ceil`.
//! * **Binary**: `add`, `sub`, `mul`, `div`, `rem`, `min`, `max`, `pow`.
//! * **Ternary**: `clamp`, `lerp`, `lerp_unclamped`, `inverse_lerp`,
//!   `inverse_lerp_unclamped`.
//! * **Remap**: `remap`, `remap_unclamped` over five operands.
//!
//! ## Invariants
//!
//! * The result ends with the first exhausted sequence operand.
//! * With only scalar non-primary operands the result has the primary's length.
//!
//! ## Non-goals
//!
//! * Length mismatches are not errors; zips truncate silently.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::interpolation;
use crate::primitives::operand::Operand;
use crate::primitives::sequence::map;

// ============================================================================
// Zipping Helpers
// ============================================================================

#[inline]
fn lift1<T, S, F>(seq: S, f: F) -> impl Iterator<Item = T>
where
    S: IntoIterator<Item = T>,
    F: Fn(T) -> T,
{
    map(seq, move |x, _| f(x))
}

#[inline]
fn lift2<T, S, I, F>(a: S, b: Operand<T, I>, f: F) -> impl Iterator<Item = T>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    I: Iterator<Item = T>,
    F: Fn(T, T) -> T,
{
    map(a.into_iter().zip(b), move |(x, y), _| f(x, y))
}

#[inline]
fn lift3<T, S, I, J, F>(a: S, b: Operand<T, I>, c: Operand<T, J>, f: F) -> impl Iterator<Item = T>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    F: Fn(T, T, T) -> T,
{
    map(a.into_iter().zip(b).zip(c), move |((x, y), z), _| f(x, y, z))
}

// ============================================================================
// Scalar Kernels
// ============================================================================

/// `-1` for negatives, `1` for positives, the input itself for `±0` and NaN.
#[inline]
fn sign_of<T: Float>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        x
    }
}

/// Nearest integer with ties going toward positive infinity.
#[inline]
fn round_half_up<T: Float>(x: T) -> T {
    let half = T::one() / (T::one() + T::one());
    let floor = x.floor();
    if x - floor >= half { floor + T::one() } else { floor }
}

// ============================================================================
// Unary Combinators
// ============================================================================

macro_rules! unary_op {
    ($(#[$meta:meta])* $name:ident => $f:expr) => {
        $(#[$meta])*
        pub fn $name<T, S>(seq: S) -> impl Iterator<Item = T>
        where
            T: Float,
            S: IntoIterator<Item = T>,
        {
            lift1(seq, $f)
        }
    };
}

unary_op!(
    /// Element-wise absolute value.
    abs => T::abs
);
unary_op!(
    /// Element-wise sign: `-1`, `1`, or the element itself for `±0` and NaN.
    sign => sign_of
);
unary_op!(
    /// Element-wise sine.
    sin => T::sin
);
unary_op!(
    /// Element-wise cosine.
    cos => T::cos
);
unary_op!(
    /// Element-wise floor.
    floor => T::floor
);
unary_op!(
    /// Element-wise rounding, ties toward positive infinity (`-2.5 → -2`).
    round => round_half_up
);
unary_op!(
    /// Element-wise ceiling.
    ceil => T::ceil
);

// ============================================================================
// Binary Combinators
// ============================================================================

macro_rules! binary_op {
    ($(#[$meta:meta])* $name:ident => $f:expr) => {
        $(#[$meta])*
        pub fn $name<T, S, I>(a: S, b: Operand<T, I>) -> impl Iterator<Item = T>
        where
            T: Float,
            S: IntoIterator<Item = T>,
            I: Iterator<Item = T>,
        {
            lift2(a, b, $f)
        }
    };
}

binary_op!(
    /// Element-wise `a + b`.
    add => |x, y| x + y
);
binary_op!(
    /// Element-wise `a - b`.
    sub => |x, y| x - y
);
binary_op!(
    /// Element-wise `a * b`.
    mul => |x, y| x * y
);
binary_op!(
    /// Element-wise `a / b`; division by zero yields infinity or NaN.
    div => |x, y| x / y
);
binary_op!(
    /// Element-wise truncated remainder `a % b`, sign following `a`.
    rem => |x, y| x % y
);
binary_op!(
    /// Element-wise minimum.
    min => T::min
);
binary_op!(
    /// Element-wise maximum.
    max => T::max
);
binary_op!(
    /// Element-wise `a^b`. A negative base with a fractional exponent yields NaN.
    pow => T::powf
);

// ============================================================================
// Ternary Combinators
// ============================================================================

macro_rules! ternary_op {
    ($(#[$meta:meta])* $name:ident($a:ident, $b:ident, $c:ident) => $f:path) => {
        $(#[$meta])*
        pub fn $name<T, S, I, J>($a: S, $b: Operand<T, I>, $c: Operand<T, J>) -> impl Iterator<Item = T>
        where
            T: Float,
            S: IntoIterator<Item = T>,
            I: Iterator<Item = T>,
            J: Iterator<Item = T>,
        {
            lift3($a, $b, $c, $f)
        }
    };
}

ternary_op!(
    /// Element-wise [`interpolation::clamp`] of `values` into `[lo, hi]`.
    clamp(values, lo, hi) => interpolation::clamp
);
ternary_op!(
    /// Element-wise [`interpolation::lerp`], `t` clamped to `[0, 1]`.
    lerp(a, b, t) => interpolation::lerp
);
ternary_op!(
    /// Element-wise [`interpolation::lerp_unclamped`].
    lerp_unclamped(a, b, t) => interpolation::lerp_unclamped
);
ternary_op!(
    /// Element-wise [`interpolation::inverse_lerp`].
    inverse_lerp(a, b, c) => interpolation::inverse_lerp
);
ternary_op!(
    /// Element-wise [`interpolation::inverse_lerp_unclamped`].
    inverse_lerp_unclamped(a, b, c) => interpolation::inverse_lerp_unclamped
);

// ============================================================================
// Remap
// ============================================================================

#[inline]
fn lift5<T, S, I, J, K, L, F>(
    values: S,
    from_a: Operand<T, I>,
    from_b: Operand<T, J>,
    to_a: Operand<T, K>,
    to_b: Operand<T, L>,
    f: F,
) -> impl Iterator<Item = T>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    K: Iterator<Item = T>,
    L: Iterator<Item = T>,
    F: Fn(T, T, T, T, T) -> T,
{
    let zipped = values
        .into_iter()
        .zip(from_a)
        .zip(from_b)
        .zip(to_a)
        .zip(to_b);
    map(zipped, move |((((v, fa), fb), ta), tb), _| f(v, fa, fb, ta, tb))
}

/// Element-wise [`interpolation::remap`] from `[from_a, from_b]` onto `[to_a, to_b]`.
pub fn remap<T, S, I, J, K, L>(
    values: S,
    from_a: Operand<T, I>,
    from_b: Operand<T, J>,
    to_a: Operand<T, K>,
    to_b: Operand<T, L>,
) -> impl Iterator<Item = T>
where
    T: Float,
    S: IntoIterator<Item = T>,
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    K: Iterator<Item = T>,
    L: Iterator<Item = T>,
{
    lift5(values, from_a, from_b, to_a, to_b, interpolation::remap)
}

/// Element-wise [`interpolation::remap_unclamped`].
pub fn remap_unclamped<T, S, I, J, K, L>(
    values: S,
    from_a: Operand<T, I>,
    from_b: Operand<T, J>,
    to_a: Operand<T, K>,
    to_b: Operand<T, L>,
) -> impl Iterator<Item = T>
where
    T: Float,
    S: IntoIterator<Item = T>,
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    K: Iterator<Item = T>,
    L: Iterator<Item = T>,
{
    lift5(values, from_a, from_b, to_a, to_b, interpolation::remap_unclamped)
}
