//! Lazy sequence producers and consumers.
//!
//! ## Purpose
//!
//! This module provides the generic sequence primitives the vector layer is
//! built on: bounded ranges over numbers and characters, an infinite constant
//! producer for broadcasting, and the indexed `map`/`filter` adapters, plus the
//! strict reductions that drain a sequence.
//!
//! ## Design notes
//!
//! * **Pull-based**: Every producer is a cold `Iterator`; nothing is computed
//!   until `next` is called.
//! * **Single pass**: Adapters own their source. A partially drained adapter
//!   resumes where it stopped; clone it before draining to get a second pass.
//! * **Generics**: Ranges are generic over `Float`; the adapters and folds are
//!   generic over any item type.
//!
//! ## Key concepts
//!
//! * **Inclusive ranges**: Both endpoints are yielded when the step reaches them.
//! * **Direction**: Ascending when `from < to_inclusive`, descending otherwise.
//! * **Indexed adapters**: `map` and `filter` pass the 0-based traversal index
//!   alongside each value.
//!
//! ## Invariants
//!
//! * The step of a range is always used as `|step|`.
//! * The k-th element of a numeric range is `from ± k·|step|`, without
//!   accumulated drift.
//! * Reductions drain their input fully and never rewind it.
//!
//! ## Non-goals
//!
//! * This module does not materialize sequences; callers collect explicitly.

// External dependencies
use core::ops::Add;
use num_traits::{Float, Zero};

// Internal dependencies
use crate::primitives::errors::SeqError;

// ============================================================================
// Numeric Range
// ============================================================================

/// Inclusive numeric range produced by [`range`].
#[derive(Debug, Clone)]
pub struct Range<T> {
    from: T,
    to_inclusive: T,
    step: T,
    ascending: bool,
    index: u64,
    len: u64,
}

/// Build an inclusive range from `from` to `to_inclusive`, going up or down.
///
/// The element count is fixed here, so the range stays finite even when the
/// float type cannot represent every index (e.g. `f32` beyond 2^24).
///
/// # Errors
///
/// Returns [`SeqError::InvalidStep`] if `step` is zero or not finite.
pub fn range<T: Float>(from: T, to_inclusive: T, step: T) -> Result<Range<T>, SeqError> {
    if step == T::zero() || !step.is_finite() {
        return Err(SeqError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
    }

    let ascending = from < to_inclusive;
    let step = if ascending { step.abs() } else { -step.abs() };

    let mut range = Range {
        from,
        to_inclusive,
        step,
        ascending,
        index: 0,
        len: 0,
    };

    let steps = ((to_inclusive - from) / step).floor();
    range.len = match steps.to_u64() {
        Some(n) => n.saturating_add(1),
        None if steps > T::zero() => u64::MAX,
        None => 0,
    };

    // The estimate can be off by rounding; settle it against the bound check.
    while range.len > 0 && !range.in_bounds(range.element(range.len - 1)) {
        range.len -= 1;
    }
    while range.len > 0 && range.len < u64::MAX {
        let next = range.element(range.len);
        if !range.in_bounds(next) || next == range.element(range.len - 1) {
            break;
        }
        range.len += 1;
    }

    Ok(range)
}

impl<T: Float> Range<T> {
    #[inline]
    fn element(&self, k: u64) -> T {
        self.from + self.step * T::from(k).unwrap_or_else(T::infinity)
    }

    #[inline]
    fn in_bounds(&self, value: T) -> bool {
        if self.ascending {
            value <= self.to_inclusive
        } else {
            value >= self.to_inclusive
        }
    }
}

impl<T: Float> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.len {
            return None;
        }

        let value = self.element(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.len - self.index)
    }
}

/// Exact size hint for a remaining count that may not fit in `usize`.
fn exact_hint(remaining: u64) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

// ============================================================================
// Character Range
// ============================================================================

/// Inclusive character range produced by [`char_range`].
///
/// Code points in the surrogate block are not characters and are skipped.
#[derive(Debug, Clone)]
pub struct CharRange {
    cursor: i64,
    to_inclusive: i64,
    step: i64,
}

/// Build an inclusive range of characters using code-point arithmetic.
///
/// # Errors
///
/// Returns [`SeqError::InvalidStep`] if `step` is zero.
pub fn char_range(from: char, to_inclusive: char, step: u32) -> Result<CharRange, SeqError> {
    if step == 0 {
        return Err(SeqError::InvalidStep(0.0));
    }

    let step = i64::from(step);
    Ok(CharRange {
        cursor: i64::from(u32::from(from)),
        to_inclusive: i64::from(u32::from(to_inclusive)),
        step: if from < to_inclusive { step } else { -step },
    })
}

impl Iterator for CharRange {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let past_end = if self.step > 0 {
                self.cursor > self.to_inclusive
            } else {
                self.cursor < self.to_inclusive
            };
            if past_end {
                return None;
            }

            let code = self.cursor;
            self.cursor += self.step;

            if let Some(c) = u32::try_from(code).ok().and_then(char::from_u32) {
                return Some(c);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = if self.step > 0 {
            (self.cursor, self.to_inclusive)
        } else {
            (self.to_inclusive, self.cursor)
        };
        let positions = count_hits(self.cursor, self.step, lo, hi);
        let surrogates = count_hits(
            self.cursor,
            self.step,
            lo.max(SURROGATE_FIRST),
            hi.min(SURROGATE_LAST),
        );
        exact_hint(positions - surrogates)
    }
}

const SURROGATE_FIRST: i64 = 0xD800;
const SURROGATE_LAST: i64 = 0xDFFF;

/// Number of points `cursor + k*step` (k >= 0) inside `lo..=hi` that the
/// range still visits.
fn count_hits(cursor: i64, step: i64, lo: i64, hi: i64) -> u64 {
    if lo > hi {
        return 0;
    }
    let magnitude = step.abs();
    // Distances from the cursor, measured in the direction of travel.
    let (near, far) = if step > 0 {
        (lo - cursor, hi - cursor)
    } else {
        (cursor - hi, cursor - lo)
    };
    if far < 0 {
        return 0;
    }
    let first = if near <= 0 { 0 } else { (near + magnitude - 1) / magnitude };
    let last = far / magnitude;
    if last < first {
        0
    } else {
        (last - first + 1) as u64
    }
}

// ============================================================================
// Dynamically Typed Range
// ============================================================================

/// A range endpoint that is either a number or a single character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    /// Numeric endpoint.
    Number(f64),

    /// Character endpoint, stepped through its code point.
    Char(char),
}

impl Endpoint {
    /// Human-readable kind of the endpoint, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Char(_) => "character",
        }
    }

    /// The numeric value, if this is a numeric endpoint.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Number(n) => Some(n),
            Self::Char(_) => None,
        }
    }

    /// The character, if this is a character endpoint.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Self::Char(c) => Some(c),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for Endpoint {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Endpoint {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<char> for Endpoint {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

/// Range over [`Endpoint`] values produced by [`range_of`].
#[derive(Debug, Clone)]
pub enum RangeOf {
    /// Range between two numeric endpoints.
    Numbers(Range<f64>),

    /// Range between two character endpoints.
    Chars(CharRange),
}

impl Iterator for RangeOf {
    type Item = Endpoint;

    fn next(&mut self) -> Option<Endpoint> {
        match self {
            Self::Numbers(r) => r.next().map(Endpoint::Number),
            Self::Chars(r) => r.next().map(Endpoint::Char),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Numbers(r) => r.size_hint(),
            Self::Chars(r) => r.size_hint(),
        }
    }
}

/// Build a range whose endpoints are decided at runtime.
///
/// Both endpoints must be numbers or both must be characters. For characters
/// the step must be a whole number.
///
/// # Errors
///
/// * [`SeqError::TypeMismatch`] if the endpoint kinds differ.
/// * [`SeqError::InvalidStep`] if the step is zero, not finite, or fractional
///   for a character range.
pub fn range_of(from: Endpoint, to_inclusive: Endpoint, step: f64) -> Result<RangeOf, SeqError> {
    match (from, to_inclusive) {
        (Endpoint::Number(a), Endpoint::Number(b)) => range(a, b, step).map(RangeOf::Numbers),
        (Endpoint::Char(a), Endpoint::Char(b)) => {
            let magnitude = Float::abs(step);
            if !magnitude.is_finite()
                || Float::fract(magnitude) != 0.0
                || magnitude > f64::from(u32::MAX)
            {
                return Err(SeqError::InvalidStep(step));
            }
            char_range(a, b, magnitude as u32).map(RangeOf::Chars)
        }
        (a, b) => Err(SeqError::TypeMismatch {
            from: a.kind(),
            to: b.kind(),
        }),
    }
}

// ============================================================================
// Repeat
// ============================================================================

/// Infinite sequence yielding the same value forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

/// Yield `value` forever.
///
/// Never drain a `Repeat` without a limiting counterpart such as [`take`] or
/// a zip with a finite sequence.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ============================================================================
// Take
// ============================================================================

/// At most `limit` elements of a sequence, produced by [`take`].
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

/// Yield at most `limit` elements of `seq`, stopping early if it runs out.
pub fn take<S: IntoIterator>(seq: S, limit: usize) -> Take<S::IntoIter> {
    Take {
        iter: seq.into_iter(),
        remaining: limit,
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(self.remaining, |u| u.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

// ============================================================================
// Indexed Map
// ============================================================================

/// Sequence of `f(value, index)` values, produced by [`map`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
    index: usize,
}

/// Apply `f(value, index)` to each element in order.
pub fn map<S, B, F>(seq: S, f: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> B,
{
    Map {
        iter: seq.into_iter(),
        f,
        index: 0,
    }
}

impl<I, B, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.f)(value, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

// ============================================================================
// Indexed Filter
// ============================================================================

/// Elements for which a predicate holds, produced by [`filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    index: usize,
}

/// Keep the elements for which `predicate(&value, index)` holds.
///
/// The predicate runs once per candidate and the original element is yielded.
/// `index` counts candidates, not yielded elements.
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    Filter {
        iter: seq.into_iter(),
        predicate,
        index: 0,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for value in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&value, index) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Strict left fold: `acc = f(acc, v)` for every element, starting at `initial`.
pub fn fold<S, B, F>(seq: S, initial: B, mut f: F) -> B
where
    S: IntoIterator,
    F: FnMut(B, S::Item) -> B,
{
    let mut acc = initial;
    for value in seq {
        acc = f(acc, value);
    }
    acc
}

/// Left fold seeded with the first element.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `seq` yields nothing.
pub fn reduce<S, F>(seq: S, f: F) -> Result<S::Item, SeqError>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut iter = seq.into_iter();
    let first = iter.next().ok_or(SeqError::EmptySequence)?;
    Ok(fold(iter, first, f))
}

/// Sum of all elements; zero for an empty sequence.
pub fn sum<S>(seq: S) -> S::Item
where
    S: IntoIterator,
    S::Item: Zero + Add<Output = S::Item>,
{
    fold(seq, S::Item::zero(), |acc, v| acc + v)
}
