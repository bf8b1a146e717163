//! Tests for the lazy sequence primitives.
//!
//! These tests verify:
//! - Numeric, character and runtime-typed ranges
//! - Repeat and take
//! - Indexed map and filter
//! - The folds
//!
//! ## Test Organization
//!
//! 1. **Ranges** - Direction, inclusivity, step handling, errors
//! 2. **Repeat / Take** - Infinite producers and limits
//! 3. **Map / Filter** - Indices, order, single evaluation
//! 4. **Folds** - fold, reduce, sum
//! 5. **Laziness** - Nothing is computed before it is pulled

use approx::assert_relative_eq;
use std::cell::Cell;

use vecseq::prelude::*;

// ============================================================================
// Numeric Range Tests
// ============================================================================

/// Test ascending range is inclusive of both endpoints.
#[test]
fn test_range_ascending() {
    let values: Vec<f64> = range(0.0, 5.0, 1.0).unwrap().collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
}

/// Test descending range is inferred from the endpoints.
#[test]
fn test_range_descending() {
    let values: Vec<f64> = range(5.0, 0.0, 1.0).unwrap().collect();
    assert_eq!(values, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
}

/// Test that the step sign is ignored.
#[test]
fn test_range_negative_step_uses_magnitude() {
    let up: Vec<f64> = range(0.0, 4.0, -2.0).unwrap().collect();
    assert_eq!(up, vec![0.0, 2.0, 4.0]);

    let down: Vec<f64> = range(4.0, 0.0, -2.0).unwrap().collect();
    assert_eq!(down, vec![4.0, 2.0, 0.0]);
}

/// Test that an unreachable far endpoint is not overshot.
#[test]
fn test_range_step_not_reaching_end() {
    let values: Vec<f64> = range(0.0, 5.0, 2.0).unwrap().collect();
    assert_eq!(values, vec![0.0, 2.0, 4.0]);
}

/// Test equal endpoints yield exactly one element.
#[test]
fn test_range_single_point() {
    let values: Vec<f64> = range(3.0, 3.0, 1.0).unwrap().collect();
    assert_eq!(values, vec![3.0]);
}

/// Test fractional steps do not drift past the endpoint.
#[test]
fn test_range_fractional_step() {
    let values: Vec<f64> = range(0.0, 1.0, 0.1).unwrap().collect();
    assert_eq!(values.len(), 11);
    assert_relative_eq!(values[10], 1.0);
    assert_relative_eq!(values[3], 0.3, epsilon = 1e-12);
}

/// Test f32 ranges.
#[test]
fn test_range_f32() {
    let values: Vec<f32> = range(1.0_f32, 2.0, 0.5).unwrap().collect();
    assert_eq!(values, vec![1.0, 1.5, 2.0]);
}

/// Test an f32 range past 2^24 elements still ends at its last element.
#[test]
fn test_range_f32_past_exact_integers() -> Result<(), SeqError> {
    let to = 1.7e7_f32;
    let capped = take(range(0.0_f32, to, 1.0)?, 17_500_000);
    assert_eq!(capped.count(), 17_000_001);

    let mut values = range(0.0_f32, to, 1.0)?;
    assert_eq!(values.size_hint(), (17_000_001, Some(17_000_001)));
    assert_eq!(values.nth(17_000_000), Some(to));
    assert_eq!(values.next(), None);
    Ok(())
}

/// Test numeric range size hints are exact and shrink as it drains.
#[test]
fn test_range_size_hint() -> Result<(), SeqError> {
    let mut values = range(5.0, 0.0, 1.0)?;
    assert_eq!(values.size_hint(), (6, Some(6)));
    values.next();
    values.next();
    assert_eq!(values.size_hint(), (4, Some(4)));
    assert_eq!(values.by_ref().count(), 4);
    assert_eq!(values.size_hint(), (0, Some(0)));

    assert_eq!(range(0.0, 1.0, 0.1)?.size_hint(), (11, Some(11)));
    assert_eq!(range(0.0, 0.95, 0.5)?.size_hint(), (2, Some(2)));
    assert_eq!(range(f64::NAN, 1.0, 1.0)?.size_hint(), (0, Some(0)));
    Ok(())
}

/// Test zero and non-finite steps are rejected.
#[test]
fn test_range_invalid_step() {
    assert_eq!(
        range(0.0, 1.0, 0.0).unwrap_err(),
        SeqError::InvalidStep(0.0)
    );
    assert!(matches!(
        range(0.0, 1.0, f64::INFINITY),
        Err(SeqError::InvalidStep(_))
    ));
    assert!(matches!(
        range(0.0, 1.0, f64::NAN),
        Err(SeqError::InvalidStep(_))
    ));
}

// ============================================================================
// Character Range Tests
// ============================================================================

/// Test ascending character range.
#[test]
fn test_char_range_ascending() {
    let values: Vec<char> = char_range('a', 'e', 1).unwrap().collect();
    assert_eq!(values, vec!['a', 'b', 'c', 'd', 'e']);
}

/// Test descending character range with a step.
#[test]
fn test_char_range_descending_step() {
    let values: String = char_range('z', 'u', 2).unwrap().collect();
    assert_eq!(values, "zxv");
}

/// Test that surrogate code points are skipped.
#[test]
fn test_char_range_skips_surrogates() {
    let values: Vec<char> = char_range('\u{D7FF}', '\u{E000}', 1).unwrap().collect();
    assert_eq!(values, vec!['\u{D7FF}', '\u{E000}']);
}

/// Test character range size hints match what is yielded.
#[test]
fn test_char_range_size_hint() -> Result<(), SeqError> {
    let cases = [
        char_range('a', 'e', 1)?,
        char_range('z', 'u', 2)?,
        char_range('\u{D7FF}', '\u{E000}', 1)?,
        char_range('\u{E000}', '\u{D000}', 3)?,
        char_range('\u{D000}', '\u{E800}', 7)?,
        char_range('b', 'b', 4)?,
    ];
    for chars in cases {
        let expected = chars.clone().count();
        assert_eq!(chars.size_hint(), (expected, Some(expected)));
    }

    let mut chars = char_range('a', 'e', 1)?;
    chars.next();
    assert_eq!(chars.size_hint(), (4, Some(4)));
    Ok(())
}

/// Test zero character step is rejected.
#[test]
fn test_char_range_zero_step() {
    assert_eq!(
        char_range('a', 'b', 0).unwrap_err(),
        SeqError::InvalidStep(0.0)
    );
}

// ============================================================================
// Runtime-Typed Range Tests
// ============================================================================

/// Test numeric endpoints through `range_of`.
#[test]
fn test_range_of_numbers() {
    let values: Vec<f64> = range_of(0.into(), 3.into(), 1.0)
        .unwrap()
        .filter_map(|e| e.as_number())
        .collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
}

/// Test character endpoints through `range_of`.
#[test]
fn test_range_of_chars() {
    let values: Vec<Endpoint> = range_of('a'.into(), 'c'.into(), 1.0).unwrap().collect();
    assert_eq!(
        values,
        vec![Endpoint::Char('a'), Endpoint::Char('b'), Endpoint::Char('c')]
    );
}

/// Test mixed endpoint kinds fail with `TypeMismatch`.
#[test]
fn test_range_of_type_mismatch() {
    assert_eq!(
        range_of(0.into(), 'x'.into(), 1.0).unwrap_err(),
        SeqError::TypeMismatch {
            from: "number",
            to: "character",
        }
    );
    assert_eq!(
        range_of('a'.into(), 10.0.into(), 1.0).unwrap_err(),
        SeqError::TypeMismatch {
            from: "character",
            to: "number",
        }
    );
}

/// Test fractional character steps are rejected.
#[test]
fn test_range_of_fractional_char_step() {
    assert_eq!(
        range_of('a'.into(), 'z'.into(), 1.5).unwrap_err(),
        SeqError::InvalidStep(1.5)
    );
}

/// Test endpoint accessors.
#[test]
fn test_endpoint_accessors() {
    let n = Endpoint::from(2.5);
    let c = Endpoint::from('q');

    assert_eq!(n.as_number(), Some(2.5));
    assert_eq!(n.as_char(), None);
    assert_eq!(c.as_char(), Some('q'));
    assert_eq!(c.as_number(), None);
    assert_eq!(n.kind(), "number");
    assert_eq!(c.kind(), "character");
}

// ============================================================================
// Repeat / Take Tests
// ============================================================================

/// Test repeat is infinite and take bounds it.
#[test]
fn test_repeat_take() {
    let values: Vec<f64> = take(repeat(7.0), 4).collect();
    assert_eq!(values, vec![7.0; 4]);
}

/// Test take stops early when the source runs out.
#[test]
fn test_take_short_source() {
    let values: Vec<i32> = take(vec![1, 2], 5).collect();
    assert_eq!(values, vec![1, 2]);
}

/// Test take of zero yields nothing and does not pull from the source.
#[test]
fn test_take_zero() {
    let pulled = Cell::new(0);
    let source = map(repeat(1), |v, _| {
        pulled.set(pulled.get() + 1);
        v
    });
    assert_eq!(take(source, 0).count(), 0);
    assert_eq!(pulled.get(), 0);
}

/// Test take size hints.
#[test]
fn test_take_size_hint() {
    assert_eq!(take(repeat(0.0), 3).size_hint(), (3, Some(3)));
    assert_eq!(take(vec![1, 2], 5).size_hint(), (2, Some(2)));
}

// ============================================================================
// Map / Filter Tests
// ============================================================================

/// Test map passes 0-based indices.
#[test]
fn test_map_with_index() {
    let values: Vec<f64> = map(vec![10.0, 20.0, 30.0], |v, i| v + i as f64).collect();
    assert_eq!(values, vec![10.0, 21.0, 32.0]);
}

/// Test filter yields original elements in order.
#[test]
fn test_filter_yields_original_elements() {
    let values: Vec<f64> = filter(vec![1.0, -2.0, 3.0, -4.0, 5.0], |v, _| *v > 0.0).collect();
    assert_eq!(values, vec![1.0, 3.0, 5.0]);
}

/// Test filter indices count candidates, not survivors.
#[test]
fn test_filter_index_counts_candidates() {
    let values: Vec<char> = filter(vec!['a', 'b', 'c', 'd', 'e'], |_, i| i % 2 == 0).collect();
    assert_eq!(values, vec!['a', 'c', 'e']);
}

/// Test the predicate runs exactly once per candidate.
#[test]
fn test_filter_single_evaluation() {
    let calls = Cell::new(0);
    let kept: Vec<i32> = filter(1..=6, |v, _| {
        calls.set(calls.get() + 1);
        v % 3 == 0
    })
    .collect();

    assert_eq!(kept, vec![3, 6]);
    assert_eq!(calls.get(), 6);
}

// ============================================================================
// Fold Tests
// ============================================================================

/// Test fold is a left fold.
#[test]
fn test_fold_left() {
    let result = fold(vec![1.0, 2.0, 3.0], 100.0, |acc, v| acc - v);
    assert_eq!(result, 94.0);

    let order = fold(vec!['a', 'b', 'c'], String::new(), |mut acc, c| {
        acc.push(c);
        acc
    });
    assert_eq!(order, "abc");
}

/// Test fold on empty input returns the seed.
#[test]
fn test_fold_empty() {
    assert_eq!(fold(Vec::<f64>::new(), 42.0, |acc, v| acc + v), 42.0);
}

/// Test reduce seeds with the first element.
#[test]
fn test_reduce() {
    assert_eq!(reduce(vec![2.0, 3.0, 4.0], |a, b| a * b), Ok(24.0));
    assert_eq!(reduce(vec![9.0], |a, b| a * b), Ok(9.0));
}

/// Test reduce on empty input fails.
#[test]
fn test_reduce_empty() {
    assert_eq!(
        reduce(Vec::<f64>::new(), |a, b| a + b),
        Err(SeqError::EmptySequence)
    );
}

/// Test sum.
#[test]
fn test_sum() {
    assert_eq!(sum(vec![1.5, 2.5, 3.0]), 7.0);
    assert_eq!(sum(Vec::<f64>::new()), 0.0);
    assert_eq!(sum(1..=4), 10);
}

// ============================================================================
// Laziness Tests
// ============================================================================

/// Test nothing is computed until pulled, and partial draining resumes.
#[test]
fn test_lazy_and_resumable() {
    let pulled = Cell::new(0);
    let mut doubled = map(range(1.0, 5.0, 1.0).unwrap(), |v, _| {
        pulled.set(pulled.get() + 1);
        v * 2.0
    });
    assert_eq!(pulled.get(), 0);

    assert_eq!(doubled.next(), Some(2.0));
    assert_eq!(doubled.next(), Some(4.0));
    assert_eq!(pulled.get(), 2);

    // Draining the rest continues from the third element.
    assert_eq!(sum(doubled), 6.0 + 8.0 + 10.0);
    assert_eq!(pulled.get(), 5);
}

/// Test a cloned chain gives an independent pass.
#[test]
fn test_clone_gives_second_pass() {
    let chain = map(range(1.0, 3.0, 1.0).unwrap(), |v, _| v * v);
    let again = chain.clone();
    assert_eq!(sum(chain), 14.0);
    assert_eq!(sum(again), 14.0);
}
