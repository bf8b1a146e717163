//! Random scalar helpers driven by an explicit RNG.
//!
//! Every helper takes the generator as an argument instead of reaching for a
//! thread-local one, so callers seed it for reproducible results. The lazy
//! core has no randomness of its own.

// External dependencies
use rand::Rng;

// Internal dependencies
use crate::primitives::errors::SeqError;

/// Uniform float in `[min, max)`, computed as `min + u·(max - min)`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

/// Uniform integer in `[from, to_exclusive)`.
///
/// # Errors
///
/// Returns [`SeqError::EmptyRange`] if `from >= to_exclusive`.
pub fn random_int_exclusive<R: Rng + ?Sized>(
    rng: &mut R,
    from: i64,
    to_exclusive: i64,
) -> Result<i64, SeqError> {
    if from >= to_exclusive {
        return Err(SeqError::EmptyRange {
            from,
            to: to_exclusive,
        });
    }
    Ok(rng.random_range(from..to_exclusive))
}

/// Uniform integer in `[from, to_inclusive]`.
///
/// # Errors
///
/// Returns [`SeqError::EmptyRange`] if `from > to_inclusive`.
pub fn random_int_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    from: i64,
    to_inclusive: i64,
) -> Result<i64, SeqError> {
    if from > to_inclusive {
        return Err(SeqError::EmptyRange {
            from,
            to: to_inclusive,
        });
    }
    Ok(rng.random_range(from..=to_inclusive))
}

/// One character picked uniformly from `legal`.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `legal` has no characters.
pub fn random_char<R: Rng + ?Sized>(rng: &mut R, legal: &str) -> Result<char, SeqError> {
    let count = legal.chars().count();
    if count == 0 {
        return Err(SeqError::EmptySequence);
    }
    let index = rng.random_range(0..count);
    legal.chars().nth(index).ok_or(SeqError::EmptySequence)
}
