//! Error types for sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when building or
//! reducing sequences: mismatched range endpoints, unusable steps, and
//! reductions that need at least one element.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values where there are any.
//! * **No-std**: Uses only `core` formatting; `std::error::Error` is implemented
//!   when the `std` feature is enabled.
//! * **Synchronous**: Errors are raised at the offending call, never deferred
//!   into a partially built sequence.
//!
//! ## Key concepts
//!
//! 1. **Construction errors**: `TypeMismatch`, `InvalidStep`, `EmptyRange`.
//! 2. **Reduction errors**: `EmptySequence` for folds that have no seed.
//!
//! ## Invariants
//!
//! * Arithmetic edge cases (division by zero, NaN) are never errors; they
//!   propagate as IEEE-754 values.
//!
//! ## Non-goals
//!
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence construction and reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqError {
    /// Range endpoints are of different kinds (one character, one number).
    TypeMismatch {
        /// Kind of the `from` endpoint.
        from: &'static str,
        /// Kind of the `to_inclusive` endpoint.
        to: &'static str,
    },

    /// A seedless reduction was asked to reduce an empty sequence.
    EmptySequence,

    /// Step is zero, not finite, or not a whole number for a character range.
    InvalidStep(f64),

    /// Integer range `[from, to)` or `[from, to]` contains no value.
    EmptyRange {
        /// Lower end of the range.
        from: i64,
        /// Upper end of the range.
        to: i64,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TypeMismatch { from, to } => {
                write!(f, "Type mismatch: range from a {from} to a {to}")
            }
            Self::EmptySequence => write!(f, "Sequence is empty"),
            Self::InvalidStep(step) => {
                write!(f, "Invalid step: {step} (must be finite and non-zero)")
            }
            Self::EmptyRange { from, to } => write!(f, "Empty range: {from}..{to}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeqError {}
