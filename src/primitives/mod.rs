//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the building blocks every other layer uses:
//! - Error types
//! - Lazy sequence producers, adapters and reductions
//! - Scalar-or-sequence operands with broadcasting
//! - Eager array helpers
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Vector
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for sequence operations.
pub mod errors;

/// Range, repeat, take, map, filter and the folds.
pub mod sequence;

/// Scalar-or-sequence operands.
pub mod operand;

/// Eager array helpers.
pub mod array;
