//! Layer 3: Vector
//!
//! # Purpose
//!
//! This layer treats any numeric iterator as a vector:
//! - Element-wise unary, binary and ternary combinators with broadcasting
//! - Component extremes, norms and distances
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Vector ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise combinators.
pub mod ops;

/// Norms and distances.
pub mod reduce;

pub use ops::*;
pub use reduce::*;
