//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure scalar functions:
//! - Clamping, linear interpolation and remapping
//! - Random scalar helpers over an injected RNG (`random` feature)
//!
//! These are used standalone and lifted element-wise by the vector layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Vector
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Clamp, lerp, inverse lerp and remap.
pub mod interpolation;

/// Random scalar helpers.
#[cfg(feature = "random")]
pub mod random;
