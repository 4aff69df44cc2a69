//! # pd-core
//!
//! Core types, error definitions, and parameter validation shared by the
//! poissondist workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Distribution parameter validation.
pub mod validation;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A probability in `[0, 1]`.
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use validation::{is_positive_finite, require_positive_finite, require_positive_finite_number};
