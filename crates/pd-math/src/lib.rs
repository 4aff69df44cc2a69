//! # pd-math
//!
//! Poisson formula functions (special functions via statrs) and the
//! stateful [`PoissonDistribution`] object built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distribution objects.
pub mod distributions;

/// Standalone formula functions.
pub mod functions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::PoissonDistribution;
