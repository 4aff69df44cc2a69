//! Probability distribution objects.
//!
//! Each object validates its parameters once and delegates evaluation to
//! the formula kernels in [`crate::functions`].

pub mod poisson;

pub use poisson::{PoissonDistribution, DEFAULT_LAMBDA};
