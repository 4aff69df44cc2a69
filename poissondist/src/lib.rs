//! # poissondist
//!
//! The Poisson distribution as a validated, mutable value object plus the
//! standalone formula functions it is built on.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `pd-*` workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use poissondist::PoissonDistribution;
//!
//! let mut d = PoissonDistribution::new(2.0).unwrap();
//! assert!((d.pmf(3.0) - 0.180).abs() < 1e-3);
//! assert!(d.quantile(1.9).is_nan());
//!
//! d.set_lambda(4.0).unwrap();
//! assert_eq!(d.stdev(), 2.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pd_core as core;

/// Formula functions and distribution objects.
pub use pd_math as math;

pub use pd_core::{Error, Result};
pub use pd_math::distributions::PoissonDistribution;
pub use pd_math::functions::poisson;
