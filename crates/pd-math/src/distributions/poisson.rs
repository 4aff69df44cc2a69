//! Poisson distribution object.
//!
//! Holds the rate `lambda` and evaluates every property through the
//! formula kernels in [`crate::functions::poisson`], reading the current
//! rate at call time.

use std::fmt::{self, Display};

use num_traits::ToPrimitive;
use pd_core::{require_positive_finite, require_positive_finite_number, Probability, Real, Result};

use crate::functions::poisson as formulas;

/// Default rate used by [`PoissonDistribution::default`].
pub const DEFAULT_LAMBDA: Real = 1.0;

/// Poisson distribution with rate (and mean) `lambda`.
///
/// `lambda` is always a finite positive real: construction and
/// [`set_lambda`](Self::set_lambda) validate it, and a rejected value leaves
/// the distribution untouched. Summary statistics are recomputed on every
/// call, so they always reflect the latest rate.
///
/// Mutation goes through `&mut self`; share an instance across threads
/// behind a lock, or use [`with_lambda`](Self::with_lambda) to derive
/// independent copies.
///
/// # Example
/// ```
/// use pd_math::distributions::PoissonDistribution;
///
/// let mut d = PoissonDistribution::new(2.0).unwrap();
/// assert_eq!(d.quantile(0.5), 2.0);
/// assert!(d.set_lambda(-1.0).is_err());
/// assert_eq!(d.lambda(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonDistribution {
    lambda: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with rate `lambda`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](pd_core::Error::InvalidArgument) if
    /// `lambda` is not a finite positive number.
    pub fn new(lambda: Real) -> Result<Self> {
        let lambda = require_positive_finite("lambda", lambda).map_err(|e| {
            tracing::debug!(rejected = lambda, "rejected Poisson rate");
            e
        })?;
        Ok(Self { lambda })
    }

    /// Create a Poisson distribution from any numeric rate.
    ///
    /// Values without an `f64` representation are rejected as
    /// non-numeric, in addition to the checks made by [`new`](Self::new).
    pub fn from_number<T>(lambda: T) -> Result<Self>
    where
        T: ToPrimitive + Display,
    {
        let lambda = require_positive_finite_number("lambda", lambda).map_err(|e| {
            tracing::debug!(error = %e, "rejected Poisson rate");
            e
        })?;
        Ok(Self { lambda })
    }

    /// Rate parameter λ, exactly as stored.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Replace the rate parameter.
    ///
    /// On error the previous rate is kept.
    pub fn set_lambda(&mut self, lambda: Real) -> Result<()> {
        match require_positive_finite("lambda", lambda) {
            Ok(value) => {
                tracing::trace!(from = self.lambda, to = value, "Poisson rate updated");
                self.lambda = value;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(lambda = self.lambda, rejected = lambda, "rejected Poisson rate");
                Err(e)
            }
        }
    }

    /// A copy of this distribution with a different rate.
    pub fn with_lambda(&self, lambda: Real) -> Result<Self> {
        Self::new(lambda)
    }

    // ── Summary statistics ───────────────────────────────────────────────────

    /// Entropy in nats (asymptotic expansion).
    pub fn entropy(&self) -> Real {
        formulas::entropy_unchecked(self.lambda)
    }

    /// Excess kurtosis `1/λ`.
    pub fn kurtosis(&self) -> Real {
        1.0 / self.lambda
    }

    /// Mean of the distribution (= λ).
    pub fn mean(&self) -> Real {
        self.lambda
    }

    /// Median approximation `floor(λ + 1/3 − 0.02/λ)`.
    pub fn median(&self) -> Real {
        formulas::median_unchecked(self.lambda)
    }

    /// Mode `floor(λ)`.
    pub fn mode(&self) -> Real {
        self.lambda.floor()
    }

    /// Skewness `1/√λ`.
    pub fn skewness(&self) -> Real {
        1.0 / self.lambda.sqrt()
    }

    /// Standard deviation `√λ`.
    pub fn stdev(&self) -> Real {
        self.lambda.sqrt()
    }

    /// Variance of the distribution (= λ).
    pub fn variance(&self) -> Real {
        self.lambda
    }

    // ── Evaluators ───────────────────────────────────────────────────────────

    /// Cumulative distribution function P(X ≤ x).
    pub fn cdf(&self, x: Real) -> Real {
        formulas::cdf_unchecked(x, self.lambda)
    }

    /// Log of the probability mass function; `-inf` off the support.
    pub fn logpmf(&self, x: Real) -> Real {
        formulas::logpmf_unchecked(x, self.lambda)
    }

    /// Probability mass function P(X = x); `0` off the support.
    pub fn pmf(&self, x: Real) -> Real {
        formulas::logpmf_unchecked(x, self.lambda).exp()
    }

    /// Moment-generating function.
    pub fn mgf(&self, t: Real) -> Real {
        formulas::mgf_unchecked(t, self.lambda)
    }

    /// Smallest integer `k` with `cdf(k) ≥ p`; `NaN` for `p ∉ [0, 1]`.
    pub fn quantile(&self, p: Probability) -> Real {
        formulas::quantile_unchecked(p, self.lambda)
    }
}

impl Default for PoissonDistribution {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }
}

impl TryFrom<Real> for PoissonDistribution {
    type Error = pd_core::Error;

    fn try_from(lambda: Real) -> Result<Self> {
        Self::new(lambda)
    }
}

impl Display for PoissonDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poisson(λ = {})", self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pd_core::Error;

    #[test]
    fn default_rate_is_one() {
        let d = PoissonDistribution::default();
        assert_eq!(d.lambda(), 1.0);
    }

    #[test]
    fn poisson_pmf() {
        let d = PoissonDistribution::new(3.0).unwrap();
        // P(X=0) = e^{-3}
        let expected = (-3.0_f64).exp();
        assert!(
            (d.pmf(0.0) - expected).abs() < 1e-10,
            "got {}, expected {}",
            d.pmf(0.0),
            expected
        );
        // P(X=3) = e^{-3} * 3^3 / 3! = e^{-3} * 27 / 6
        let expected3 = expected * 27.0 / 6.0;
        assert!(
            (d.pmf(3.0) - expected3).abs() < 1e-10,
            "got {}, expected {}",
            d.pmf(3.0),
            expected3
        );
    }

    #[test]
    fn poisson_cdf_sums_to_one() {
        let d = PoissonDistribution::new(5.0).unwrap();
        // For large k, CDF should approach 1
        assert!((d.cdf(50.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn poisson_cdf_monotone() {
        let d = PoissonDistribution::new(2.0).unwrap();
        let mut prev = 0.0;
        for k in 0..20 {
            let c = d.cdf(k as Real);
            assert!(c >= prev, "CDF not monotone at k={k}");
            prev = c;
        }
    }

    #[test]
    fn moments_at_four() {
        let d = PoissonDistribution::new(4.0).unwrap();
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.mode(), 4.0);
        assert_eq!(d.skewness(), 0.5);
        assert_eq!(d.kurtosis(), 0.25);
        assert_eq!(d.stdev(), 2.0);
        assert_eq!(d.variance(), 4.0);
        assert_abs_diff_eq!(d.entropy(), 2.087, epsilon = 1e-3);
    }

    #[test]
    fn invalid_construction() {
        for bad in [0.0, -1.0, Real::NAN, Real::INFINITY, Real::NEG_INFINITY] {
            assert!(
                matches!(PoissonDistribution::new(bad), Err(Error::InvalidArgument(_))),
                "accepted {bad}"
            );
        }
        let msg = PoissonDistribution::new(-2.5).unwrap_err().to_string();
        assert!(msg.contains("-2.5"), "message was {msg}");
    }

    #[test]
    fn failed_set_keeps_previous_rate() {
        let mut d = PoissonDistribution::default();
        d.set_lambda(3.0).unwrap();
        assert!(matches!(d.set_lambda(-1.0), Err(Error::InvalidArgument(_))));
        assert_eq!(d.lambda(), 3.0);
        assert!(d.set_lambda(Real::NAN).is_err());
        assert_eq!(d.lambda(), 3.0);
    }

    #[test]
    fn evaluators_follow_mutation() {
        let mut d = PoissonDistribution::new(2.0).unwrap();
        let before = d.pmf(3.0);
        d.set_lambda(5.0).unwrap();
        assert_abs_diff_eq!(d.pmf(3.0), formulas::pmf(3.0, 5.0));
        assert!((d.pmf(3.0) - before).abs() > 1e-3);
        assert_eq!(d.mean(), 5.0);
    }

    #[test]
    fn with_lambda_leaves_original() {
        let d = PoissonDistribution::new(2.0).unwrap();
        let e = d.with_lambda(7.0).unwrap();
        assert_eq!(d.lambda(), 2.0);
        assert_eq!(e.lambda(), 7.0);
        assert!(d.with_lambda(0.0).is_err());
    }

    #[test]
    fn from_number_and_try_from() {
        assert_eq!(PoissonDistribution::from_number(6_u32).unwrap().lambda(), 6.0);
        assert!(PoissonDistribution::from_number(-3_i32).is_err());
        assert_eq!(PoissonDistribution::try_from(0.5).unwrap().lambda(), 0.5);
        assert!(PoissonDistribution::try_from(-0.5).is_err());
    }

    #[test]
    fn display() {
        let d = PoissonDistribution::new(2.5).unwrap();
        assert_eq!(d.to_string(), "Poisson(λ = 2.5)");
    }
}
