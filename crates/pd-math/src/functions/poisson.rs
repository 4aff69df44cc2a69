//! Poisson formula functions.
//!
//! Every function takes the rate `lambda` explicitly, validates it, and
//! returns `NaN` for an invalid rate or a `NaN` input. Special functions
//! (log-gamma, regularized incomplete gamma, inverse error function) come
//! from `statrs`.
//!
//! The `*_factory` functions fix `lambda` once and return a closure over
//! the corresponding evaluator.

use std::f64::consts::{E, PI, SQRT_2};

use pd_core::{is_positive_finite, Probability, Real};
use statrs::function::erf::erf_inv;
use statrs::function::gamma::{gamma_ur, ln_gamma};

/// Upward steps the quantile search may take past its starting guess,
/// in units of standard deviations.
const QUANTILE_SEARCH_SIGMAS: Real = 40.0;

/// Rates below this use the exact entropy sum instead of the asymptotic
/// expansion.
const ENTROPY_EXACT_CUTOFF: Real = 10.0;

// ── Summary statistics ───────────────────────────────────────────────────────

/// Entropy in nats.
///
/// For `λ ≥ 10` uses the asymptotic expansion
/// `½·ln(2πeλ) − 1/(12λ) − 1/(24λ²) − 19/(360λ³)`; below that the exact
/// sum `−Σ pmf(k)·ln pmf(k)`, truncated where the tail mass underflows.
pub fn entropy(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    entropy_unchecked(lambda)
}

/// Excess kurtosis `1/λ`.
pub fn kurtosis(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    1.0 / lambda
}

/// Mean `λ`.
pub fn mean(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    lambda
}

/// Median approximation `floor(λ + 1/3 − 0.02/λ)`.
pub fn median(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    median_unchecked(lambda)
}

/// Mode `floor(λ)`.
pub fn mode(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    lambda.floor()
}

/// Skewness `1/√λ`.
pub fn skewness(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    1.0 / lambda.sqrt()
}

/// Standard deviation `√λ`.
pub fn stdev(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    lambda.sqrt()
}

/// Variance `λ`.
pub fn variance(lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    lambda
}

// ── Evaluators ───────────────────────────────────────────────────────────────

/// Cumulative distribution function `P(X ≤ x)`.
///
/// `x` is floored onto the integer support; negative `x` gives `0`.
pub fn cdf(x: Real, lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    cdf_unchecked(x, lambda)
}

/// Natural logarithm of the probability mass function.
///
/// Returns `-inf` for negative or non-integer `x`, where the mass is zero.
pub fn logpmf(x: Real, lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    logpmf_unchecked(x, lambda)
}

/// Probability mass function `P(X = x)`; `0` off the support.
pub fn pmf(x: Real, lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    logpmf_unchecked(x, lambda).exp()
}

/// Moment-generating function `E[e^{tX}] = exp(λ(e^t − 1))`.
pub fn mgf(t: Real, lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    mgf_unchecked(t, lambda)
}

/// Quantile function: the smallest integer `k ≥ 0` with `cdf(k) ≥ p`.
///
/// Returns `NaN` when `p` lies outside `[0, 1]`, and `+inf` for `p = 1`.
pub fn quantile(p: Probability, lambda: Real) -> Real {
    if !is_positive_finite(lambda) {
        return Real::NAN;
    }
    quantile_unchecked(p, lambda)
}

// ── Factories ────────────────────────────────────────────────────────────────

/// [`cdf`] with `lambda` fixed.
pub fn cdf_factory(lambda: Real) -> impl Fn(Real) -> Real {
    let valid = is_positive_finite(lambda);
    move |x| if valid { cdf_unchecked(x, lambda) } else { Real::NAN }
}

/// [`logpmf`] with `lambda` fixed.
pub fn logpmf_factory(lambda: Real) -> impl Fn(Real) -> Real {
    let valid = is_positive_finite(lambda);
    move |x| if valid { logpmf_unchecked(x, lambda) } else { Real::NAN }
}

/// [`pmf`] with `lambda` fixed.
pub fn pmf_factory(lambda: Real) -> impl Fn(Real) -> Real {
    let valid = is_positive_finite(lambda);
    move |x| {
        if valid {
            logpmf_unchecked(x, lambda).exp()
        } else {
            Real::NAN
        }
    }
}

/// [`mgf`] with `lambda` fixed.
pub fn mgf_factory(lambda: Real) -> impl Fn(Real) -> Real {
    let valid = is_positive_finite(lambda);
    move |t| if valid { mgf_unchecked(t, lambda) } else { Real::NAN }
}

/// [`quantile`] with `lambda` fixed.
pub fn quantile_factory(lambda: Real) -> impl Fn(Probability) -> Real {
    let valid = is_positive_finite(lambda);
    move |p| {
        if valid {
            quantile_unchecked(p, lambda)
        } else {
            Real::NAN
        }
    }
}

// ── Unchecked kernels (lambda already validated) ─────────────────────────────

pub(crate) fn entropy_unchecked(lambda: Real) -> Real {
    if lambda < ENTROPY_EXACT_CUTOFF {
        return entropy_exact(lambda);
    }
    let l2 = lambda * lambda;
    0.5 * (2.0 * PI * E * lambda).ln()
        - 1.0 / (12.0 * lambda)
        - 1.0 / (24.0 * l2)
        - 19.0 / (360.0 * l2 * lambda)
}

fn entropy_exact(lambda: Real) -> Real {
    let last = (lambda + QUANTILE_SEARCH_SIGMAS * (lambda.sqrt() + 1.0)).ceil();
    let mut sum = 0.0;
    let mut k = 0.0;
    while k <= last {
        let log_p = logpmf_unchecked(k, lambda);
        // underflowed terms contribute nothing
        if log_p.is_finite() {
            sum -= log_p.exp() * log_p;
        }
        k += 1.0;
    }
    sum
}

pub(crate) fn median_unchecked(lambda: Real) -> Real {
    (lambda + 1.0 / 3.0 - 0.02 / lambda).floor()
}

pub(crate) fn cdf_unchecked(x: Real, lambda: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x == Real::INFINITY {
        return 1.0;
    }
    // P(X ≤ k) = Q(k + 1, λ)
    gamma_ur(x.floor() + 1.0, lambda)
}

pub(crate) fn logpmf_unchecked(x: Real, lambda: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    if x < 0.0 || !x.is_finite() || x.fract() != 0.0 {
        return Real::NEG_INFINITY;
    }
    x * lambda.ln() - lambda - ln_gamma(x + 1.0)
}

pub(crate) fn mgf_unchecked(t: Real, lambda: Real) -> Real {
    if t.is_nan() {
        return Real::NAN;
    }
    (lambda * t.exp_m1()).exp()
}

pub(crate) fn quantile_unchecked(p: Probability, lambda: Real) -> Real {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }

    let sigma = lambda.sqrt();
    let mut k = cornish_fisher_guess(p, lambda, sigma);

    if cdf_unchecked(k, lambda) >= p {
        while k > 0.0 && cdf_unchecked(k - 1.0, lambda) >= p {
            k -= 1.0;
        }
    } else {
        let ceiling = k + QUANTILE_SEARCH_SIGMAS * (sigma + 1.0);
        while k < ceiling && cdf_unchecked(k, lambda) < p {
            k += 1.0;
        }
    }
    k
}

/// Starting point for the quantile search: a normal approximation with a
/// first-order skewness correction, rounded onto the support.
fn cornish_fisher_guess(p: Probability, lambda: Real, sigma: Real) -> Real {
    let z = SQRT_2 * erf_inv(2.0 * p - 1.0);
    let skew = 1.0 / sigma;
    let guess = lambda + sigma * (z + skew * (z * z - 1.0) / 6.0);
    let k = guess.round();
    // also clears the sign of a rounded -0.0
    if k.is_finite() && k > 0.0 {
        k
    } else {
        0.0
    }
}
