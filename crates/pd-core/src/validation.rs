//! Parameter validation shared by every distribution constructor and setter.

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::errors::{Error, Result};
use crate::Real;

/// `true` if `value` is a finite, strictly positive real.
///
/// `NaN` and both infinities are rejected.
#[inline]
pub fn is_positive_finite(value: Real) -> bool {
    value.is_finite() && value > 0.0
}

/// Check that parameter `name` is a finite positive real.
///
/// On failure the returned [`Error::InvalidArgument`] names the parameter
/// and carries the offending value.
pub fn require_positive_finite(name: &str, value: Real) -> Result<Real> {
    if is_positive_finite(value) {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}

/// Convert an arbitrary numeric value to [`Real`] and validate it like
/// [`require_positive_finite`].
///
/// Values that have no `f64` representation are reported as
/// non-numeric. Every primitive numeric type converts, so that branch only
/// fires for user-defined `ToPrimitive` types.
pub fn require_positive_finite_number<T>(name: &str, value: T) -> Result<Real>
where
    T: ToPrimitive + Display,
{
    match value.to_f64() {
        Some(v) => require_positive_finite(name, v),
        None => Err(Error::InvalidArgument(format!(
            "{name} must be a finite positive number, got non-numeric value {value}"
        ))),
    }
}
