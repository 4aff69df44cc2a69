//! Error types for poissondist.
//!
//! Only parameter validation raises errors; evaluators signal
//! out-of-domain inputs through `NaN`, `0` or `-inf` return values instead.

use thiserror::Error;

/// The top-level error type used throughout poissondist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A distribution parameter was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout poissondist.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_carries_value() {
        let e = Error::InvalidArgument(format!("lambda must be positive, got {}", -2.5));
        assert_eq!(e.to_string(), "invalid argument: lambda must be positive, got -2.5");
    }
}
