//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Raised when a physical value outside its domain reaches a logarithm or an evaluator.
    #[error("domain error: {quantity} must be positive and finite, got {value}")]
    Domain {
        /// Name of the offending quantity (e.g. `"frequency"`).
        quantity: &'static str,
        /// The rejected value.
        value: Scalar,
    },
    /// Raised when a chart, grid, or page configuration is inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Wraps IO failures from sinks and writers.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Wraps chart document parse failures.
    #[cfg(feature = "toml")]
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ChartError {
    /// Shorthand for a [`ChartError::Configuration`].
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Fails with [`ChartError::Domain`] unless `value` is strictly positive and finite.
pub fn ensure_positive(quantity: &'static str, value: Scalar) -> Result<Scalar, ChartError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChartError::Domain { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("resistance", 50.0).is_ok());
        for bad in [0.0, -1.0, Scalar::NAN, Scalar::INFINITY] {
            let err = ensure_positive("resistance", bad).unwrap_err();
            assert!(matches!(err, ChartError::Domain { quantity: "resistance", .. }));
        }
    }

    #[test]
    fn domain_error_names_the_quantity() {
        let err = ChartError::Domain { quantity: "frequency", value: -2.0 };
        assert_eq!(
            err.to_string(),
            "domain error: frequency must be positive and finite, got -2"
        );
    }
}
