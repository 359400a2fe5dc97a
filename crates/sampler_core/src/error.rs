//! Error types for checked sampling and configuration loading.

use thiserror::Error;

/// Parameter rejected by a checked sampling operation.
///
/// Only the `try_*` operations and the distribution constructors report
/// these; the unchecked operations leave misuse undefined.
///
/// # Examples
/// ```
/// use sampler_core::SamplingError;
///
/// let err = SamplingError::NegativeRate(-1.5);
/// assert_eq!(format!("{}", err), "Poisson rate must be non-negative, got -1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SamplingError {
    /// A parameter was NaN or infinite.
    #[error("Parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// Scale of an exponential or uniform distribution was zero or negative.
    #[error("Scale must be positive, got {0}")]
    NonPositiveScale(f64),

    /// Poisson rate was negative.
    #[error("Poisson rate must be non-negative, got {0}")]
    NegativeRate(f64),
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration text could not be parsed.
    #[error("Invalid sampler configuration: {0}")]
    Parse(String),
}
