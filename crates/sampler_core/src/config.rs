//! Configuration for constructing a distribution sampler.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::SeededRng;

/// Sampler configuration.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `seed` | `None` | Seed for the uniform source; `None` draws from OS entropy |
///
/// # Examples
///
/// ```rust
/// use sampler_core::SamplerConfig;
///
/// let config = SamplerConfig::new().with_seed(42);
/// assert_eq!(config.seed, Some(42));
///
/// let parsed = SamplerConfig::from_toml_str("seed = 42").unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerConfig {
    /// Seed for reproducible streams.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, unknown keys, or a
    /// seed outside the `u64` range.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Builds the uniform source this configuration describes.
    pub fn build_source(&self) -> SeededRng {
        match self.seed {
            Some(seed) => SeededRng::from_seed(seed),
            None => SeededRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.build_source().seed(), None);
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = SamplerConfig::new().with_seed(99);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.build_source().seed(), Some(99));
    }

    #[test]
    fn test_from_toml_empty_document() {
        let config = SamplerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    fn test_from_toml_with_seed() {
        let config = SamplerConfig::from_toml_str("seed = 12345\n").unwrap();
        assert_eq!(config.seed, Some(12345));
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = SamplerConfig::from_toml_str("threshold = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_toml_rejects_negative_seed() {
        assert!(SamplerConfig::from_toml_str("seed = -1").is_err());
    }

    #[test]
    fn test_from_toml_rejects_malformed_text() {
        assert!(SamplerConfig::from_toml_str("seed = ").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SamplerConfig::new().with_seed(5);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SamplerConfig::from_toml_str(&text).unwrap(), config);
    }
}
