//! Integration tests for module exports.
//!
//! Verifies that public modules and types are reachable via absolute paths
//! and that the crate-root re-exports point at the same items.

/// Test that the algorithm functions accept any `UniformSource`.
#[test]
fn test_algorithms_module_exports() {
    use sampler_core::algorithms::{exponential, poisson, standard_exponential, uniform};
    use sampler_core::source::SeededRng;

    let mut rng = SeededRng::from_seed(1);
    let _ = standard_exponential(&mut rng);
    let _ = exponential(&mut rng, 2.0);
    let _ = uniform(&mut rng, 0.0, 1.0);
    let _ = poisson(&mut rng, 3.0);
}

/// Test that a caller-defined source plugs into the sampler.
#[test]
fn test_custom_uniform_source() {
    use sampler_core::{DistributionSampler, UniformSource};

    /// Always returns the same draw.
    struct Constant(f64);

    impl UniformSource for Constant {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    let mut sampler = DistributionSampler::new(Constant(0.5));
    assert_eq!(sampler.uniform(1.0, 2.0), 2.0);
    assert!((sampler.exponential(1.0) - 2.0_f64.ln()).abs() < 1e-15);
    // 0.5^k > exp(-3) holds for k <= 4.
    assert_eq!(sampler.poisson(3.0), 4);
    assert_eq!(sampler.source().0, 0.5);
}

/// Test that the distribution values implement `rand_distr::Distribution`.
#[test]
fn test_distributions_module_exports() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::Distribution;
    use sampler_core::distributions::{Exponential, Poisson, Uniform};

    let mut rng = StdRng::seed_from_u64(5);
    let _: f64 = Exponential::new(1.0).unwrap().sample(&mut rng);
    let _: f64 = Uniform::new(0.0, 1.0).unwrap().sample(&mut rng);
    let _: i64 = Poisson::new(1.0).unwrap().sample(&mut rng);
}

/// Test that error and config types are re-exported at the crate root.
#[test]
fn test_root_re_exports() {
    use sampler_core::{ConfigError, SamplerConfig, SamplingError};

    let err: sampler_core::error::SamplingError = SamplingError::NegativeRate(-1.0);
    assert!(err.to_string().contains("non-negative"));

    let config: sampler_core::config::SamplerConfig = SamplerConfig::new();
    assert_eq!(config.seed, None);

    let _: fn(String) -> ConfigError = ConfigError::Parse;
}
