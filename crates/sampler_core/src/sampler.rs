//! Distribution sampler bound to a uniform random source.
//!
//! [`DistributionSampler`] owns its [`UniformSource`] exclusively and turns
//! its uniform draws into exponential, uniform and Poisson samples.
//!
//! # Overview
//!
//! | Operation | Draws consumed |
//! |-----------|----------------|
//! | [`exponential`](DistributionSampler::exponential) | 1 |
//! | [`uniform`](DistributionSampler::uniform) | 1 |
//! | [`poisson`](DistributionSampler::poisson), `lam == 0` | 0 |
//! | [`poisson`](DistributionSampler::poisson), `0 < lam < 10` | `k + 1` for result `k` |
//! | [`poisson`](DistributionSampler::poisson), `lam >= 10` | 2 per rejection round |
//!
//! The unchecked operations assume parameters within their domain
//! (`scale > 0`, `lam >= 0`, all finite). The `try_*` operations validate
//! first and consume no draws when they reject.
//!
//! # Thread Safety
//!
//! A sampler has no shared state beyond its source. Give each thread its own
//! sampler over its own source; a single sampler must not be shared without
//! external synchronisation.

use tracing::{debug, warn};

use crate::algorithms;
use crate::config::SamplerConfig;
use crate::distributions::{Exponential, Poisson, Uniform};
use crate::error::SamplingError;
use crate::source::{SeededRng, UniformSource};

/// Samples exponential, uniform and Poisson variates from an owned source.
///
/// The source's own API stays reachable through [`source`](Self::source),
/// [`source_mut`](Self::source_mut) and [`into_inner`](Self::into_inner).
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use sampler_core::DistributionSampler;
///
/// let mut sampler = DistributionSampler::from_seed(42);
///
/// let wait = sampler.exponential(2.0);
/// let x = sampler.uniform(-1.0, 2.0);
/// let arrivals = sampler.poisson(3.5);
/// assert!(wait >= 0.0);
/// assert!((-1.0..1.0).contains(&x));
/// assert!(arrivals >= 0);
///
/// // Base generator operations via the explicit accessor.
/// let coin: bool = sampler.source_mut().gen();
/// # let _ = coin;
/// ```
#[derive(Clone, Debug)]
pub struct DistributionSampler<S = SeededRng> {
    source: S,
}

impl DistributionSampler<SeededRng> {
    /// Creates a sampler over a [`SeededRng`] initialised with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SeededRng::from_seed(seed))
    }

    /// Creates a sampler from configuration.
    ///
    /// Uses the configured seed, or operating system entropy if none is set.
    pub fn from_config(config: &SamplerConfig) -> Self {
        match config.seed {
            Some(seed) => debug!(seed, "creating seeded distribution sampler"),
            None => debug!("creating distribution sampler from entropy"),
        }
        Self::new(config.build_source())
    }
}

impl<S: UniformSource> DistributionSampler<S> {
    /// Binds a sampler to `source`, taking ownership of it.
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a shared reference to the underlying source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Draws taken here advance the same stream the sampler consumes.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the sampler and returns the underlying source.
    #[inline]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Draws from the standard exponential distribution (scale 1).
    #[inline]
    pub fn standard_exponential(&mut self) -> f64 {
        algorithms::standard_exponential(&mut self.source)
    }

    /// Draws from the exponential distribution with mean `scale`.
    ///
    /// `scale > 0` is assumed, not checked.
    #[inline]
    pub fn exponential(&mut self, scale: f64) -> f64 {
        algorithms::exponential(&mut self.source, scale)
    }

    /// Draws uniformly from `[loc, loc + scale)`.
    ///
    /// `scale > 0` is assumed, not checked.
    #[inline]
    pub fn uniform(&mut self, loc: f64, scale: f64) -> f64 {
        algorithms::uniform(&mut self.source, loc, scale)
    }

    /// Draws a Poisson-distributed count with rate `lam`.
    ///
    /// `lam >= 0` is assumed, not checked.
    #[inline]
    pub fn poisson(&mut self, lam: f64) -> i64 {
        algorithms::poisson(&mut self.source, lam)
    }

    /// Checked [`exponential`](Self::exponential).
    ///
    /// # Errors
    ///
    /// Returns `SamplingError` if `scale` is non-finite or not positive.
    pub fn try_exponential(&mut self, scale: f64) -> Result<f64, SamplingError> {
        let dist = Exponential::new(scale).inspect_err(log_rejection)?;
        Ok(self.exponential(dist.scale()))
    }

    /// Checked [`uniform`](Self::uniform).
    ///
    /// # Errors
    ///
    /// Returns `SamplingError` if `loc` is non-finite, or `scale` is
    /// non-finite or not positive.
    pub fn try_uniform(&mut self, loc: f64, scale: f64) -> Result<f64, SamplingError> {
        let dist = Uniform::new(loc, scale).inspect_err(log_rejection)?;
        Ok(self.uniform(dist.loc(), dist.scale()))
    }

    /// Checked [`poisson`](Self::poisson).
    ///
    /// # Errors
    ///
    /// Returns `SamplingError` if `lam` is non-finite or negative.
    pub fn try_poisson(&mut self, lam: f64) -> Result<i64, SamplingError> {
        let dist = Poisson::new(lam).inspect_err(log_rejection)?;
        Ok(self.poisson(dist.lam()))
    }

    /// Fills the buffer with exponential variates of mean `scale`.
    ///
    /// Equivalent to calling [`exponential`](Self::exponential) once per
    /// slot, in order. Zero-allocation.
    pub fn fill_exponential(&mut self, buffer: &mut [f64], scale: f64) {
        for value in buffer.iter_mut() {
            *value = self.exponential(scale);
        }
    }

    /// Fills the buffer with uniform variates over `[loc, loc + scale)`.
    pub fn fill_uniform(&mut self, buffer: &mut [f64], loc: f64, scale: f64) {
        for value in buffer.iter_mut() {
            *value = self.uniform(loc, scale);
        }
    }

    /// Fills the buffer with Poisson counts of rate `lam`.
    pub fn fill_poisson(&mut self, buffer: &mut [i64], lam: f64) {
        for value in buffer.iter_mut() {
            *value = self.poisson(lam);
        }
    }
}

fn log_rejection(err: &SamplingError) {
    warn!(error = %err, "rejected sampling parameter");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_from_seed_records_seed() {
        let sampler = DistributionSampler::from_seed(42);
        assert_eq!(sampler.source().seed(), Some(42));
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = SamplerConfig::new().with_seed(7);
        let mut a = DistributionSampler::from_config(&config);
        let mut b = DistributionSampler::from_seed(7);
        for _ in 0..50 {
            assert_eq!(a.poisson(12.0), b.poisson(12.0));
        }
    }

    #[test]
    fn test_from_config_without_seed_uses_entropy() {
        let sampler = DistributionSampler::from_config(&SamplerConfig::default());
        assert_eq!(sampler.source().seed(), None);
    }

    #[test]
    fn test_new_over_plain_rand_generator() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut sampler = DistributionSampler::new(StdRng::seed_from_u64(1));
        assert!(sampler.poisson(25.0) >= 0);
    }

    #[test]
    fn test_source_mut_shares_stream() {
        let mut a = DistributionSampler::from_seed(9);
        let mut b = DistributionSampler::from_seed(9);

        let _: u64 = a.source_mut().gen();
        let _: u64 = b.source_mut().gen();
        assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));

        let mut rng = b.into_inner();
        assert_eq!(a.source_mut().gen_uniform(), rng.gen_uniform());
    }

    #[test]
    fn test_standard_exponential_is_scale_one() {
        let mut a = DistributionSampler::from_seed(3);
        let mut b = DistributionSampler::from_seed(3);
        for _ in 0..100 {
            assert_eq!(a.standard_exponential(), b.exponential(1.0));
        }
    }

    #[test]
    fn test_try_operations_accept_valid_parameters() {
        let mut checked = DistributionSampler::from_seed(8);
        let mut unchecked = DistributionSampler::from_seed(8);

        assert_eq!(checked.try_exponential(2.0), Ok(unchecked.exponential(2.0)));
        assert_eq!(checked.try_uniform(1.0, 3.0), Ok(unchecked.uniform(1.0, 3.0)));
        assert_eq!(checked.try_poisson(0.0), Ok(0));
        assert_eq!(checked.try_poisson(6.0), Ok(unchecked.poisson(6.0)));
        assert_eq!(checked.try_poisson(60.0), Ok(unchecked.poisson(60.0)));
    }

    #[test]
    fn test_try_operations_reject_without_consuming_draws() {
        let mut checked = DistributionSampler::from_seed(10);
        let mut reference = DistributionSampler::from_seed(10);

        assert_eq!(
            checked.try_exponential(-1.0),
            Err(SamplingError::NonPositiveScale(-1.0))
        );
        assert!(checked.try_uniform(0.0, f64::NAN).is_err());
        assert_eq!(
            checked.try_poisson(-3.0),
            Err(SamplingError::NegativeRate(-3.0))
        );
        assert!(checked.try_poisson(f64::INFINITY).is_err());

        assert_eq!(checked.uniform(0.0, 1.0), reference.uniform(0.0, 1.0));
    }

    #[test]
    fn test_fill_matches_single_draws() {
        let mut filled = DistributionSampler::from_seed(21);
        let mut single = DistributionSampler::from_seed(21);

        let mut exp = vec![0.0; 64];
        let mut uni = vec![0.0; 64];
        let mut poi = vec![0_i64; 64];
        filled.fill_exponential(&mut exp, 0.5);
        filled.fill_uniform(&mut uni, 2.0, 3.0);
        filled.fill_poisson(&mut poi, 15.0);

        for &v in &exp {
            assert_eq!(v, single.exponential(0.5));
        }
        for &v in &uni {
            assert_eq!(v, single.uniform(2.0, 3.0));
        }
        for &v in &poi {
            assert_eq!(v, single.poisson(15.0));
        }
    }

    #[test]
    fn test_fill_empty_buffers() {
        let mut sampler = DistributionSampler::from_seed(1);
        sampler.fill_exponential(&mut [], 1.0);
        sampler.fill_uniform(&mut [], 0.0, 1.0);
        sampler.fill_poisson(&mut [], 4.0);
    }
}
